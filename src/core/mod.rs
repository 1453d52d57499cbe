// core/ - Host plumbing: frame loop, layers, canvas, input, GPU presentation

pub mod canvas;
pub mod display_context;
pub mod gpu_context;
pub mod input_adapter;
pub mod layer;
pub mod render_loop;
pub mod surface_renderer;
pub mod timer;

pub use canvas::{Canvas, DrawOp};
pub use display_context::DisplayContext;
pub use gpu_context::GpuContext;
pub use input_adapter::{PageCommand, WinitInput};
pub use layer::{Compositor, LayerView};
pub use render_loop::{FrameTask, RenderLoop, StopHandle};
pub use surface_renderer::SurfaceRenderer;
pub use timer::{EveryNTicks, FixedHz, FpsCounter};
