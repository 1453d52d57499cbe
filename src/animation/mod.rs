// animation/ - Scroll bindings, reveal tweens and per-frame ticks

mod binding;
mod easing;
mod reveal;
mod tick;
mod trigger;

pub use binding::{ScrollBinding, ScrollEngine, Target};
pub use easing::Ease;
pub use reveal::{Direction, RevealTween, REVEAL_DURATION, REVEAL_START};
pub use tick::{FrameDelta, FrameTicker, Oscillation};
pub use trigger::{progress, Edge, Marker, MarkerParseError, TriggerRegion};
