mod color;
mod transform;

pub use color::{hex_to_linear, hex_to_rgb, linear_to_srgb, srgb_to_linear};
pub use transform::{add_on_axis, Axis, Field, Transform};
