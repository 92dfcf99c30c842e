mod color;
mod rotate;

pub use color::{hex_to_linear, hex_to_rgb, srgb_to_linear};
pub use rotate::rotate_about_point;
