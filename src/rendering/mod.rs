pub mod camera;
pub mod goo;
pub mod palette;

pub use camera::CameraPlugin;
pub use goo::{GooMaterial, GooParams, GooPlugin, MAX_CIRCLES};
pub use palette::{color_for_index, PALETTE};
