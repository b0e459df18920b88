pub mod circle_set;
pub mod motion;

pub use circle_set::{CircleCount, CircleSetPlugin, RecolorRequest};
pub use motion::MotionPlugin;
