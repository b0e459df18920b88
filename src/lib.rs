pub mod app;
pub mod core;
pub mod debug;
pub mod interaction;
pub mod rendering;
pub mod sim;

// Curated re-exports
pub use crate::app::GooeyBackgroundPlugin;
pub use crate::core::components::{
    AngularSpeed, Circle, CircleIndex, CircleRadius, MotionPattern, OrbitCenter, PaletteIndex,
    Phase, ViewPosition, VIEW_CENTER, VIEW_SIZE,
};
pub use crate::core::config::{GooeyConfig, WindowConfig, MAX_CIRCLE_COUNT, MIN_CIRCLE_COUNT};
pub use crate::sim::{CircleCount, RecolorRequest};
