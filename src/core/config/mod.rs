pub mod config;

pub use config::{
    CircleSetConfig, GooRenderConfig, GooeyConfig, SpawnRange, WindowConfig,
    MAX_CIRCLE_COUNT, MIN_CIRCLE_COUNT,
};
