pub mod background;

pub use background::GooeyBackgroundPlugin;
