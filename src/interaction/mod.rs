pub mod auto_close;
pub mod controls;
pub mod panel;

pub use auto_close::AutoClosePlugin;
pub use controls::ControlsPlugin;
pub use panel::{PanelPlugin, PanelVisible};
