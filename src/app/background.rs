use bevy::prelude::*;

use crate::core::system::system_order::{CircleSetUpdateSet, GooSyncSet, MotionUpdateSet};
use crate::debug::DebugPlugin;
use crate::interaction::auto_close::AutoClosePlugin;
use crate::interaction::controls::ControlsPlugin;
use crate::interaction::panel::PanelPlugin;
use crate::rendering::camera::CameraPlugin;
use crate::rendering::goo::GooPlugin;
use crate::sim::circle_set::CircleSetPlugin;
use crate::sim::motion::MotionPlugin;

/// Top-level aggregation: everything the animated background needs on top of
/// DefaultPlugins and an inserted [`GooeyConfig`](crate::GooeyConfig).
pub struct GooeyBackgroundPlugin;

impl Plugin for GooeyBackgroundPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                CircleSetUpdateSet,
                MotionUpdateSet.after(CircleSetUpdateSet),
                GooSyncSet.after(MotionUpdateSet),
            ),
        )
        .add_plugins((
            CameraPlugin,
            CircleSetPlugin,
            MotionPlugin,
            GooPlugin,
            ControlsPlugin,
            PanelPlugin,
            AutoClosePlugin,
            DebugPlugin,
        ));
    }
}
