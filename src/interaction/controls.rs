//! Keyboard control surface: circle count up/down, recolor, panel toggle.

use bevy::prelude::*;

use crate::core::system::system_order::CircleSetUpdateSet;
use crate::interaction::panel::PanelVisible;
use crate::sim::circle_set::{CircleCount, RecolorRequest};

pub struct ControlsPlugin;

impl Plugin for ControlsPlugin {
    fn build(&self, app: &mut App) {
        // Count/recolor intents must land before the set manager reacts.
        app.add_systems(Update, handle_keyboard_input.before(CircleSetUpdateSet));
    }
}

pub fn handle_keyboard_input(
    keys: Res<ButtonInput<KeyCode>>,
    mut count: ResMut<CircleCount>,
    mut recolor: EventWriter<RecolorRequest>,
    mut panel: ResMut<PanelVisible>,
    mut app_exit: EventWriter<AppExit>,
) {
    let step_up = keys.just_pressed(KeyCode::ArrowUp) || keys.just_pressed(KeyCode::Equal);
    let step_down = keys.just_pressed(KeyCode::ArrowDown) || keys.just_pressed(KeyCode::Minus);
    if step_up || step_down {
        let current = count.get();
        let desired = if step_up {
            current + 1
        } else {
            current.saturating_sub(1)
        };
        // Only flag the resource changed when the clamped value moved;
        // a press at the boundary must not rebuild the set.
        if count.bypass_change_detection().set(desired) {
            count.set_changed();
            info!("circle count -> {}", count.get());
        }
    }

    if keys.just_pressed(KeyCode::KeyR) {
        recolor.write(RecolorRequest);
        info!("recolor requested");
    }

    if keys.just_pressed(KeyCode::KeyH) {
        panel.0 = !panel.0;
        info!(
            "control panel {}",
            if panel.0 { "shown" } else { "hidden" }
        );
    }

    if keys.just_pressed(KeyCode::Escape) {
        app_exit.write(AppExit::Success);
    }
}
