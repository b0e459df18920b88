use bevy::prelude::*;

use super::stats::DebugStats;
use crate::sim::circle_set::CircleCount;

#[derive(Component)]
pub(crate) struct DebugOverlayText;

pub fn debug_overlay_spawn(mut commands: Commands) {
    // Top-left anchored UI text node; default font keeps this asset-free.
    commands.spawn((
        Text::new("(collecting stats...)"),
        TextFont {
            font_size: 13.0,
            ..Default::default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(4.0),
            left: Val::Px(6.0),
            ..Default::default()
        },
        DebugOverlayText,
    ));
}

pub fn debug_overlay_update(
    stats: Res<DebugStats>,
    count: Res<CircleCount>,
    mut q_text: Query<&mut Text, With<DebugOverlayText>>,
) {
    let Ok(mut text) = q_text.single_mut() else {
        return;
    };
    **text = format!(
        "fps={:.0} ft={:.1}ms circles={}/{}",
        stats.fps_smoothed,
        stats.frame_time_ms,
        stats.circle_count,
        count.get()
    );
}
