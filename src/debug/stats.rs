use bevy::prelude::*;

use crate::core::components::Circle;

/// Rolling frame statistics surfaced by the overlay and the periodic log.
#[derive(Resource, Debug, Default)]
pub struct DebugStats {
    pub fps: f32,
    pub fps_smoothed: f32,
    pub frame_time_ms: f32,
    pub frame_counter: u64,
    pub circle_count: usize,
    pub log_accum: f32,
}

pub fn debug_stats_collect_system(
    time: Res<Time>,
    q_circles: Query<&Circle>,
    mut stats: ResMut<DebugStats>,
) {
    let delta = time.delta_secs();
    if delta > 0.0 {
        stats.fps = 1.0 / delta;
        let alpha = 0.1;
        stats.fps_smoothed = alpha * stats.fps + (1.0 - alpha) * stats.fps_smoothed;
        stats.frame_time_ms = delta * 1000.0;
    }
    stats.frame_counter += 1;
    stats.circle_count = q_circles.iter().count();
}
