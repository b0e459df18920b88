use bevy::prelude::*;

use super::stats::DebugStats;

const LOG_INTERVAL_SECS: f32 = 1.0;

pub fn debug_logging_system(time: Res<Time>, mut stats: ResMut<DebugStats>) {
    stats.log_accum += time.delta_secs();
    if stats.log_accum >= LOG_INTERVAL_SECS {
        stats.log_accum = 0.0;
        info!(
            "SIM frame={} t={:.3}s fps={:.1} ft_ms={:.1} circles={}",
            stats.frame_counter,
            time.elapsed_secs(),
            stats.fps_smoothed,
            stats.frame_time_ms,
            stats.circle_count
        );
    }
}
