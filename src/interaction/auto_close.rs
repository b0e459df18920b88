use bevy::prelude::*;

use crate::core::config::GooeyConfig;

/// Countdown to a clean shutdown, armed only when `window.autoClose` (or the
/// `--auto-close` CLI override) is positive. Used for CI smoke runs.
#[derive(Resource, Deref, DerefMut)]
struct ShutdownTimer(Timer);

pub struct AutoClosePlugin;

impl Plugin for AutoClosePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, arm_shutdown_timer).add_systems(
            Update,
            tick_shutdown_timer.run_if(resource_exists::<ShutdownTimer>),
        );
    }
}

fn arm_shutdown_timer(mut commands: Commands, cfg: Res<GooeyConfig>) {
    let secs = cfg.window.auto_close;
    if secs <= 0.0 {
        return;
    }
    info!("shutdown timer armed for {secs:.1}s (window.autoClose / --auto-close)");
    commands.insert_resource(ShutdownTimer(Timer::from_seconds(secs, TimerMode::Once)));
}

fn tick_shutdown_timer(
    time: Res<Time>,
    mut timer: ResMut<ShutdownTimer>,
    mut ev_exit: EventWriter<AppExit>,
) {
    if timer.tick(time.delta()).just_finished() {
        info!("shutdown timer elapsed; exiting");
        ev_exit.write(AppExit::Success);
    }
}
