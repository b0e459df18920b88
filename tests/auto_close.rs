use std::time::Duration;

use bevy::prelude::*;

use gooey_background::core::config::GooeyConfig;
use gooey_background::interaction::auto_close::AutoClosePlugin;

fn test_app(auto_close: f32) -> App {
    let mut cfg = GooeyConfig::default();
    cfg.window.auto_close = auto_close;
    let mut app = App::new();
    app.insert_resource(cfg)
        .init_resource::<Time>()
        .add_event::<AppExit>()
        .add_plugins(AutoClosePlugin);
    app
}

fn advance(app: &mut App, secs: f32) {
    app.world_mut()
        .resource_mut::<Time>()
        .advance_by(Duration::from_secs_f32(secs));
    app.update();
}

fn exit_requested(app: &App) -> bool {
    let events = app.world().resource::<Events<AppExit>>();
    events.get_cursor().read(events).next().is_some()
}

#[test]
fn timer_exits_only_after_configured_seconds() {
    let mut app = test_app(1.0);
    app.update();

    advance(&mut app, 0.6);
    assert!(!exit_requested(&app), "exit must wait for the full duration");

    advance(&mut app, 0.6);
    assert!(exit_requested(&app), "exit expected once the timer elapses");
}

#[test]
fn zero_duration_never_arms_the_timer() {
    let mut app = test_app(0.0);
    app.update();
    for _ in 0..5 {
        advance(&mut app, 10.0);
    }
    assert!(!exit_requested(&app));
}
