use bevy::prelude::*;

use gooey_background::core::components::{
    Circle, CircleIndex, CircleRadius, MotionPattern, OrbitCenter, Phase, ViewPosition,
};
use gooey_background::core::config::GooeyConfig;
use gooey_background::sim::circle_set::{CircleCount, CircleSetPlugin};
use gooey_background::sim::motion::MotionPlugin;

fn test_app() -> App {
    let mut app = App::new();
    app.insert_resource(GooeyConfig::default())
        .add_plugins((CircleSetPlugin, MotionPlugin));
    app
}

#[test]
fn pattern_assignment_follows_index_mod_five() {
    let mut app = test_app();
    app.world_mut().resource_mut::<CircleCount>().set(12);
    app.update();
    app.update();

    let world = app.world_mut();
    let mut query = world.query::<(&CircleIndex, &MotionPattern)>();
    let mut seen = 0;
    for (index, pattern) in query.iter(world) {
        assert_eq!(
            *pattern,
            MotionPattern::for_index(index.0),
            "circle {} has the wrong pattern",
            index.0
        );
        seen += 1;
    }
    assert_eq!(seen, 12);
}

#[test]
fn positions_match_pattern_formula_each_frame() {
    let mut app = test_app();
    app.world_mut().resource_mut::<CircleCount>().set(10);
    app.update();
    app.update();

    for _ in 0..5 {
        app.update();
        let world = app.world_mut();
        let mut query =
            world.query::<(&MotionPattern, &Phase, &OrbitCenter, &CircleRadius, &ViewPosition)>();
        for (pattern, phase, center, radius, pos) in query.iter(world) {
            let expected = center.0 + pattern.offset(phase.0, radius.0);
            assert!(
                pos.0.distance(expected) < 1e-4,
                "position {:?} diverged from pattern formula {expected:?}",
                pos.0
            );
        }
    }
}

#[test]
fn circle_pattern_entities_orbit_at_seven_tenths_radius() {
    let mut app = test_app();
    app.world_mut().resource_mut::<CircleCount>().set(13);
    app.update();
    app.update();

    for _ in 0..25 {
        app.update();
        let world = app.world_mut();
        let mut query = world.query::<(&CircleIndex, &OrbitCenter, &CircleRadius, &ViewPosition)>();
        for (index, center, radius, pos) in query.iter(world) {
            if index.0 % 5 != 2 {
                continue;
            }
            let d = pos.0.distance(center.0);
            assert!(
                (d - 0.7 * radius.0).abs() < 1e-3,
                "circle-pattern entity {} at distance {d}, expected {}",
                index.0,
                0.7 * radius.0
            );
        }
    }
}

#[test]
fn motion_runs_without_any_circles() {
    let mut app = App::new();
    // Motion engine alone, empty world: must tick without panicking.
    app.add_plugins(MotionPlugin);
    app.update();
    app.update();
    let world = app.world_mut();
    let mut query = world.query_filtered::<Entity, With<Circle>>();
    let count = query.iter(world).count();
    assert_eq!(count, 0);
}
