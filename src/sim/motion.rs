//! Motion engine: advances every circle's phase once per frame and derives
//! its animated position from the fixed orbit center plus the pattern offset.
//! Positions are allowed to leave the 100x100 view; clipping is the
//! renderer's concern.

use bevy::prelude::*;

use crate::core::components::{
    AngularSpeed, Circle, CircleRadius, MotionPattern, OrbitCenter, Phase, ViewPosition,
};
use crate::core::system::system_order::{CircleSetUpdateSet, MotionUpdateSet};

pub struct MotionPlugin;

impl Plugin for MotionPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(Update, MotionUpdateSet.after(CircleSetUpdateSet))
            .add_systems(Update, drive_circles.in_set(MotionUpdateSet));
    }
}

/// Per-frame step. The phase increment is deliberately per frame rather than
/// time-scaled: the speed range carries the original per-frame semantics.
pub fn drive_circles(
    mut circles: Query<
        (
            &mut Phase,
            &mut ViewPosition,
            &AngularSpeed,
            &OrbitCenter,
            &CircleRadius,
            &MotionPattern,
        ),
        With<Circle>,
    >,
) {
    for (mut phase, mut pos, speed, center, radius, pattern) in circles.iter_mut() {
        phase.0 += speed.0;
        pos.0 = center.0 + pattern.offset(phase.0, radius.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::components::CircleIndex;

    fn spawn_test_circle(world: &mut World, index: usize, speed: f32) -> Entity {
        world
            .spawn((
                Circle,
                CircleIndex(index),
                OrbitCenter(Vec2::new(50.0, 50.0)),
                CircleRadius(12.0),
                AngularSpeed(speed),
                Phase(0.0),
                ViewPosition(Vec2::new(50.0, 50.0)),
                MotionPattern::for_index(index),
            ))
            .id()
    }

    #[test]
    fn phase_advances_by_speed_each_frame() {
        let mut world = World::new();
        let e = spawn_test_circle(&mut world, 0, 0.02);
        let mut schedule = Schedule::default();
        schedule.add_systems(drive_circles);
        for _ in 0..3 {
            schedule.run(&mut world);
        }
        let phase = world.get::<Phase>(e).unwrap();
        assert!((phase.0 - 0.06).abs() < 1e-6);
    }

    #[test]
    fn circle_pattern_position_is_on_orbit() {
        let mut world = World::new();
        // index 2 -> MotionPattern::Circle
        let e = spawn_test_circle(&mut world, 2, 0.5);
        let mut schedule = Schedule::default();
        schedule.add_systems(drive_circles);
        for _ in 0..7 {
            schedule.run(&mut world);
        }
        let pos = world.get::<ViewPosition>(e).unwrap().0;
        let center = world.get::<OrbitCenter>(e).unwrap().0;
        let r = world.get::<CircleRadius>(e).unwrap().0;
        assert!(
            (pos.distance(center) - 0.7 * r).abs() < 1e-4,
            "circle trajectory must stay at 0.7*r from its orbit center"
        );
    }

    #[test]
    fn orbit_center_never_moves() {
        let mut world = World::new();
        let e = spawn_test_circle(&mut world, 4, 0.3);
        let before = world.get::<OrbitCenter>(e).unwrap().0;
        let mut schedule = Schedule::default();
        schedule.add_systems(drive_circles);
        for _ in 0..50 {
            schedule.run(&mut world);
        }
        let after = world.get::<OrbitCenter>(e).unwrap().0;
        assert_eq!(before, after);
    }

    #[test]
    fn empty_set_is_a_no_op() {
        let mut world = World::new();
        let mut schedule = Schedule::default();
        schedule.add_systems(drive_circles);
        schedule.run(&mut world); // must not panic
        assert_eq!(world.entities().len(), 0);
    }
}
