use bevy::prelude::*;
use bevy::render::camera::ScalingMode;

use crate::core::components::{VIEW_CENTER, VIEW_SIZE};

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera);
    }
}

/// Maps a view-space point (100x100, Y down, origin top-left) into world
/// space (origin at the view center, Y up).
#[inline]
pub fn view_to_world(view: Vec2) -> Vec2 {
    let centered = view - VIEW_CENTER;
    Vec2::new(centered.x, -centered.y)
}

fn setup_camera(mut commands: Commands) {
    // Keep the full view space visible regardless of window aspect; the
    // longer window axis sees beyond it, which the goo quad covers.
    let projection = OrthographicProjection {
        scaling_mode: ScalingMode::AutoMin {
            min_width: VIEW_SIZE,
            min_height: VIEW_SIZE,
        },
        ..OrthographicProjection::default_2d()
    };
    commands.spawn((Camera2d, Projection::from(projection)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_center_maps_to_origin() {
        assert_eq!(view_to_world(VIEW_CENTER), Vec2::ZERO);
    }

    #[test]
    fn view_y_is_flipped() {
        // (80, 50) in view space sits right of center on the world X axis.
        assert_eq!(view_to_world(Vec2::new(80.0, 50.0)), Vec2::new(30.0, 0.0));
        // Larger view Y means lower on screen -> negative world Y.
        assert_eq!(view_to_world(Vec2::new(50.0, 80.0)), Vec2::new(0.0, -30.0));
    }
}
