use bevy::prelude::*;

/// Side length of the normalized view space the circles live in.
pub const VIEW_SIZE: f32 = 100.0;

/// Center of the view space; the orbit ring is laid out around this point.
pub const VIEW_CENTER: Vec2 = Vec2::new(VIEW_SIZE * 0.5, VIEW_SIZE * 0.5);

/// Marker component identifying a circle entity in the animated set.
#[derive(Component)]
pub struct Circle;

/// Creation index within the set. Drives motion-pattern selection and the
/// order circles are packed into the goo material.
#[derive(Component, Debug, Deref, Copy, Clone, PartialEq, Eq)]
pub struct CircleIndex(pub usize);

/// Fixed trajectory center in view space. Never changed by the motion engine.
#[derive(Component, Debug, Deref, Copy, Clone)]
pub struct OrbitCenter(pub Vec2);

/// Circle radius, used both for the trajectory amplitude and rendering.
#[derive(Component, Debug, Deref, Copy, Clone)]
pub struct CircleRadius(pub f32);

/// Per-frame phase increment.
#[derive(Component, Debug, Deref, Copy, Clone)]
pub struct AngularSpeed(pub f32);

/// Phase angle advanced each frame; randomized whenever the set is rebuilt.
#[derive(Component, Debug, Deref, DerefMut, Copy, Clone)]
pub struct Phase(pub f32);

/// Index into the fixed color palette.
#[derive(Component, Debug, Deref, Copy, Clone, PartialEq, Eq)]
pub struct PaletteIndex(pub usize);

/// Current animated position in view space (orbit center + pattern offset).
/// Written every frame by the motion engine; read by the goo renderer.
#[derive(Component, Debug, Deref, Copy, Clone, Default)]
pub struct ViewPosition(pub Vec2);

/// One of five fixed trajectory shapes, selected by circle index modulo 5.
#[derive(Component, Debug, Copy, Clone, PartialEq, Eq)]
pub enum MotionPattern {
    Ellipse,
    FigureEight,
    Circle,
    SlowDrift,
    Spiral,
}

impl MotionPattern {
    pub const COUNT: usize = 5;

    #[inline]
    pub fn for_index(i: usize) -> Self {
        match i % Self::COUNT {
            0 => Self::Ellipse,
            1 => Self::FigureEight,
            2 => Self::Circle,
            3 => Self::SlowDrift,
            _ => Self::Spiral,
        }
    }

    /// Trajectory offset from the orbit center for phase `theta` and circle
    /// radius `r`. Spiral amplitude grows slowly with accumulated phase.
    pub fn offset(self, theta: f32, r: f32) -> Vec2 {
        match self {
            Self::Ellipse => Vec2::new(
                r * 0.8 * (theta * 0.8).cos(),
                r * 0.5 * (theta * 1.2).sin(),
            ),
            Self::FigureEight => {
                Vec2::new(r * 0.6 * theta.sin(), r * 0.4 * (theta * 2.0).sin())
            }
            Self::Circle => Vec2::new(r * 0.7 * theta.cos(), r * 0.7 * theta.sin()),
            Self::SlowDrift => Vec2::new(
                r * 0.3 * (theta * 0.5).sin(),
                r * 0.3 * (theta * 0.5).cos(),
            ),
            Self::Spiral => {
                let spiral = 0.5 + theta * 0.01;
                Vec2::new(r * spiral * theta.cos(), r * spiral * theta.sin())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_selection_wraps_mod_five() {
        assert_eq!(MotionPattern::for_index(0), MotionPattern::Ellipse);
        assert_eq!(MotionPattern::for_index(2), MotionPattern::Circle);
        assert_eq!(MotionPattern::for_index(4), MotionPattern::Spiral);
        assert_eq!(MotionPattern::for_index(5), MotionPattern::Ellipse);
        assert_eq!(MotionPattern::for_index(12), MotionPattern::Circle);
    }

    #[test]
    fn circle_pattern_keeps_constant_distance() {
        let r = 14.0;
        for step in 0..32 {
            let theta = step as f32 * 0.37;
            let d = MotionPattern::Circle.offset(theta, r).length();
            assert!(
                (d - 0.7 * r).abs() < 1e-4,
                "expected distance {} got {d} at theta {theta}",
                0.7 * r
            );
        }
    }

    #[test]
    fn spiral_amplitude_grows_with_phase() {
        let r = 10.0;
        let near = MotionPattern::Spiral.offset(0.0, r).length();
        let far = MotionPattern::Spiral
            .offset(40.0 * std::f32::consts::TAU, r)
            .length();
        assert!(far > near, "spiral should widen as phase accumulates");
    }
}
