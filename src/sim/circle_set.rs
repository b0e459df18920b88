//! Circle set manager: owns the working set of circle entities and rebuilds
//! it whenever the requested count changes. No incremental diffing — every
//! rebuild re-randomizes colors, radii, speeds and phases, matching the
//! full-replace lifecycle of the component this reimplements.

use bevy::prelude::*;
use rand::Rng;

use crate::core::components::{
    AngularSpeed, Circle, CircleIndex, CircleRadius, MotionPattern, OrbitCenter, PaletteIndex,
    Phase, ViewPosition, VIEW_CENTER,
};
use crate::core::config::{CircleSetConfig, GooeyConfig, MAX_CIRCLE_COUNT, MIN_CIRCLE_COUNT};
use crate::core::system::system_order::CircleSetUpdateSet;
use crate::rendering::palette::random_palette_index;

/// Requested number of circles. Mutations go through [`CircleCount::set`]
/// so the 1..=15 bound holds everywhere.
#[derive(Resource, Debug, Copy, Clone, PartialEq, Eq)]
pub struct CircleCount(usize);

impl Default for CircleCount {
    fn default() -> Self {
        Self(CircleSetConfig::default().count)
    }
}

impl CircleCount {
    #[inline]
    pub fn get(&self) -> usize {
        self.0
    }

    /// Clamps into range; returns true when the stored value actually changed.
    pub fn set(&mut self, count: usize) -> bool {
        let clamped = count.clamp(MIN_CIRCLE_COUNT, MAX_CIRCLE_COUNT);
        let changed = clamped != self.0;
        self.0 = clamped;
        changed
    }
}

/// Re-sample every circle's color (and phase) without touching geometry.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct RecolorRequest;

/// Orbit center for circle `index` of `count`: evenly spaced on a ring of
/// `ring_radius` around the view center, angle = index * 2π / count.
pub fn ring_center(index: usize, count: usize, ring_radius: f32) -> Vec2 {
    let angle = index as f32 * std::f32::consts::TAU / count as f32;
    VIEW_CENTER + ring_radius * Vec2::new(angle.cos(), angle.sin())
}

/// Randomized per-circle parameters, sampled once at set creation.
#[derive(Debug, Copy, Clone)]
pub struct CircleSeed {
    pub radius: f32,
    pub palette: usize,
    pub speed: f32,
    pub phase: f32,
}

impl CircleSeed {
    pub fn sample(rng: &mut impl Rng, cfg: &CircleSetConfig) -> Self {
        Self {
            radius: rng.gen_range(cfg.radius_range.min..cfg.radius_range.max),
            palette: random_palette_index(rng),
            speed: rng.gen_range(cfg.speed_range.min..cfg.speed_range.max),
            phase: rng.gen_range(0.0..std::f32::consts::TAU),
        }
    }
}

pub struct CircleSetPlugin;

impl Plugin for CircleSetPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CircleCount>()
            .add_event::<RecolorRequest>()
            .add_systems(Startup, apply_config_count)
            .add_systems(
                Update,
                (regenerate_circles, recolor_circles)
                    .chain()
                    .in_set(CircleSetUpdateSet),
            );
    }
}

fn apply_config_count(mut count: ResMut<CircleCount>, cfg: Res<GooeyConfig>) {
    if !count.set(cfg.circles.count) {
        // Same value as the default; still mark changed so the first
        // regeneration pass runs against a definite count.
        count.set_changed();
    }
}

/// Full rebuild whenever the count changes (including the initial frame).
/// The previous set is despawned wholesale so at most one generation of
/// circles ever animates.
fn regenerate_circles(
    mut commands: Commands,
    count: Res<CircleCount>,
    cfg: Res<GooeyConfig>,
    existing: Query<Entity, With<Circle>>,
) {
    if !count.is_changed() {
        return;
    }
    for entity in existing.iter() {
        commands.entity(entity).despawn();
    }
    let mut rng = rand::thread_rng();
    let n = count.get();
    for i in 0..n {
        let seed = CircleSeed::sample(&mut rng, &cfg.circles);
        let center = ring_center(i, n, cfg.circles.ring_radius);
        commands.spawn((
            Circle,
            CircleIndex(i),
            OrbitCenter(center),
            CircleRadius(seed.radius),
            PaletteIndex(seed.palette),
            AngularSpeed(seed.speed),
            Phase(seed.phase),
            ViewPosition(center),
            MotionPattern::for_index(i),
        ));
    }
    info!("circle set rebuilt: count={n}");
}

/// Recolor keeps every circle's center, radius and speed and only re-samples
/// its palette color. The phase is re-randomized too: the original restarts
/// its animation loop whenever the list is replaced.
fn recolor_circles(
    mut requests: EventReader<RecolorRequest>,
    mut circles: Query<(&mut PaletteIndex, &mut Phase), With<Circle>>,
) {
    if requests.is_empty() {
        return;
    }
    requests.clear();
    let mut rng = rand::thread_rng();
    for (mut palette, mut phase) in circles.iter_mut() {
        palette.0 = random_palette_index(&mut rng);
        phase.0 = rng.gen_range(0.0..std::f32::consts::TAU);
    }
    info!("circle set recolored");
}
