//! Gooey merge effect: a fullscreen quad whose fragment shader sums a
//! polynomial falloff field over the packed circle set and thresholds it at
//! an iso value with a soft edge. Overlapping circles merge smoothly — the
//! field-threshold analogue of a blur + alpha-threshold filter.

use bevy::prelude::*;
use bevy::render::render_resource::{AsBindGroup, ShaderRef, ShaderType};
use bevy::sprite::{AlphaMode2d, Material2d, Material2dPlugin, MeshMaterial2d};

use crate::core::components::{
    Circle, CircleIndex, CircleRadius, PaletteIndex, ViewPosition, VIEW_SIZE,
};
use crate::core::config::GooeyConfig;
use crate::core::system::system_order::{GooSyncSet, MotionUpdateSet};
use crate::rendering::camera::view_to_world;
use crate::rendering::palette::PALETTE;

/// Uniform slots for packed circles; the set itself never exceeds 15.
pub const MAX_CIRCLES: usize = 16;
/// Color table slots; the palette occupies the first 10.
pub const MAX_COLORS: usize = 16;

#[repr(C, align(16))]
#[derive(Clone, Copy, ShaderType, Debug)]
struct GooUniform {
    // v0: (circle_count, iso, softness, radius_scale)
    v0: Vec4,
    // v1: (radius_multiplier, reserved, reserved, reserved)
    v1: Vec4,
    // xy = world-space position, z = radius, w = palette slot
    circles: [Vec4; MAX_CIRCLES],
    colors: [Vec4; MAX_COLORS],
}

impl Default for GooUniform {
    fn default() -> Self {
        Self {
            v0: Vec4::new(0.0, 0.6, 0.04, 1.0),
            v1: Vec4::new(1.0, 0.0, 0.0, 0.0),
            circles: [Vec4::ZERO; MAX_CIRCLES],
            colors: [Vec4::ZERO; MAX_COLORS],
        }
    }
}

#[derive(Asset, AsBindGroup, TypePath, Debug, Clone, Default)]
pub struct GooMaterial {
    #[uniform(0)]
    data: GooUniform,
}

impl Material2d for GooMaterial {
    fn fragment_shader() -> ShaderRef {
        "shaders/goo.wgsl".into()
    }
    fn alpha_mode(&self) -> AlphaMode2d {
        AlphaMode2d::Blend
    }
}

/// Runtime-tweakable render parameters, seeded from config.
#[derive(Resource, Debug, Clone)]
pub struct GooParams {
    pub iso: f32,
    pub softness: f32,
    pub radius_multiplier: f32,
}

impl Default for GooParams {
    fn default() -> Self {
        Self {
            iso: 0.6,
            softness: 0.04,
            radius_multiplier: 1.0,
        }
    }
}

#[derive(Component)]
pub struct GooQuad;

pub struct GooPlugin;

impl Plugin for GooPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GooParams>()
            .add_plugins(Material2dPlugin::<GooMaterial>::default())
            .configure_sets(Update, GooSyncSet.after(MotionUpdateSet))
            .add_systems(Startup, (apply_config_to_params, setup_goo_quad))
            .add_systems(
                Update,
                (update_goo_material.in_set(GooSyncSet), tweak_goo_params),
            );
    }
}

fn apply_config_to_params(mut params: ResMut<GooParams>, cfg: Res<GooeyConfig>) {
    params.iso = cfg.goo.iso;
    params.softness = cfg.goo.softness.max(0.0);
    params.radius_multiplier = cfg.goo.radius_multiplier.max(0.0001);
}

fn setup_goo_quad(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<GooMaterial>>,
) {
    // Oversized relative to the view so wide/tall windows stay covered; the
    // fragment shader works from world position, not quad UVs.
    let mesh_handle = meshes.add(Mesh::from(Rectangle::new(VIEW_SIZE * 4.0, VIEW_SIZE * 4.0)));

    let mut mat = GooMaterial::default();
    for (i, color) in PALETTE.iter().enumerate() {
        let srgb = color.to_srgba();
        mat.data.colors[i] = Vec4::new(srgb.red, srgb.green, srgb.blue, 1.0);
    }
    let material_handle = materials.add(mat);

    commands.spawn((
        Mesh2d::from(mesh_handle),
        MeshMaterial2d(material_handle),
        Transform::from_xyz(0.0, 0.0, 0.0),
        Visibility::Visible,
        GooQuad,
    ));
}

/// Packs the animated circle set into the material uniform, in creation
/// order (circle index), every frame.
fn update_goo_material(
    circles: Query<(&CircleIndex, &ViewPosition, &CircleRadius, &PaletteIndex), With<Circle>>,
    mut materials: ResMut<Assets<GooMaterial>>,
    q_mat: Query<&MeshMaterial2d<GooMaterial>, With<GooQuad>>,
    params: Res<GooParams>,
) {
    let Ok(handle_comp) = q_mat.single() else {
        return;
    };
    let Some(mat) = materials.get_mut(&handle_comp.0) else {
        return;
    };

    mat.data.v0.y = params.iso;
    mat.data.v0.z = params.softness.max(1e-4);
    mat.data.v1.x = params.radius_multiplier.max(0.0001);

    // Derive radius_scale so the iso contour of a lone circle sits at its
    // nominal radius. Kernel f = (1 - (d/R)^2)^3 with R = radius_scale * r:
    // solving f(d = r) = iso gives radius_scale = 1 / sqrt(1 - iso^(1/3)).
    let iso = params.iso.clamp(1e-4, 0.9999);
    let k = (1.0 - iso.powf(1.0 / 3.0)).max(1e-4).sqrt();
    mat.data.v0.w = 1.0 / k;

    let mut packed: Vec<_> = circles.iter().collect();
    packed.sort_by_key(|(index, _, _, _)| index.0);
    let mut n = 0usize;
    for (_, pos, radius, palette) in packed {
        if n >= MAX_CIRCLES {
            break;
        }
        // The shader samples in world space, so the Y flip out of the
        // 100x100 view happens here, once, at packing time.
        let world = view_to_world(pos.0);
        mat.data.circles[n] = Vec4::new(world.x, world.y, radius.0, palette.0 as f32);
        n += 1;
    }
    mat.data.v0.x = n as f32;
}

fn tweak_goo_params(mut params: ResMut<GooParams>, keys: Res<ButtonInput<KeyCode>>) {
    let mut dirty = false;
    if keys.just_pressed(KeyCode::BracketLeft) {
        params.iso = (params.iso - 0.05).max(0.2);
        dirty = true;
    }
    if keys.just_pressed(KeyCode::BracketRight) {
        params.iso = (params.iso + 0.05).min(1.5);
        dirty = true;
    }
    if dirty {
        info!("goo params updated: iso={:.2}", params.iso);
    }
}
