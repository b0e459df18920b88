//! Control panel UI: current count readout, one swatch per circle, key
//! hints. Presentation only — all state it shows lives in the sim layer.

use bevy::prelude::*;

use crate::core::components::{Circle, CircleIndex, PaletteIndex};
use crate::core::config::{MAX_CIRCLE_COUNT, MIN_CIRCLE_COUNT};
use crate::core::system::system_order::CircleSetUpdateSet;
use crate::rendering::palette::color_for_index;
use crate::sim::circle_set::CircleCount;

/// Whether the control panel is visible. Toggled from the keyboard; purely
/// presentational, never consulted by the sim.
#[derive(Resource, Debug, Clone, Copy)]
pub struct PanelVisible(pub bool);

impl Default for PanelVisible {
    fn default() -> Self {
        Self(true)
    }
}

#[derive(Component)]
struct PanelRoot;

#[derive(Component)]
struct CountText;

#[derive(Component)]
struct SwatchGrid;

#[derive(Component)]
struct Swatch;

pub struct PanelPlugin;

impl Plugin for PanelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PanelVisible>()
            .add_systems(Startup, setup_panel)
            .add_systems(
                Update,
                (update_count_text, rebuild_swatches, apply_panel_visibility)
                    .after(CircleSetUpdateSet),
            );
    }
}

fn setup_panel(mut commands: Commands) {
    commands
        .spawn((
            Node {
                width: Val::Px(260.0),
                height: Val::Auto,
                position_type: PositionType::Absolute,
                right: Val::Px(10.0),
                top: Val::Px(10.0),
                padding: UiRect::all(Val::Px(15.0)),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(10.0),
                ..default()
            },
            BackgroundColor(Color::srgba(0.1, 0.1, 0.1, 0.85)),
            PanelRoot,
        ))
        .with_children(|panel| {
            panel.spawn((
                Text::new("Gooey Background"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));

            panel.spawn((
                Text::new("Circles: 0"),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(0.3, 0.8, 1.0)),
                CountText,
            ));

            // One swatch per circle; children are rebuilt whenever the set
            // or its colors change.
            panel.spawn((
                Node {
                    width: Val::Percent(100.0),
                    flex_direction: FlexDirection::Row,
                    flex_wrap: FlexWrap::Wrap,
                    column_gap: Val::Px(6.0),
                    row_gap: Val::Px(6.0),
                    ..default()
                },
                SwatchGrid,
            ));

            panel.spawn((
                Text::new(
                    "Up/Down: circle count (1-15)\n\
                     R: recolor\n\
                     H: hide panel\n\
                     [ ]: goo threshold\n\
                     Esc: exit",
                ),
                TextFont {
                    font_size: 13.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.8, 0.8)),
            ));
        });
}

fn update_count_text(
    count: Res<CircleCount>,
    mut q_text: Query<&mut Text, With<CountText>>,
) {
    if !count.is_changed() {
        return;
    }
    if let Ok(mut text) = q_text.single_mut() {
        **text = format!(
            "Circles: {} (min {MIN_CIRCLE_COUNT}, max {MAX_CIRCLE_COUNT})",
            count.get()
        );
    }
}

/// Rebuild the swatch row whenever any circle's color (or the set itself)
/// changes. Cheap at <= 15 entries, so no incremental diffing here either.
fn rebuild_swatches(
    mut commands: Commands,
    changed: Query<Entity, (With<Circle>, Changed<PaletteIndex>)>,
    circles: Query<(&CircleIndex, &PaletteIndex), With<Circle>>,
    q_grid: Query<Entity, With<SwatchGrid>>,
    q_swatches: Query<Entity, With<Swatch>>,
) {
    if changed.is_empty() {
        return;
    }
    let Ok(grid) = q_grid.single() else {
        return;
    };
    for entity in q_swatches.iter() {
        commands.entity(entity).despawn();
    }
    let mut ordered: Vec<_> = circles.iter().collect();
    ordered.sort_by_key(|(index, _)| index.0);
    commands.entity(grid).with_children(|grid| {
        for (index, palette) in ordered {
            grid.spawn((
                Node {
                    width: Val::Px(38.0),
                    height: Val::Px(24.0),
                    justify_content: JustifyContent::Center,
                    align_items: AlignItems::Center,
                    ..default()
                },
                BackgroundColor(color_for_index(palette.0)),
                Swatch,
            ))
            .with_children(|swatch| {
                swatch.spawn((
                    Text::new(format!("#{}", index.0 + 1)),
                    TextFont {
                        font_size: 11.0,
                        ..default()
                    },
                    TextColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
                ));
            });
        }
    });
}

fn apply_panel_visibility(
    visible: Res<PanelVisible>,
    mut q_panel: Query<&mut Visibility, With<PanelRoot>>,
) {
    if !visible.is_changed() {
        return;
    }
    if let Ok(mut vis) = q_panel.single_mut() {
        vis.set_if_neq(if visible.0 {
            Visibility::Visible
        } else {
            Visibility::Hidden
        });
    }
}
