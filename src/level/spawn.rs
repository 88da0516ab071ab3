//! Level domain: spawning tiles, ramps, and coins from the parsed layout.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::LevelDef;
use crate::level::{LevelLayout, PlayerSpawn};
use crate::movement::{GameLayer, RampContact};
use crate::pickups::spawn_coin;

/// Slope collider; the payload says which way it rises.
#[derive(Component, Debug)]
pub struct Ramp(pub RampContact);

const TILE_COLOR: Color = Color::srgb(0.35, 0.42, 0.35);
const RAMP_COLOR: Color = Color::srgb(0.45, 0.38, 0.3);

/// Ramp meshes are skipped when no 2D material assets exist (headless apps).
pub(crate) fn spawn_level(
    mut commands: Commands,
    level: Res<LevelDef>,
    mut meshes: ResMut<Assets<Mesh>>,
    materials: Option<ResMut<Assets<ColorMaterial>>>,
) {
    let layout = LevelLayout::parse(&level);
    let cell_size = layout.grid.cell_size;

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);

    // One collider per run so the capsule has no internal edges to catch on
    let runs = layout.grid.horizontal_runs();
    for &(start, len) in &runs {
        let first = layout.grid.cell_center(start);
        let last = layout.grid.cell_center(start + IVec2::new(len - 1, 0));
        let size = Vec2::new(len as f32 * cell_size, cell_size);
        commands.spawn((
            Sprite {
                color: TILE_COLOR,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(first.midpoint(last).extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            ground_layers,
        ));
    }

    let ramp_material = materials.map(|mut materials| {
        materials.add(ColorMaterial::from_color(RAMP_COLOR))
    });
    for &(cell, slope) in &layout.ramps {
        let Some((a, b, c, layer)) = ramp_triangle(slope, cell_size) else {
            continue;
        };
        let center = layout.grid.cell_center(cell);
        let mut ramp = commands.spawn((
            Ramp(slope),
            Transform::from_translation(center.extend(0.0)),
            RigidBody::Static,
            Collider::triangle(a, b, c),
            CollisionLayers::new(layer, [GameLayer::Player]),
        ));
        if let Some(material) = &ramp_material {
            ramp.insert((
                Mesh2d(meshes.add(Triangle2d::new(a, b, c))),
                MeshMaterial2d(material.clone()),
            ));
        }
    }

    for &cell in &layout.coins {
        spawn_coin(&mut commands, layout.grid.cell_center(cell), cell_size);
    }

    if layout.grid.is_empty() {
        warn!("Level '{}' has no solid tiles", level.name);
    }
    if layout.spawn.is_none() {
        warn!("Level '{}' has no player spawn, using cell (0, 0)", level.name);
    }

    info!(
        "Spawned level '{}': {} tiles in {} colliders, {} ramps, {} coins",
        level.name,
        layout.grid.len(),
        runs.len(),
        layout.ramps.len(),
        layout.coins.len()
    );

    commands.insert_resource(PlayerSpawn(layout.spawn_point()));
    commands.insert_resource(layout.grid);
}

/// Local triangle (counter-clockwise) and physics layer for a slope cell.
pub(crate) fn ramp_triangle(slope: RampContact, cell_size: f32) -> Option<(Vec2, Vec2, Vec2, GameLayer)> {
    let h = cell_size * 0.5;
    match slope {
        RampContact::Plus45 => Some((
            Vec2::new(-h, -h),
            Vec2::new(h, -h),
            Vec2::new(h, h),
            GameLayer::RampPlus45,
        )),
        RampContact::Minus45 => Some((
            Vec2::new(-h, -h),
            Vec2::new(h, -h),
            Vec2::new(-h, h),
            GameLayer::RampMinus45,
        )),
        RampContact::None => None,
    }
}
