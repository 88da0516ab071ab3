//! Pickups domain: coin components and spawn helper.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::GameLayer;

#[derive(Component, Debug)]
pub struct Coin {
    pub value: u32,
}

impl Default for Coin {
    fn default() -> Self {
        Self { value: 1 }
    }
}

const COIN_COLOR: Color = Color::srgb(0.9, 0.75, 0.2);

pub fn spawn_coin(commands: &mut Commands, position: Vec2, cell_size: f32) -> Entity {
    let size = cell_size * 0.4;
    commands
        .spawn((
            Coin::default(),
            Sprite {
                color: COIN_COLOR,
                custom_size: Some(Vec2::splat(size)),
                ..default()
            },
            Transform::from_translation(position.extend(0.5)),
            Collider::circle(size * 0.5),
            Sensor,
            CollisionEventsEnabled,
            CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player]),
        ))
        .id()
}
