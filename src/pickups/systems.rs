//! Pickups domain: overlap detection between the player and coins.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;
use std::collections::HashSet;

use crate::movement::Player;
use crate::pickups::{Coin, CoinCollectedEvent};

pub(crate) fn detect_coin_pickups(
    mut commands: Commands,
    mut collision_events: MessageReader<CollisionStart>,
    mut coin_events: MessageWriter<CoinCollectedEvent>,
    coins: Query<&Coin>,
    players: Query<(), With<Player>>,
) {
    // A coin can appear in several start events before its despawn lands.
    let mut collected = HashSet::new();

    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (coin_entity, other) in pairs {
            let Ok(coin) = coins.get(coin_entity) else {
                continue;
            };
            if !players.contains(other) || !collected.insert(coin_entity) {
                continue;
            }

            coin_events.write(CoinCollectedEvent {
                coin: coin_entity,
                amount: coin.value,
            });
            commands.entity(coin_entity).despawn();
        }
    }
}
