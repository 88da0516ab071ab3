//! Pickups domain: coin inventory and collection messages.

use bevy::ecs::message::{Message, MessageReader, MessageWriter};
use bevy::prelude::*;

/// Resource tracking the player's collected coins
#[derive(Resource, Debug, Default)]
pub struct PlayerInventory {
    pub coins: u32,
}

impl PlayerInventory {
    /// Add coins and return the new total.
    pub fn add_coins(&mut self, amount: u32) -> u32 {
        self.coins = self.coins.saturating_add(amount);
        self.coins
    }
}

/// Event fired when the player touches a coin
#[derive(Debug)]
pub struct CoinCollectedEvent {
    pub coin: Entity,
    pub amount: u32,
}

impl Message for CoinCollectedEvent {}

/// Event carrying the inventory total after a pickup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoinTotalChanged {
    pub total: u32,
}

impl Message for CoinTotalChanged {}

/// Process coin collected events, update the inventory and announce the
/// new total
pub(crate) fn process_coin_events(
    mut coin_events: MessageReader<CoinCollectedEvent>,
    mut total_events: MessageWriter<CoinTotalChanged>,
    mut inventory: ResMut<PlayerInventory>,
) {
    for event in coin_events.read() {
        let total = inventory.add_coins(event.amount);
        debug!("Coin {:?} collected", event.coin);
        info!("Collected {} coin(s). Total: {}", event.amount, total);
        total_events.write(CoinTotalChanged { total });
    }
}
