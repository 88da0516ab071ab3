//! Pickups domain: coin sensors and the player's coin inventory.

mod components;
mod inventory;
mod systems;

pub use components::{Coin, spawn_coin};
pub use inventory::{CoinCollectedEvent, CoinTotalChanged, PlayerInventory};

use bevy::prelude::*;

use crate::pickups::inventory::process_coin_events;
use crate::pickups::systems::detect_coin_pickups;

pub struct PickupsPlugin;

impl Plugin for PickupsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerInventory>()
            .add_message::<CoinCollectedEvent>()
            .add_message::<CoinTotalChanged>()
            .add_systems(Update, (detect_coin_pickups, process_coin_events).chain());
    }
}
