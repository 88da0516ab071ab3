//! UI domain: in-run HUD elements.

mod hud_coins;

use bevy::prelude::*;

use crate::ui::hud_coins::{apply_coin_totals, fade_coin_flash, spawn_coin_counter};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_coin_counter)
            .add_systems(Update, (apply_coin_totals, fade_coin_flash).chain());
    }
}
