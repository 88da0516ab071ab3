//! Level domain: tile grid resource and level geometry.

mod grid;
mod layout;
mod spawn;

pub use grid::TileGrid;
pub use layout::LevelLayout;
pub(crate) use spawn::{Ramp, ramp_triangle, spawn_level};

use bevy::prelude::*;

/// World position where the player starts.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct PlayerSpawn(pub Vec2);

/// Startup ordering for systems that depend on the spawned level.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct LevelSpawned;

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TileGrid>()
            .add_systems(Startup, spawn_level.in_set(LevelSpawned));
    }
}
