//! Movement domain: player locomotion on a fixed step.
//!
//! Input is sampled once per frame ahead of the fixed loop, the controller
//! runs in `FixedUpdate` before avian2d integrates, and facing plus
//! presentation parameters are refreshed in `Update`.

mod bootstrap;
mod components;
mod controller;
#[cfg(feature = "dev-tools")]
mod dev;
mod resources;
mod systems;

pub use components::{
    AnimationParams, Facing, GameLayer, MovementState, Player, RampContact, RampProbeShape,
};
pub use controller::{BodyAccess, JumpKind, WorldProbe};
pub use resources::{JumpEdge, MovementInput, MovementTuning};

use bevy::app::{RunFixedMainLoop, RunFixedMainLoopSystems};
use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::level::LevelSpawned;
use crate::movement::bootstrap::spawn_player;
use crate::movement::systems::{
    load_jump_sfx, play_jump_sfx, read_input, step_player, update_facing, update_presentation,
};

/// Event fired when a jump leaves the ground or a wall
#[derive(Debug)]
pub struct JumpSfxEvent {
    pub kind: JumpKind,
}

impl Message for JumpSfxEvent {}

/// Startup ordering for systems that need the player entity.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerSpawned;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_message::<JumpSfxEvent>()
            .add_systems(
                Startup,
                (
                    spawn_player.in_set(PlayerSpawned).after(LevelSpawned),
                    load_jump_sfx,
                ),
            )
            .add_systems(
                RunFixedMainLoop,
                read_input.in_set(RunFixedMainLoopSystems::BeforeFixedMainLoop),
            )
            .add_systems(FixedUpdate, step_player)
            .add_systems(
                Update,
                (update_facing, update_presentation, play_jump_sfx).chain(),
            );

        #[cfg(feature = "dev-tools")]
        app.add_systems(Update, (dev::draw_probe_gizmos, dev::draw_ramp_gizmos));
    }
}
