//! Movement domain: player spawn from tuning and the level spawn point.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::level::PlayerSpawn;
use crate::movement::{
    AnimationParams, GameLayer, MovementState, MovementTuning, Player, RampProbeShape,
};

pub const PLAYER_RADIUS: f32 = 0.3;
/// Length of the capsule's straight segment
pub const PLAYER_LENGTH: f32 = 0.5;
/// Extra radius for the ramp overlap shape
pub const RAMP_PROBE_SKIN: f32 = 0.05;

pub(crate) fn spawn_player(
    mut commands: Commands,
    tuning: Res<MovementTuning>,
    spawn: Option<Res<PlayerSpawn>>,
) {
    let spawn_point = match spawn {
        Some(spawn) => spawn.0,
        None => {
            warn!("No player spawn point, spawning at origin");
            Vec2::ZERO
        }
    };
    // Lift clear of the floor tile
    let position = spawn_point + Vec2::new(0.0, 0.1);

    info!(
        "Spawning player at ({:.2}, {:.2}): speed={}, jump_force={}",
        position.x, position.y, tuning.player_speed, tuning.jump_force
    );

    commands.spawn((
        // Identity & Movement
        (
            Player,
            MovementState::new(tuning.feet_probe, tuning.wall_probe),
            AnimationParams::default(),
            RampProbeShape(Collider::capsule(
                PLAYER_RADIUS + RAMP_PROBE_SKIN,
                PLAYER_LENGTH,
            )),
        ),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(Vec2::new(
                PLAYER_RADIUS * 2.0,
                PLAYER_LENGTH + PLAYER_RADIUS * 2.0,
            )),
            ..default()
        },
        Transform::from_translation(position.extend(1.0)),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::capsule(PLAYER_RADIUS, PLAYER_LENGTH),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(tuning.base_gravity),
            Friction::new(0.0),
            CollisionLayers::new(
                GameLayer::Player,
                [
                    GameLayer::Ground,
                    GameLayer::RampPlus45,
                    GameLayer::RampMinus45,
                    GameLayer::Sensor,
                ],
            ),
        ),
    ));
}
