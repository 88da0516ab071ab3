//! Camera domain: smoothed follow of an injected target entity.

mod smoothing;

pub use smoothing::smooth_damp;

use bevy::prelude::*;
use bevy::transform::TransformSystems;

use crate::movement::{Player, PlayerSpawned};

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct CameraTuning {
    pub follow_offset: Vec2,
    pub smooth_time: f32,
    /// Screen pixels per world unit
    pub pixels_per_unit: f32,
}

impl Default for CameraTuning {
    fn default() -> Self {
        Self {
            follow_offset: Vec2::new(0.0, 1.5),
            smooth_time: 0.2,
            pixels_per_unit: 48.0,
        }
    }
}

/// Follows `target`; depth stays at the z the camera was spawned with.
#[derive(Component, Debug)]
pub struct CameraFollow {
    pub target: Entity,
    pub velocity: Vec2,
}

impl CameraFollow {
    pub fn new(target: Entity) -> Self {
        Self {
            target,
            velocity: Vec2::ZERO,
        }
    }
}

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraTuning>()
            .add_systems(Startup, spawn_camera.after(PlayerSpawned))
            .add_systems(
                PostUpdate,
                follow_target.before(TransformSystems::Propagate),
            );
    }
}

fn spawn_camera(
    mut commands: Commands,
    tuning: Res<CameraTuning>,
    players: Query<(Entity, &Transform), With<Player>>,
) {
    let Ok((player, player_transform)) = players.single() else {
        warn!("No player to follow, spawning a static camera");
        commands.spawn(Camera2d);
        return;
    };

    let start = player_transform.translation.truncate() + tuning.follow_offset;
    commands.spawn((
        Camera2d,
        Projection::from(OrthographicProjection {
            scale: 1.0 / tuning.pixels_per_unit,
            ..OrthographicProjection::default_2d()
        }),
        Transform::from_translation(start.extend(0.0)),
        CameraFollow::new(player),
    ));
}

fn follow_target(
    time: Res<Time>,
    tuning: Res<CameraTuning>,
    targets: Query<&Transform, Without<CameraFollow>>,
    mut cameras: Query<(&mut Transform, &mut CameraFollow)>,
) {
    let dt = time.delta_secs();

    for (mut transform, mut follow) in &mut cameras {
        let Ok(target) = targets.get(follow.target) else {
            continue;
        };

        let goal = target.translation.truncate() + tuning.follow_offset;
        let current = transform.translation.truncate();
        let next = smooth_damp(current, goal, &mut follow.velocity, tuning.smooth_time, dt);
        transform.translation.x = next.x;
        transform.translation.y = next.y;
    }
}
