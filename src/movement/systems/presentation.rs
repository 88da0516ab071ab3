//! Movement domain: per-frame facing, animation parameters and jump sound.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::movement::{
    AnimationParams, JumpSfxEvent, MovementInput, MovementState, MovementTuning, Player,
};

/// Handle to the one-shot jump sound.
#[derive(Resource, Debug, Clone)]
pub struct JumpSfx(pub Handle<AudioSource>);

pub(crate) fn load_jump_sfx(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.insert_resource(JumpSfx(asset_server.load("audio/jump.wav")));
}

pub(crate) fn update_facing(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<&mut MovementState, With<Player>>,
) {
    for mut state in &mut query {
        if state.face_input(input.horizontal, &tuning) {
            debug!("Flipped: facing={:?}", state.facing);
        }
    }
}

pub(crate) fn animation_params(state: &MovementState, velocity: Vec2) -> AnimationParams {
    AnimationParams {
        x_speed: velocity.x.abs(),
        y_speed: velocity.y,
        is_grounded: state.on_ground,
        is_on_wall: state.on_wall,
    }
}

pub(crate) fn update_presentation(
    mut query: Query<
        (
            &MovementState,
            &LinearVelocity,
            &mut AnimationParams,
            &mut Sprite,
        ),
        With<Player>,
    >,
) {
    for (state, velocity, mut params, mut sprite) in &mut query {
        let next = animation_params(state, velocity.0);
        if *params != next {
            *params = next;
        }
        if sprite.flip_x != state.sprite_flipped {
            sprite.flip_x = state.sprite_flipped;
        }
    }
}

pub(crate) fn play_jump_sfx(
    mut commands: Commands,
    mut sfx_events: MessageReader<JumpSfxEvent>,
    sfx: Option<Res<JumpSfx>>,
) {
    for event in sfx_events.read() {
        let Some(sfx) = &sfx else {
            warn!("Jump sound not loaded, skipping {:?} jump sfx", event.kind);
            continue;
        };
        commands.spawn((AudioPlayer::new(sfx.0.clone()), PlaybackSettings::DESPAWN));
    }
}
