//! Movement domain: fixed-step locomotion system.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::level::TileGrid;
use crate::movement::systems::probes::{AvianBody, LevelProbe};
use crate::movement::{
    JumpSfxEvent, MovementInput, MovementState, MovementTuning, Player, RampProbeShape,
};

pub(crate) fn step_player(
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    grid: Res<TileGrid>,
    spatial_query: SpatialQuery,
    mut input: ResMut<MovementInput>,
    mut sfx_events: MessageWriter<JumpSfxEvent>,
    mut query: Query<
        (
            &Transform,
            &RampProbeShape,
            &mut MovementState,
            &mut LinearVelocity,
            &mut GravityScale,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();
    let edges = input.take_edges();
    let horizontal = input.horizontal;

    for (transform, ramp_probe, mut state, mut velocity, mut gravity_scale) in &mut query {
        let mut body = AvianBody {
            velocity: &mut *velocity,
            gravity_scale: &mut *gravity_scale,
        };

        // Edges arrived since the last step and see last step's contacts
        for &edge in &edges {
            if let Some(kind) = state.apply_jump_edge(edge, &tuning, &mut body) {
                debug!(
                    "{:?} jump: facing={:?}, wall_jump_timer={}",
                    kind, state.facing, state.wall_jump.timer
                );
                sfx_events.write(JumpSfxEvent { kind });
            }
        }

        let origin = transform.translation.truncate();
        let probe = LevelProbe::new(&grid, &spatial_query, &ramp_probe.0, origin);
        let was_on_ground = state.on_ground;
        let was_on_wall = state.on_wall;

        state.fixed_step(horizontal, origin, dt, &tuning, &mut body, &probe);

        if state.on_ground != was_on_ground {
            debug!("on_ground={}, ramp={:?}", state.on_ground, state.ramp);
        }
        if state.on_wall != was_on_wall {
            debug!("on_wall={}, facing={:?}", state.on_wall, state.facing);
        }
    }
}
