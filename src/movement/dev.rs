//! Movement domain: debug-only probe and ramp gizmos.

use bevy::prelude::*;

use crate::level::{Ramp, TileGrid, ramp_triangle};
use crate::movement::{MovementState, Player, RampContact};

const PROBE_RADIUS: f32 = 0.03;

pub(crate) fn draw_probe_gizmos(
    mut gizmos: Gizmos,
    query: Query<(&Transform, &MovementState), With<Player>>,
) {
    let hit = Color::srgb(0.3, 0.9, 0.3);
    let miss = Color::srgb(0.9, 0.3, 0.3);

    for (transform, state) in &query {
        let origin = transform.translation.truncate();
        gizmos.circle_2d(
            origin + state.feet_probe,
            PROBE_RADIUS,
            if state.on_ground { hit } else { miss },
        );
        gizmos.circle_2d(
            origin + state.wall_probe,
            PROBE_RADIUS,
            if state.on_wall { hit } else { miss },
        );
    }
}

/// Outline each slope, highlighted while the player stands on that kind.
pub(crate) fn draw_ramp_gizmos(
    mut gizmos: Gizmos,
    grid: Res<TileGrid>,
    ramps: Query<(&Transform, &Ramp)>,
    players: Query<&MovementState, With<Player>>,
) {
    let active = players
        .iter()
        .next()
        .map_or(RampContact::None, |state| state.ramp);

    for (transform, ramp) in &ramps {
        let Some((a, b, c, _)) = ramp_triangle(ramp.0, grid.cell_size) else {
            continue;
        };
        let color = if ramp.0 == active {
            Color::srgb(0.3, 0.9, 0.9)
        } else {
            Color::srgb(0.6, 0.6, 0.6)
        };
        let offset = transform.translation.truncate();
        gizmos.linestrip_2d([a, b, c, a].map(|p| p + offset), color);
    }
}
