//! Movement domain: tuning and input resources.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct MovementTuning {
    pub player_speed: f32,
    pub jump_force: f32,
    pub base_gravity: f32,
    pub max_fall_speed: f32,
    pub fall_speed_multiplier: f32,
    /// Peak horizontal speed of the wall-jump push
    pub wall_jump_push: f32,
    /// Seconds for the push to decay from full to zero
    pub wall_jump_push_duration: f32,
    /// Horizontal distance the wall probe moves on each flip
    pub wall_span: f32,
    pub feet_probe: Vec2,
    pub wall_probe: Vec2,
    /// Fixed physics step rate in Hz
    pub fixed_hz: f64,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            player_speed: 10.0,
            jump_force: 10.0,
            base_gravity: 2.0,
            max_fall_speed: 18.0,
            fall_speed_multiplier: 2.0,
            wall_jump_push: 10.0,
            wall_jump_push_duration: 0.1,
            wall_span: 0.71,
            feet_probe: Vec2::new(0.0, -0.6),
            wall_probe: Vec2::new(0.36, 0.0),
            fixed_hz: 60.0,
        }
    }
}

impl MovementTuning {
    pub fn fall_gravity(&self) -> f32 {
        self.base_gravity * self.fall_speed_multiplier
    }
}

/// A jump button transition, delivered once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpEdge {
    Performed,
    Canceled,
}

#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    /// Horizontal axis in [-1, 1]
    pub horizontal: f32,
    /// Edges not yet consumed by a fixed step
    pub jump_edges: Vec<JumpEdge>,
}

impl MovementInput {
    pub fn push_edge(&mut self, edge: JumpEdge) {
        self.jump_edges.push(edge);
    }

    pub fn take_edges(&mut self) -> Vec<JumpEdge> {
        std::mem::take(&mut self.jump_edges)
    }
}
