//! Movement domain: fixed-step player controller.
//!
//! Everything here is independent of the physics engine. The rigid body and
//! level queries are reached through [`BodyAccess`] and [`WorldProbe`], so a
//! step can be driven from avian2d systems or from plain test doubles.

use bevy::prelude::*;

use crate::movement::{Facing, JumpEdge, MovementState, MovementTuning, RampContact};

/// 1 / sqrt(2)
pub const SQRT_2_OVER_2: f32 = 0.707_106_78;
/// Unit tangent of a slope rising to the right.
pub const TANGENT_PLUS_45: Vec2 = Vec2::new(SQRT_2_OVER_2, SQRT_2_OVER_2);
/// Unit tangent of a slope rising to the left.
pub const TANGENT_MINUS_45: Vec2 = Vec2::new(-SQRT_2_OVER_2, SQRT_2_OVER_2);

/// Velocity and gravity access on the player's rigid body.
pub trait BodyAccess {
    fn velocity(&self) -> Vec2;
    fn set_velocity(&mut self, velocity: Vec2);
    fn set_gravity_scale(&mut self, scale: f32);
}

/// Level occupancy queries used by the ground, wall and ramp probes.
pub trait WorldProbe {
    /// True when the tile cell containing `point` is occupied.
    fn has_tile_at(&self, point: Vec2) -> bool;
    /// Current overlap with the slope colliders.
    fn ramp_contact(&self) -> RampContact;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpKind {
    Ground,
    Wall,
}

/// Linear push falloff: 1 with a freshly armed timer, 0 once it runs out.
pub fn push_decay(timer: f32, duration: f32) -> f32 {
    if duration <= 0.0 {
        return 0.0;
    }
    (1.0 - (duration - timer) / duration).clamp(0.0, 1.0)
}

/// Project a horizontal velocity onto the ramp surface.
///
/// The -45 tangent points up and to the left, so it is scaled by the negated
/// velocity: moving right runs down the slope, moving left climbs it.
pub fn ramp_velocity(horizontal_velocity: f32, ramp: RampContact) -> Option<Vec2> {
    match ramp {
        RampContact::None => None,
        RampContact::Plus45 => Some(TANGENT_PLUS_45 * horizontal_velocity),
        RampContact::Minus45 => Some(TANGENT_MINUS_45 * -horizontal_velocity),
    }
}

/// Returns `(gravity_scale, vertical_velocity)` after fall shaping.
pub fn shaped_gravity(vertical_velocity: f32, tuning: &MovementTuning) -> (f32, f32) {
    if vertical_velocity < 0.0 {
        (
            tuning.fall_gravity(),
            vertical_velocity.max(-tuning.max_fall_speed),
        )
    } else {
        (tuning.base_gravity, vertical_velocity)
    }
}

impl MovementState {
    /// Apply one jump button transition.
    ///
    /// Grounded takes precedence over the wall. Uses the contact flags from
    /// the previous fixed step.
    pub fn apply_jump_edge(
        &mut self,
        edge: JumpEdge,
        tuning: &MovementTuning,
        body: &mut impl BodyAccess,
    ) -> Option<JumpKind> {
        self.jump_latch = true;
        let mut velocity = body.velocity();

        let jumped = match edge {
            JumpEdge::Performed if self.on_ground => {
                velocity.y = tuning.jump_force;
                self.wall_jump.reset();
                Some(JumpKind::Ground)
            }
            JumpEdge::Performed if self.on_wall => {
                velocity.y = tuning.jump_force;
                self.wall_jump
                    .arm(-self.facing.sign(), tuning.wall_jump_push_duration);
                self.flip(tuning);
                Some(JumpKind::Wall)
            }
            JumpEdge::Performed => None,
            JumpEdge::Canceled => {
                // Short hop
                if velocity.y > 0.0 {
                    velocity.y /= 2.0;
                }
                None
            }
        };

        body.set_velocity(velocity);
        jumped
    }

    /// Advance the controller by one fixed step of `dt` seconds.
    pub fn fixed_step(
        &mut self,
        horizontal: f32,
        origin: Vec2,
        dt: f32,
        tuning: &MovementTuning,
        body: &mut impl BodyAccess,
        probe: &impl WorldProbe,
    ) {
        self.ramp = probe.ramp_contact();
        let mut velocity = body.velocity();

        if self.wall_jump.is_active() && horizontal == 0.0 {
            velocity.x = self.wall_jump.direction
                * tuning.wall_jump_push
                * push_decay(self.wall_jump.timer, tuning.wall_jump_push_duration);
            self.wall_jump.timer -= dt;
        } else {
            velocity.x = horizontal * tuning.player_speed;
            self.wall_jump.reset();
            if let Some(along) = ramp_velocity(velocity.x, self.ramp) {
                velocity.x = along.x;
                if !self.jump_latch {
                    velocity.y = along.y;
                }
            }
        }

        if !self.on_ground && self.jump_latch {
            self.jump_latch = false;
        }

        self.on_ground =
            probe.has_tile_at(origin + self.feet_probe) || self.ramp == RampContact::Plus45;
        self.on_wall = probe.has_tile_at(origin + self.wall_probe);

        let (gravity_scale, vertical) = shaped_gravity(velocity.y, tuning);
        velocity.y = vertical;
        body.set_gravity_scale(gravity_scale);
        body.set_velocity(velocity);
    }

    /// Turn around: mirror the sprite and move the wall probe to the new
    /// leading edge.
    pub fn flip(&mut self, tuning: &MovementTuning) {
        self.wall_probe.x += match self.facing {
            Facing::Right => -tuning.wall_span,
            Facing::Left => tuning.wall_span,
        };
        self.facing = self.facing.flipped();
        self.sprite_flipped = !self.sprite_flipped;
    }

    /// Flip when the input points away from the current facing.
    /// Returns true if a flip happened.
    pub fn face_input(&mut self, horizontal: f32, tuning: &MovementTuning) -> bool {
        let wants_flip = (horizontal > 0.0 && self.facing == Facing::Left)
            || (horizontal < 0.0 && self.facing == Facing::Right);
        if wants_flip {
            self.flip(tuning);
        }
        wants_flip
    }
}
