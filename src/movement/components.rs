//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Solid tiles (floors and walls share the tile grid)
    Ground,
    /// Slope colliders rising to the right
    RampPlus45,
    /// Slope colliders rising to the left
    RampMinus45,
    /// Player character
    Player,
    /// Sensors (coins) - should not block movement
    Sensor,
}

#[derive(Component, Debug)]
pub struct Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn flipped(self) -> Self {
        match self {
            Facing::Right => Facing::Left,
            Facing::Left => Facing::Right,
        }
    }

    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }
}

/// Which slope the player capsule is currently overlapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RampContact {
    #[default]
    None,
    Plus45,
    Minus45,
}

/// Decaying horizontal impulse armed by a wall jump.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WallJumpPush {
    /// -1 pushes left, +1 pushes right, 0 when never armed
    pub direction: f32,
    /// Seconds of push remaining
    pub timer: f32,
}

impl WallJumpPush {
    pub fn arm(&mut self, direction: f32, duration: f32) {
        self.direction = direction;
        self.timer = duration;
    }

    pub fn reset(&mut self) {
        self.timer = 0.0;
    }

    pub fn is_active(&self) -> bool {
        self.timer > 0.0
    }
}

/// Per-player locomotion state, mutated once per fixed step.
#[derive(Component, Debug, Clone)]
pub struct MovementState {
    pub facing: Facing,
    pub on_ground: bool,
    pub on_wall: bool,
    pub ramp: RampContact,
    pub wall_jump: WallJumpPush,
    /// Set by any jump edge, cleared once airborne.
    pub jump_latch: bool,
    /// Mirror flag for the rendered sprite
    pub sprite_flipped: bool,
    /// Local offset of the side probe; follows the leading edge.
    pub wall_probe: Vec2,
    /// Local offset of the feet probe.
    pub feet_probe: Vec2,
}

impl MovementState {
    pub fn new(feet_probe: Vec2, wall_probe: Vec2) -> Self {
        Self {
            facing: Facing::Right,
            on_ground: false,
            on_wall: false,
            ramp: RampContact::None,
            wall_jump: WallJumpPush::default(),
            jump_latch: false,
            sprite_flipped: false,
            wall_probe,
            feet_probe,
        }
    }
}

/// Write-only animation parameters consumed by the presentation layer.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct AnimationParams {
    pub x_speed: f32,
    pub y_speed: f32,
    pub is_grounded: bool,
    pub is_on_wall: bool,
}

/// Shape used for the ramp overlap test. Slightly larger than the body
/// collider so that resting contact still registers as an overlap.
#[derive(Component, Debug)]
pub struct RampProbeShape(pub Collider);
