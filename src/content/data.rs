//! Data definitions for the RON content files.
//!
//! These structs mirror assets/data/*.ron and are only used for
//! deserialization; runtime resources are built from them.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

// ============================================================================
// Movement tuning (movement.ron)
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TuningFile {
    pub schema_version: u32,
    pub movement: MovementDef,
    pub camera: CameraDef,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MovementDef {
    pub player_speed: f32,
    pub jump_force: f32,
    pub base_gravity: f32,
    pub max_fall_speed: f32,
    pub fall_speed_multiplier: f32,
    pub wall_jump_push: f32,
    pub wall_jump_push_duration: f32,
    pub wall_span: f32,
    /// Local (x, y) of the feet probe
    pub feet_probe: (f32, f32),
    /// Local (x, y) of the wall probe while facing right
    pub wall_probe: (f32, f32),
    #[serde(default = "default_fixed_hz")]
    pub fixed_hz: f64,
}

fn default_fixed_hz() -> f64 {
    60.0
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CameraDef {
    pub follow_offset: (f32, f32),
    pub smooth_time: f32,
    /// Screen pixels per world unit
    pub pixels_per_unit: f32,
}

// ============================================================================
// Level (level.ron)
// ============================================================================

/// ASCII level. Row 0 is the top of the map.
///
/// `#` solid tile, `/` slope rising right, `\` slope rising left,
/// `c` coin, `P` player spawn. Anything else is empty.
#[derive(Debug, Clone, Deserialize, Serialize, Resource)]
pub struct LevelDef {
    pub schema_version: u32,
    pub name: String,
    pub cell_size: f32,
    pub rows: Vec<String>,
}

impl LevelDef {
    /// Small room used when level.ron is missing or invalid.
    pub fn fallback() -> Self {
        let rows = [
            "#                      #",
            "#                      #",
            "#        c   c         #",
            "#      #######     c   #",
            "#                 ###  #",
            "#  c               \\   #",
            "# ###          c    \\  #",
            "#             /#     \\ #",
            "# P   c      /##       #",
            "########################",
        ];
        Self {
            schema_version: 1,
            name: "fallback".to_string(),
            cell_size: 1.0,
            rows: rows.iter().map(|r| r.to_string()).collect(),
        }
    }
}
