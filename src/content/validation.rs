//! Validation for tuning values and level layouts.

use super::data::*;

/// A validation error with context about what failed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub source_type: &'static str,
    pub source_id: String,
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} '{}' has invalid '{}': {}",
            self.source_type, self.source_id, self.field, self.message
        )
    }
}

/// Helper macro for checking a numeric bound
macro_rules! check_value {
    ($errors:expr, $source_type:expr, $source_id:expr, $def:expr, $field:ident, $ok:expr, $message:expr) => {
        if !$ok($def.$field) {
            $errors.push(ValidationError {
                source_type: $source_type,
                source_id: $source_id.to_string(),
                field: stringify!($field),
                message: format!("{} (got {})", $message, $def.$field),
            });
        }
    };
}

fn positive(v: f32) -> bool {
    v > 0.0
}

fn non_negative(v: f32) -> bool {
    v >= 0.0
}

/// Validate the tuning file. Returns an empty list if everything is usable.
pub fn validate_tuning(file: &TuningFile) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let m = &file.movement;

    check_value!(errors, "Movement", "movement", m, player_speed, non_negative, "must be >= 0");
    check_value!(errors, "Movement", "movement", m, jump_force, non_negative, "must be >= 0");
    check_value!(errors, "Movement", "movement", m, base_gravity, non_negative, "must be >= 0");
    check_value!(errors, "Movement", "movement", m, max_fall_speed, positive, "must be > 0");
    check_value!(
        errors,
        "Movement",
        "movement",
        m,
        fall_speed_multiplier,
        non_negative,
        "must be >= 0"
    );
    check_value!(errors, "Movement", "movement", m, wall_jump_push, non_negative, "must be >= 0");
    check_value!(
        errors,
        "Movement",
        "movement",
        m,
        wall_jump_push_duration,
        positive,
        "must be > 0"
    );
    check_value!(errors, "Movement", "movement", m, wall_span, non_negative, "must be >= 0");

    if !(m.fixed_hz > 0.0) {
        errors.push(ValidationError {
            source_type: "Movement",
            source_id: "movement".to_string(),
            field: "fixed_hz",
            message: format!("must be > 0 (got {})", m.fixed_hz),
        });
    }

    let c = &file.camera;
    check_value!(errors, "Camera", "camera", c, smooth_time, positive, "must be > 0");
    check_value!(errors, "Camera", "camera", c, pixels_per_unit, positive, "must be > 0");

    errors
}

/// Validate a level: a usable cell size and exactly one player spawn.
pub fn validate_level(level: &LevelDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    check_value!(errors, "Level", level.name, level, cell_size, positive, "must be > 0");

    let spawns = level
        .rows
        .iter()
        .map(|row| row.chars().filter(|&ch| ch == 'P').count())
        .sum::<usize>();
    if spawns != 1 {
        errors.push(ValidationError {
            source_type: "Level",
            source_id: level.name.clone(),
            field: "rows",
            message: format!("expected exactly one 'P' spawn, found {}", spawns),
        });
    }

    errors
}
