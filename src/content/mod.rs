//! Content domain: RON tuning and level data loaded at startup.
//!
//! Loading happens while the plugin is built so every later plugin and
//! startup system sees final resources. Unreadable or invalid files are a
//! configuration defect: they are logged and replaced by built-in defaults.

mod data;
mod loader;
mod validation;

pub use data::{CameraDef, LevelDef, MovementDef};
pub use loader::{load_level, load_tuning};
pub use validation::{validate_level, validate_tuning};

use bevy::prelude::*;
use std::path::{Path, PathBuf};

use crate::camera::CameraTuning;
use crate::movement::MovementTuning;

pub struct ContentPlugin {
    pub data_dir: PathBuf,
}

impl Default for ContentPlugin {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("assets/data"),
        }
    }
}

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        let (movement, camera) = tuning_or_default(&self.data_dir);
        let level = level_or_default(&self.data_dir);

        info!(
            "Content loaded: level='{}' v{} ({} rows), player_speed={}, jump_force={}, fixed_hz={}",
            level.name,
            level.schema_version,
            level.rows.len(),
            movement.player_speed,
            movement.jump_force,
            movement.fixed_hz
        );

        app.insert_resource(Time::<Fixed>::from_hz(movement.fixed_hz))
            .insert_resource(movement)
            .insert_resource(camera)
            .insert_resource(level);
    }
}

impl From<&MovementDef> for MovementTuning {
    fn from(def: &MovementDef) -> Self {
        Self {
            player_speed: def.player_speed,
            jump_force: def.jump_force,
            base_gravity: def.base_gravity,
            max_fall_speed: def.max_fall_speed,
            fall_speed_multiplier: def.fall_speed_multiplier,
            wall_jump_push: def.wall_jump_push,
            wall_jump_push_duration: def.wall_jump_push_duration,
            wall_span: def.wall_span,
            feet_probe: Vec2::new(def.feet_probe.0, def.feet_probe.1),
            wall_probe: Vec2::new(def.wall_probe.0, def.wall_probe.1),
            fixed_hz: def.fixed_hz,
        }
    }
}

impl From<&CameraDef> for CameraTuning {
    fn from(def: &CameraDef) -> Self {
        Self {
            follow_offset: Vec2::new(def.follow_offset.0, def.follow_offset.1),
            smooth_time: def.smooth_time,
            pixels_per_unit: def.pixels_per_unit,
        }
    }
}

fn tuning_or_default(data_dir: &Path) -> (MovementTuning, CameraTuning) {
    let file = match load_tuning(data_dir) {
        Ok(file) => file,
        Err(e) => {
            error!("{}; using default movement tuning", e);
            return (MovementTuning::default(), CameraTuning::default());
        }
    };

    debug!("movement.ron schema_version={}", file.schema_version);
    let errors = validate_tuning(&file);
    if !errors.is_empty() {
        for e in &errors {
            warn!("{}", e);
        }
        error!(
            "movement.ron rejected with {} error(s); using default movement tuning",
            errors.len()
        );
        return (MovementTuning::default(), CameraTuning::default());
    }

    ((&file.movement).into(), (&file.camera).into())
}

fn level_or_default(data_dir: &Path) -> LevelDef {
    let level = match load_level(data_dir) {
        Ok(level) => level,
        Err(e) => {
            error!("{}; using fallback level", e);
            return LevelDef::fallback();
        }
    };

    let errors = validate_level(&level);
    if !errors.is_empty() {
        for e in &errors {
            warn!("{}", e);
        }
        error!(
            "Level '{}' rejected with {} error(s); using fallback level",
            level.name,
            errors.len()
        );
        return LevelDef::fallback();
    }

    level
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_directory_falls_back_to_defaults() {
        let (movement, camera) = tuning_or_default(Path::new("no/such/dir"));
        assert_eq!(movement, MovementTuning::default());
        assert_eq!(camera, CameraTuning::default());
        assert_eq!(level_or_default(Path::new("no/such/dir")).name, "fallback");
    }

    #[test]
    fn test_plugin_inserts_resources() {
        let mut app = App::new();
        app.add_plugins(ContentPlugin::default());
        assert!(app.world().get_resource::<MovementTuning>().is_some());
        assert!(app.world().get_resource::<CameraTuning>().is_some());
        assert!(app.world().get_resource::<LevelDef>().is_some());
        let fixed = app.world().resource::<Time<Fixed>>();
        assert!((fixed.timestep().as_secs_f64() - 1.0 / 60.0).abs() < 1e-9);
    }
}
