//! Authoring-time tunables, optionally overridden from a JSON file.

use std::fs;
use std::path::Path;

use bevy::prelude::*;
use serde::Deserialize;
use thiserror::Error;

use crate::controller::MovementTuning;

/// Default location of the tunables file, relative to the working directory.
pub const TUNABLES_PATH: &str = "assets/player.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Ground-sensor geometry in the player's local space.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SensorTuning {
    /// Offset from the body origin to the probe center.
    pub offset: [f32; 2],
    /// Probe circle radius.
    pub radius: f32,
}

impl Default for SensorTuning {
    fn default() -> Self {
        Self {
            offset: [0.0, -26.0],
            radius: 6.0,
        }
    }
}

/// Everything tunable about the player. Loaded once at startup and immutable
/// for the lifetime of the app; a partial file overrides only the fields it
/// names.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub movement: MovementTuning,
    pub ground_sensor: SensorTuning,
}

impl PlayerConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Loads the tunables file, falling back to defaults if it is missing or
    /// malformed. A malformed file is reported, a missing one is not.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            debug!("no tunables file at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => {
                info!("loaded player tunables from {}", path.display());
                config
            }
            Err(e) => {
                warn!("{e}; using default tunables");
                Self::default()
            }
        }
    }
}

/// Startup system inserting the [`PlayerConfig`] resource before anything
/// spawns the player.
pub fn load_tunables(mut commands: Commands) {
    commands.insert_resource(PlayerConfig::load_or_default(TUNABLES_PATH));
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn partial_file_overrides_only_named_fields() {
        let config: PlayerConfig =
            serde_json::from_str(r#"{"movement": {"move_speed": 300.0}}"#).expect("valid json");
        assert_relative_eq!(config.movement.move_speed, 300.0);
        assert_relative_eq!(
            config.movement.jump_impulse,
            MovementTuning::default().jump_impulse
        );
        assert_eq!(config.ground_sensor, SensorTuning::default());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = PlayerConfig::load_or_default("does/not/exist.json");
        assert_eq!(config, PlayerConfig::default());
    }

    #[test]
    fn unreadable_file_reports_io_error() {
        let err = PlayerConfig::load(Path::new("does/not/exist.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
