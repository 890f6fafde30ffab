//! Playground configuration file
//!
//! ```toml
//! scene = "basic"
//!
//! [controller]
//! velocity = 8.0
//! camera_offset = [0.0, 2.0, 6.0]
//!
//! [bindings]
//! jump = ["Space"]
//!
//! [simulation]
//! duration = 10.0
//!
//! [player]
//! spawn = [0.0, 16.0, 0.0]
//!
//! [[script]]
//! at = 0.0
//! type = "pointer_lock"
//! locked = true
//! ```
//!
//! Every section is optional.

use controls::ControllerConfig;
use devices::KeyBindings;
use glam::Vec3;
use playground_physics::{FixedStep, SceneKind, DEFAULT_GRAVITY, PLAYER_SPAWN};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::script::ScriptEntry;

/// Config loading failures
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid controller settings: {0}")]
    Controller(#[from] controls::ConfigError),

    #[error("invalid simulation settings: {0}")]
    Simulation(String),
}

/// Simulation clock and physics stepping
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub gravity: Vec3,
    /// Length of one physics step in seconds
    pub fixed_dt: f32,
    /// Physics steps allowed per frame before backlog is dropped
    pub max_substeps: usize,
    /// Frames per simulated second
    pub frame_rate: f32,
    /// Simulated seconds to run
    pub duration: f32,
    /// Seconds between state log lines, 0 to disable
    pub log_interval: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        let step = FixedStep::default();
        Self {
            gravity: DEFAULT_GRAVITY,
            fixed_dt: step.dt,
            max_substeps: step.max_substeps,
            frame_rate: 60.0,
            duration: 10.0,
            log_interval: 1.0,
        }
    }
}

impl SimulationConfig {
    pub fn fixed_step(&self) -> FixedStep {
        FixedStep {
            dt: self.fixed_dt,
            max_substeps: self.max_substeps,
        }
    }

    /// Simulated time between frames
    pub fn frame_dt(&self) -> f32 {
        1.0 / self.frame_rate
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let positive = |name: &str, value: f32| {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(ConfigError::Simulation(format!(
                    "{name} must be positive (got {value})"
                )))
            }
        };

        positive("fixed_dt", self.fixed_dt)?;
        positive("frame_rate", self.frame_rate)?;

        if self.max_substeps == 0 {
            return Err(ConfigError::Simulation(
                "max_substeps must be at least 1".to_string(),
            ));
        }
        if !(self.duration.is_finite() && self.duration >= 0.0) {
            return Err(ConfigError::Simulation(format!(
                "duration must be non-negative (got {})",
                self.duration
            )));
        }
        if !self.gravity.is_finite() {
            return Err(ConfigError::Simulation("gravity must be finite".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Spawn and reset position
    pub spawn: Vec3,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            spawn: PLAYER_SPAWN,
        }
    }
}

/// Everything the playground binary reads from its config file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaygroundConfig {
    pub scene: SceneKind,
    pub controller: ControllerConfig,
    pub bindings: KeyBindings,
    pub simulation: SimulationConfig,
    pub player: PlayerConfig,
    pub script: Vec<ScriptEntry>,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            scene: SceneKind::default(),
            controller: ControllerConfig::default()
                .with_camera_offset(Vec3::new(0.0, 2.0, 6.0)),
            bindings: KeyBindings::default(),
            simulation: SimulationConfig::default(),
            player: PlayerConfig::default(),
            script: Vec::new(),
        }
    }
}

impl PlaygroundConfig {
    /// Parse and validate a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Like [`PlaygroundConfig::load`], but a missing file gives the defaults
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::info!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.controller.validate()?;
        self.simulation.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::ScriptEvent;
    use controls::MotionModel;
    use devices::{Action, Key};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(text: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(text.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_full_config() {
        let file = write_config(
            r#"
            scene = "basic"

            [controller]
            velocity = 96.0
            motion = { model = "instant" }

            [bindings]
            move_forward = ["I"]
            jump = ["Space"]

            [simulation]
            duration = 3.0
            frame_rate = 30.0

            [player]
            spawn = [1.0, 5.0, 2.0]

            [[script]]
            at = 0.25
            type = "key_down"
            key = "I"
            "#,
        );

        let config = PlaygroundConfig::load(file.path()).unwrap();
        assert_eq!(config.controller.velocity, 96.0);
        assert_eq!(config.controller.motion, MotionModel::Instant);
        assert_eq!(config.bindings.action(Key::I), Some(Action::MoveForward));
        assert_eq!(config.bindings.action(Key::W), None);
        assert_eq!(config.simulation.duration, 3.0);
        assert!((config.simulation.frame_dt() - 1.0 / 30.0).abs() < 1e-6);
        assert_eq!(config.simulation.gravity, DEFAULT_GRAVITY);
        assert_eq!(config.player.spawn, Vec3::new(1.0, 5.0, 2.0));
        assert_eq!(config.script.len(), 1);
        assert_eq!(config.script[0].event, ScriptEvent::KeyDown { key: Key::I });
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        let file = write_config("");
        let config = PlaygroundConfig::load(file.path()).unwrap();
        assert_eq!(config, PlaygroundConfig::default());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        assert!(matches!(
            PlaygroundConfig::load(&path),
            Err(ConfigError::Io { .. })
        ));
        assert_eq!(
            PlaygroundConfig::load_or_default(&path).unwrap(),
            PlaygroundConfig::default()
        );
    }

    #[test]
    fn test_parse_error() {
        let file = write_config("scene = [");
        assert!(matches!(
            PlaygroundConfig::load(file.path()),
            Err(ConfigError::Parse { .. })
        ));

        let file = write_config(r#"scene = "castle""#);
        assert!(matches!(
            PlaygroundConfig::load(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let file = write_config("[controller]\nsensitivity = -0.1\n");
        assert!(matches!(
            PlaygroundConfig::load(file.path()),
            Err(ConfigError::Controller(_))
        ));

        let file = write_config("[simulation]\nframe_rate = 0.0\n");
        assert!(matches!(
            PlaygroundConfig::load(file.path()),
            Err(ConfigError::Simulation(_))
        ));
    }
}
