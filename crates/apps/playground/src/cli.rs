//! Command line arguments

use clap::Parser;
use playground_physics::SceneKind;
use std::path::PathBuf;

use crate::config::PlaygroundConfig;

/// Config used when `--config` is not given, if it exists
pub const DEFAULT_CONFIG_PATH: &str = "crates/apps/playground/playground.toml";

/// Headless first-person physics playground
///
/// Drops a player into a physics scene and drives it with the input
/// timeline from the config file.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "playground")]
#[command(about = "Headless first-person physics playground")]
pub struct Args {
    /// Load configuration from a TOML file
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Simulated seconds to run, overriding the config
    #[arg(long, short = 'd', value_name = "SECONDS")]
    pub duration: Option<f32>,

    /// Scene to load, overriding the config
    #[arg(long, short = 's', value_name = "NAME")]
    pub scene: Option<SceneKind>,
}

impl Args {
    /// Config file to read: `--config`, else the default path
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
    }

    /// Apply command line overrides to a loaded config
    pub fn apply_to(&self, mut config: PlaygroundConfig) -> PlaygroundConfig {
        if let Some(duration) = self.duration {
            config.simulation.duration = duration;
        }
        if let Some(scene) = self.scene {
            config.scene = scene;
        }
        config
    }
}
