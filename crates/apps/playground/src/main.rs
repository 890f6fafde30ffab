//! Headless first-person physics playground
//!
//! Loads a scene, drops the player in and plays the scripted input timeline
//! from the config file. Use `RUST_LOG=debug` to see controller events.

use anyhow::Result;
use clap::Parser;
use playground::cli::Args;
use playground::{PlaygroundConfig, Session};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = PlaygroundConfig::load_or_default(&args.config_path())?;
    let config = args.apply_to(config);
    config.validate()?;

    tracing::info!(
        "Running scene '{}' for {:.1}s with {} scripted events",
        config.scene,
        config.simulation.duration,
        config.script.len()
    );

    let mut session = Session::new(&config)?;
    let summary = session.run(&config);

    tracing::info!(
        "Finished after {} frames ({} skipped, {} physics steps)",
        summary.frames,
        summary.skipped,
        summary.steps
    );
    tracing::info!(
        "Player at ({:.2}, {:.2}, {:.2}), on ground: {}",
        summary.position.x,
        summary.position.y,
        summary.position.z,
        summary.on_ground
    );

    Ok(())
}
