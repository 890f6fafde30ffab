use std::path::Path;

use playground::{PlaygroundConfig, Session};
use playground_physics::PLAYER_SPAWN;

fn demo_config() -> PlaygroundConfig {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("playground.toml");
    PlaygroundConfig::load(&path).unwrap()
}

#[test]
fn test_demo_config_loads() {
    let config = demo_config();
    assert_eq!(config.controller.velocity, 8.0);
    assert_eq!(config.player.spawn, PLAYER_SPAWN);
    assert!(!config.script.is_empty());
}

#[test]
fn test_demo_run_completes() {
    let config = demo_config();
    let mut session = Session::new(&config).unwrap();
    let summary = session.run(&config);

    // Two simulated seconds are spent unfocused
    assert!(summary.skipped > 100);
    assert_eq!(summary.frames + summary.skipped, 14 * 60 + 1);
    // Pointer lock released at the end
    assert!(!session.controls().is_enabled());
    assert!(summary.position.is_finite());
}
