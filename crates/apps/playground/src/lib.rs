//! Headless physics playground
//!
//! Runs the first-person controller against the rapier world without a
//! window. Input comes from a scripted timeline in the config file, and the
//! simulated clock advances at a fixed frame rate.
//!
//! # Modules
//!
//! - [`cli`]: Command line arguments
//! - [`config`]: TOML configuration
//! - [`script`]: Timed host events
//! - [`session`]: The frame loop

pub mod cli;
pub mod config;
pub mod script;
pub mod session;

pub use config::PlaygroundConfig;
pub use script::{HostEvent, Script, ScriptEntry};
pub use session::{RunSummary, Session};
