//! First-person character controller
//!
//! [`Controls`] turns keyboard and pointer input into horizontal velocity
//! changes of a physics body, gates jumping on ground contact, and keeps a
//! yaw/pitch camera rig glued to the body.
//!
//! The controller owns no physics or render resources. It is handed a
//! [`playground_core::RigidBody`] view whenever it needs to touch the body,
//! and pushes the rig pose into any [`playground_core::Object`] camera.
//!
//! # Modules
//!
//! - [`config`]: Tuning constants and the two motion models
//! - [`controller`]: The [`Controls`] state machine
//! - [`orientation`]: Yaw / pitch state
//! - [`intent`]: Held movement directions
//! - [`ground`]: Ground contact latch
//! - [`motion`]: Velocity correction math
//! - [`rig`]: Camera pivot nodes

pub mod config;
pub mod controller;
pub mod error;
pub mod ground;
pub mod intent;
pub mod motion;
pub mod orientation;
pub mod rig;

pub use config::{ControllerConfig, GroundLatch, MotionModel};
pub use controller::Controls;
pub use error::ConfigError;
pub use ground::GroundContact;
pub use intent::InputIntent;
pub use orientation::{OrientationState, MOUSE_SENSITIVITY, PITCH_LIMIT};
pub use rig::CameraRig;
