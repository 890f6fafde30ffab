//! Core library for the physics playground - generic pieces shared across crates
//!
//! Nothing in here knows about a concrete physics engine or renderer. The
//! controller talks to its collaborators only through these types.
//!
//! # Modules
//!
//! - [`object`]: The [`Object`] trait and a plain scene [`Node`]
//! - [`camera`]: A minimal perspective [`Camera`] implementing [`Object`]
//! - [`body`]: The [`RigidBody`] trait a physics engine body must expose
//! - [`contact`]: Collision [`Contact`] records delivered by the physics engine

pub mod body;
pub mod camera;
pub mod contact;
pub mod object;

pub use body::RigidBody;
pub use camera::{Camera, DEFAULT_VFOV};
pub use contact::Contact;
pub use object::{Node, Object};

// Re-export for convenience
pub use glam;
