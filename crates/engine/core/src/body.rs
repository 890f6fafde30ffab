//! Rigid body access for controllers
//!
//! A controller never owns a physics body. It is handed a short-lived view of
//! one whenever it needs to read or write velocity, and recognises its own
//! body in contact reports by [`RigidBody::Id`].

use std::fmt::Debug;

use glam::{Quat, Vec3};

/// The part of a physics engine body a character controller needs
pub trait RigidBody {
    /// Identity used to match this body against contact participants
    type Id: Copy + PartialEq + Debug;

    /// Identity of this body
    fn id(&self) -> Self::Id;

    /// World-space position of the body origin
    fn position(&self) -> Vec3;

    /// World-space orientation
    fn rotation(&self) -> Quat;

    /// Linear velocity in world space
    fn velocity(&self) -> Vec3;

    /// Overwrite the linear velocity
    fn set_velocity(&mut self, velocity: Vec3);
}
