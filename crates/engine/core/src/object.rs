//! Object trait for types with position and rotation in 3D space

use glam::{Affine3A, Quat, Vec3};

/// Base trait for any object with position and rotation in 3D space.
///
/// This trait provides a common interface for objects that have a transform
/// (position and rotation). It's designed for objects where the transform
/// can be accessed without external context.
///
/// Implemented by:
/// - [`Node`] in this module
/// - [`Camera`](crate::Camera)
pub trait Object {
    /// Get the current position
    fn position(&self) -> Vec3;

    /// Get the current rotation as a quaternion
    fn rotation(&self) -> Quat;

    /// Set the position
    fn set_position(&mut self, position: Vec3);

    /// Set the rotation
    fn set_rotation(&mut self, rotation: Quat);

    /// Local-to-parent transform built from position and rotation
    fn transform(&self) -> Affine3A {
        Affine3A::from_rotation_translation(self.rotation(), self.position())
    }
}

/// A bare scene graph node: a transform and nothing else
///
/// Used for pivots that exist only to compose rotations (for example the
/// yaw and pitch pivots of a first-person camera rig).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

impl Node {
    /// Create a node at the given position with no rotation
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }
}

impl Object for Node {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn rotation(&self) -> Quat {
        self.rotation
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation;
    }
}
