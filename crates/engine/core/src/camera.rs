//! Minimal perspective camera
//!
//! The playground never renders, but the controller still needs something to
//! drive: the camera here only carries a pose and a field of view.
//!
//! # Coordinate System
//!
//! Uses OpenGL convention:
//! - +X is right
//! - +Y is up
//! - -Z is forward (into the screen)

use glam::{Quat, Vec3};

use crate::object::Object;

/// Default vertical field of view: 60 degrees
pub const DEFAULT_VFOV: f32 = 60.0 * std::f32::consts::PI / 180.0;

/// Camera with position, rotation (quaternion) and field of view
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    /// Camera position in world space
    pub position: Vec3,
    /// Camera rotation (orientation) as quaternion
    pub rotation: Quat,
    /// Vertical field of view in radians
    pub vfov: f32,
    /// Width / height of the viewport
    pub aspect: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

impl Camera {
    /// Create a new camera with default settings at the given position
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
            vfov: DEFAULT_VFOV,
            aspect: 16.0 / 9.0,
        }
    }

    /// Update the aspect ratio after a viewport resize
    pub fn resize(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// Get the forward direction vector
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    /// Get the right direction vector
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// Get the up direction vector
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }
}

impl Object for Camera {
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
