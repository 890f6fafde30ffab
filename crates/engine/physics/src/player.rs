use glam::Vec3;
use rapier3d::prelude::*;

use crate::world::PhysicsWorld;

/// Where the player appears, and returns to on reset
pub const PLAYER_SPAWN: Vec3 = Vec3::new(0.0, 16.0, 0.0);

const LOWER_SPHERE_RADIUS: f32 = 0.75;
const UPPER_SPHERE_RADIUS: f32 = 1.0;
const PLAYER_MASS: f32 = 2.0;

/// Height of the heading marker above the body origin
const MARKER_HEIGHT: f32 = 1.3 * (LOWER_SPHERE_RADIUS + UPPER_SPHERE_RADIUS);

/// Heading indicator shown above the player
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionMarker {
    /// Marker position in world space
    pub position: Vec3,
    /// Horizontal direction of travel, `None` while standing still
    pub heading: Option<Vec3>,
}

/// The player's physics body
///
/// A dynamic body made of two spheres: one of radius 0.75 at the origin and
/// one of radius 1 hanging one unit below it. Rotations are locked so the
/// body always stays upright, and friction is zero so horizontal motion is
/// entirely up to the controller.
#[derive(Debug, Clone)]
pub struct PlayerBody {
    handle: RigidBodyHandle,
    spawn: Vec3,
}

impl PlayerBody {
    /// Create the player body and start tracking its contacts
    ///
    /// # Arguments
    /// * `world` - Physics world to add the player to
    /// * `spawn` - Initial position, also used by [`PlayerBody::reset`]
    pub fn new(world: &mut PhysicsWorld, spawn: Vec3) -> Self {
        let body = RigidBodyBuilder::dynamic()
            .translation(vector![spawn.x, spawn.y, spawn.z])
            .lock_rotations()
            .additional_mass(PLAYER_MASS)
            .build();
        let handle = world.add_rigid_body(body);

        let lower = ColliderBuilder::ball(LOWER_SPHERE_RADIUS)
            .density(0.0)
            .friction(0.0)
            .friction_combine_rule(CoefficientCombineRule::Min)
            .build();
        let upper = ColliderBuilder::ball(UPPER_SPHERE_RADIUS)
            .translation(vector![0.0, -UPPER_SPHERE_RADIUS, 0.0])
            .density(0.0)
            .friction(0.0)
            .friction_combine_rule(CoefficientCombineRule::Min)
            .build();
        world.add_collider(lower, handle);
        world.add_collider(upper, handle);

        world.track_contacts(handle);
        tracing::debug!("Player body {:?} spawned at {}", handle, spawn);

        Self { handle, spawn }
    }

    /// Get the rigid body handle
    pub fn handle(&self) -> RigidBodyHandle {
        self.handle
    }

    /// Spawn point
    pub fn spawn(&self) -> Vec3 {
        self.spawn
    }

    /// Get the current position of the player
    pub fn position(&self, world: &PhysicsWorld) -> Vec3 {
        if let Some(body) = world.get_rigid_body(self.handle) {
            let pos = body.translation();
            Vec3::new(pos.x, pos.y, pos.z)
        } else {
            Vec3::ZERO
        }
    }

    /// Get the current velocity of the player
    pub fn velocity(&self, world: &PhysicsWorld) -> Vec3 {
        if let Some(body) = world.get_rigid_body(self.handle) {
            let vel = body.linvel();
            Vec3::new(vel.x, vel.y, vel.z)
        } else {
            Vec3::ZERO
        }
    }

    /// Put the player back at the spawn point, at rest
    pub fn reset(&self, world: &mut PhysicsWorld) {
        if let Some(body) = world.get_rigid_body_mut(self.handle) {
            body.set_translation(vector![self.spawn.x, self.spawn.y, self.spawn.z], true);
            body.set_linvel(vector![0.0, 0.0, 0.0], true);
            tracing::info!("Player reset to {}", self.spawn);
        }
    }

    /// Heading marker for the current frame
    ///
    /// Sits above the body and points along the horizontal velocity.
    pub fn marker(&self, world: &PhysicsWorld) -> DirectionMarker {
        let position = self.position(world);
        let velocity = self.velocity(world);
        let horizontal = Vec3::new(velocity.x, 0.0, velocity.z);

        DirectionMarker {
            position: position + Vec3::Y * MARKER_HEIGHT,
            heading: horizontal.try_normalize(),
        }
    }

    /// Destroy the player body and remove it from the physics world
    pub fn destroy(self, world: &mut PhysicsWorld) {
        world.remove_rigid_body(self.handle);
    }
}
