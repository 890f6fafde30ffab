use glam::{Quat, Vec3};
use rapier3d::prelude::*;

/// Mutable view of one Rapier body through [`playground_core::RigidBody`]
///
/// Obtained from [`PhysicsWorld::body_mut`](crate::PhysicsWorld::body_mut);
/// lives only as long as the borrow of the world.
pub struct BodyMut<'w> {
    handle: RigidBodyHandle,
    body: &'w mut RigidBody,
}

impl<'w> BodyMut<'w> {
    pub(crate) fn new(handle: RigidBodyHandle, body: &'w mut RigidBody) -> Self {
        Self { handle, body }
    }

    /// Teleport the body and wake it up
    pub fn set_position(&mut self, position: Vec3) {
        self.body
            .set_translation(vector![position.x, position.y, position.z], true);
    }

    /// The underlying Rapier body
    pub fn raw(&mut self) -> &mut RigidBody {
        self.body
    }
}

impl playground_core::RigidBody for BodyMut<'_> {
    type Id = RigidBodyHandle;

    fn id(&self) -> RigidBodyHandle {
        self.handle
    }

    fn position(&self) -> Vec3 {
        let pos = self.body.translation();
        Vec3::new(pos.x, pos.y, pos.z)
    }

    fn rotation(&self) -> Quat {
        let rot = self.body.rotation();
        Quat::from_xyzw(rot.i, rot.j, rot.k, rot.w)
    }

    fn velocity(&self) -> Vec3 {
        let vel = self.body.linvel();
        Vec3::new(vel.x, vel.y, vel.z)
    }

    fn set_velocity(&mut self, velocity: Vec3) {
        self.body
            .set_linvel(vector![velocity.x, velocity.y, velocity.z], true);
    }
}
