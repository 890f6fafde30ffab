use std::collections::HashSet;

use glam::Vec3;
use playground_core::Contact;
use rapier3d::prelude::*;

use crate::body::BodyMut;
use crate::BodyContact;

/// Earth gravity, the default for new worlds
pub const DEFAULT_GRAVITY: Vec3 = Vec3::new(0.0, -9.81, 0.0);

/// Fixed-timestep settings for [`PhysicsWorld::step_fixed`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedStep {
    /// Duration of one internal step in seconds
    pub dt: f32,
    /// Upper bound on internal steps per call; backlog beyond it is dropped
    pub max_substeps: usize,
}

impl Default for FixedStep {
    fn default() -> Self {
        Self {
            dt: 1.0 / 60.0,
            max_substeps: 10,
        }
    }
}

/// Physics simulation world
///
/// Manages all rigid bodies, colliders, and physics simulation state.
/// This is a wrapper around Rapier's physics pipeline that additionally
/// records the contacts of selected bodies after every step.
pub struct PhysicsWorld {
    pub(crate) rigid_body_set: RigidBodySet,
    pub(crate) collider_set: ColliderSet,
    impulse_joint_set: ImpulseJointSet,
    multibody_joint_set: MultibodyJointSet,
    integration_parameters: IntegrationParameters,
    physics_pipeline: PhysicsPipeline,
    island_manager: IslandManager,
    broad_phase: BroadPhaseMultiSap,
    narrow_phase: NarrowPhase,
    ccd_solver: CCDSolver,
    gravity: Vector<Real>,

    accumulator: f32,
    tracked: HashSet<RigidBodyHandle>,
    contacts: Vec<BodyContact>,
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new(DEFAULT_GRAVITY)
    }
}

impl PhysicsWorld {
    /// Create a new physics world with specified gravity
    ///
    /// # Arguments
    /// * `gravity` - Gravity vector (e.g., Vec3::new(0.0, -9.81, 0.0))
    pub fn new(gravity: Vec3) -> Self {
        Self {
            rigid_body_set: RigidBodySet::new(),
            collider_set: ColliderSet::new(),
            impulse_joint_set: ImpulseJointSet::new(),
            multibody_joint_set: MultibodyJointSet::new(),
            integration_parameters: IntegrationParameters::default(),
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: BroadPhaseMultiSap::new(),
            narrow_phase: NarrowPhase::new(),
            ccd_solver: CCDSolver::new(),
            gravity: vector![gravity.x, gravity.y, gravity.z],
            accumulator: 0.0,
            tracked: HashSet::new(),
            contacts: Vec::new(),
        }
    }

    /// Step the physics simulation forward by dt seconds
    ///
    /// Contacts of tracked bodies found during the step are appended to the
    /// contact buffer (see [`PhysicsWorld::drain_contacts`]).
    ///
    /// # Arguments
    /// * `dt` - Time step in seconds (typically 1/60 = 0.016666...)
    pub fn step(&mut self, dt: f32) {
        self.integration_parameters.dt = dt;

        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.rigid_body_set,
            &mut self.collider_set,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            &mut self.ccd_solver,
            None,
            &(),
            &(),
        );

        self.collect_contacts();
    }

    /// Advance by `elapsed` seconds of wall time using fixed internal steps
    ///
    /// Leftover time smaller than one step is carried to the next call. If
    /// more than `max_substeps` steps are owed, the rest is dropped so a long
    /// stall does not turn into a burst of catch-up steps.
    ///
    /// The contacts of every internal step are drained and handed to
    /// `on_step` as soon as that step finishes.
    ///
    /// # Returns
    /// Number of internal steps taken
    pub fn step_fixed<F>(&mut self, step: FixedStep, elapsed: f32, mut on_step: F) -> usize
    where
        F: FnMut(&[BodyContact]),
    {
        self.accumulator += elapsed.max(0.0);

        let mut taken = 0;
        while self.accumulator >= step.dt && taken < step.max_substeps {
            self.step(step.dt);
            let contacts = self.drain_contacts();
            on_step(&contacts);
            self.accumulator -= step.dt;
            taken += 1;
        }

        if self.accumulator >= step.dt {
            tracing::warn!(
                "Dropping {:.3}s of simulation backlog after {} substeps",
                self.accumulator,
                taken
            );
            self.accumulator %= step.dt;
        }

        taken
    }

    fn collect_contacts(&mut self) {
        if self.tracked.is_empty() {
            return;
        }

        for pair in self.narrow_phase.contact_pairs() {
            if !pair.has_any_active_contact {
                continue;
            }

            for manifold in &pair.manifolds {
                if manifold.data.solver_contacts.is_empty() {
                    continue;
                }
                let (Some(first), Some(second)) =
                    (manifold.data.rigid_body1, manifold.data.rigid_body2)
                else {
                    continue;
                };
                if !self.tracked.contains(&first) && !self.tracked.contains(&second) {
                    continue;
                }

                let n = manifold.data.normal;
                self.contacts
                    .push(Contact::new(first, second, Vec3::new(n.x, n.y, n.z)));
            }
        }
    }

    /// Record contacts involving `handle` from now on
    pub fn track_contacts(&mut self, handle: RigidBodyHandle) {
        self.tracked.insert(handle);
    }

    /// Contacts recorded since the last drain
    pub fn contacts(&self) -> &[BodyContact] {
        &self.contacts
    }

    /// Take the contacts recorded since the last drain
    pub fn drain_contacts(&mut self) -> Vec<BodyContact> {
        std::mem::take(&mut self.contacts)
    }

    /// Add a rigid body to the world
    ///
    /// # Returns
    /// Handle to the added rigid body
    pub fn add_rigid_body(&mut self, body: RigidBody) -> RigidBodyHandle {
        let handle = self.rigid_body_set.insert(body);
        tracing::trace!("Added rigid body {:?}", handle);
        handle
    }

    /// Remove a rigid body from the world
    ///
    /// Also removes all associated colliders automatically.
    pub fn remove_rigid_body(&mut self, handle: RigidBodyHandle) {
        self.tracked.remove(&handle);
        self.rigid_body_set.remove(
            handle,
            &mut self.island_manager,
            &mut self.collider_set,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            true,
        );
    }

    /// Add a collider to the world, attached to a rigid body
    ///
    /// # Returns
    /// Handle to the added collider
    pub fn add_collider(&mut self, collider: Collider, parent: RigidBodyHandle) -> ColliderHandle {
        let handle = self
            .collider_set
            .insert_with_parent(collider, parent, &mut self.rigid_body_set);
        tracing::trace!("Added collider {:?} to body {:?}", handle, parent);
        handle
    }

    /// Get a reference to a rigid body
    pub fn get_rigid_body(&self, handle: RigidBodyHandle) -> Option<&RigidBody> {
        self.rigid_body_set.get(handle)
    }

    /// Get a mutable reference to a rigid body
    pub fn get_rigid_body_mut(&mut self, handle: RigidBodyHandle) -> Option<&mut RigidBody> {
        self.rigid_body_set.get_mut(handle)
    }

    /// Borrow a body through the engine-agnostic [`playground_core::RigidBody`] view
    pub fn body_mut(&mut self, handle: RigidBodyHandle) -> Option<BodyMut<'_>> {
        self.rigid_body_set
            .get_mut(handle)
            .map(|body| BodyMut::new(handle, body))
    }

    /// Number of rigid bodies in the world
    pub fn body_count(&self) -> usize {
        self.rigid_body_set.len()
    }

    /// Get the current gravity vector
    pub fn gravity(&self) -> Vec3 {
        Vec3::new(self.gravity.x, self.gravity.y, self.gravity.z)
    }

    /// Set the gravity vector
    pub fn set_gravity(&mut self, gravity: Vec3) {
        self.gravity = vector![gravity.x, gravity.y, gravity.z];
    }
}
