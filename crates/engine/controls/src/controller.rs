//! The first-person controller state machine

use devices::{Action, InputEvent, InputHub, Key, KeyBindings, MouseMotion, Subscription};
use glam::Vec3;
use playground_core::{Contact, Node, Object, RigidBody};
use std::fmt::Debug;

use crate::config::{ControllerConfig, GroundLatch, MotionModel};
use crate::error::ConfigError;
use crate::ground::GroundContact;
use crate::intent::InputIntent;
use crate::motion::{damped_correction, instant_correction, Damped};
use crate::orientation::OrientationState;
use crate::rig::CameraRig;

/// First-person controller for one rigid body and one camera
///
/// `K` is the physics engine's body identity, used to recognise the
/// controlled body in contact reports. `C` is the camera the rig pose is
/// written to on every [`Controls::update`].
///
/// The body itself is never stored. Operations that read or write it take a
/// [`RigidBody`] view, which must be the body this controller was created
/// for.
///
/// # Example
///
/// ```
/// use controls::{ControllerConfig, Controls};
/// use playground_core::{Camera, Contact, RigidBody};
/// use glam::{Quat, Vec3};
///
/// struct Body { velocity: Vec3 }
///
/// impl RigidBody for Body {
///     type Id = u32;
///     fn id(&self) -> u32 { 7 }
///     fn position(&self) -> Vec3 { Vec3::ZERO }
///     fn rotation(&self) -> Quat { Quat::IDENTITY }
///     fn velocity(&self) -> Vec3 { self.velocity }
///     fn set_velocity(&mut self, v: Vec3) { self.velocity = v; }
/// }
///
/// let mut body = Body { velocity: Vec3::ZERO };
/// let mut controls = Controls::new(7, Camera::default(), ControllerConfig::default()).unwrap();
/// controls.set_enabled(true);
///
/// controls.handle_contact(&Contact::new(1, 7, Vec3::Y));
/// controls.key_down(devices::Key::Space, &mut body);
/// assert_eq!(body.velocity.y, 12.0);
/// ```
#[derive(Debug)]
pub struct Controls<K, C> {
    body: K,
    camera: C,
    config: ControllerConfig,
    bindings: KeyBindings,
    enabled: bool,
    orientation: OrientationState,
    intent: InputIntent,
    ground: GroundContact,
    rig: CameraRig,
    subscription: Option<Subscription>,
}

impl<K, C> Controls<K, C>
where
    K: Copy + PartialEq + Debug,
    C: Object,
{
    /// Create a disabled controller with the default key bindings
    ///
    /// # Arguments
    /// * `body` - Identity of the body to drive
    /// * `camera` - Camera to place on every update
    /// * `config` - Tuning; rejected if [`ControllerConfig::validate`] fails
    pub fn new(body: K, camera: C, config: ControllerConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            body,
            camera,
            config,
            bindings: KeyBindings::default(),
            enabled: false,
            orientation: OrientationState::default(),
            intent: InputIntent::default(),
            ground: GroundContact::default(),
            rig: CameraRig::new(config.camera_offset),
            subscription: None,
        })
    }

    /// Replace the key bindings
    pub fn with_bindings(mut self, bindings: KeyBindings) -> Self {
        self.bindings = bindings;
        self
    }

    pub fn body_id(&self) -> K {
        self.body
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    pub fn camera(&self) -> &C {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut C {
        &mut self.camera
    }

    /// The yaw pivot, to be added to the host's scene graph
    pub fn object(&self) -> &Node {
        self.rig.yaw_node()
    }

    pub fn rig(&self) -> &CameraRig {
        &self.rig
    }

    pub fn orientation(&self) -> OrientationState {
        self.orientation
    }

    pub fn intent(&self) -> InputIntent {
        self.intent
    }

    pub fn is_on_ground(&self) -> bool {
        self.ground.is_grounded()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Gate pointer look and new movement
    ///
    /// Key state keeps being tracked while disabled, and jumping stays
    /// possible.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            tracing::debug!("Controls for {:?} {}", self.body, if enabled { "enabled" } else { "disabled" });
        }
        self.enabled = enabled;
    }

    /// Unit world-space view direction
    pub fn direction(&self) -> Vec3 {
        self.orientation.forward()
    }

    /// Write the view direction into `out`
    pub fn write_direction(&self, out: &mut Vec3) {
        *out = self.direction();
    }

    /// Pointer motion in pixels. Dropped while disabled.
    pub fn mouse_move(&mut self, motion: MouseMotion) {
        if !self.enabled {
            return;
        }
        self.orientation.apply_mouse(motion.delta, self.config.sensitivity);
        self.rig.set_orientation(&self.orientation);
    }

    /// Handle a key press
    ///
    /// Movement keys set their intent flag. The jump key sets the body's
    /// vertical velocity if the body is on the ground, and leaves the
    /// ground. Returns the bound action, if any.
    pub fn key_down<B>(&mut self, key: Key, body: &mut B) -> Option<Action>
    where
        B: RigidBody<Id = K>,
    {
        let action = self.bindings.action(key)?;
        match action {
            Action::Jump => self.jump(body),
            _ => {
                self.intent.set(action, true);
            }
        }
        Some(action)
    }

    /// Handle a key release. Returns the bound action, if any.
    pub fn key_up(&mut self, key: Key) -> Option<Action> {
        let action = self.bindings.action(key)?;
        self.intent.set(action, false);
        Some(action)
    }

    fn jump<B>(&mut self, body: &mut B)
    where
        B: RigidBody<Id = K>,
    {
        debug_assert_eq!(body.id(), self.body, "jump applied to a foreign body");

        if self.ground.consume() {
            let velocity = body.velocity();
            body.set_velocity(Vec3::new(velocity.x, self.config.jump_velocity, velocity.z));
            tracing::debug!("{:?} jumped", self.body);
        }
    }

    /// Feed one contact reported by the physics engine
    ///
    /// Contacts not involving the controlled body are ignored. Returns true
    /// if the contact counts as ground.
    pub fn handle_contact(&mut self, contact: &Contact<K>) -> bool {
        let Some(normal) = contact.normal_towards(self.body) else {
            return false;
        };

        let was_grounded = self.ground.is_grounded();
        let grounded = self.ground.observe(normal, self.config.ground_threshold);
        if grounded && !was_grounded {
            tracing::trace!("{:?} landed (normal {})", self.body, normal);
        }
        grounded
    }

    /// Call before feeding the contacts of a physics step
    pub fn begin_step(&mut self) {
        if self.config.ground_latch == GroundLatch::PerStep {
            self.ground.clear();
        }
    }

    /// Dispatch one input event
    ///
    /// Cursor mode changes are left to the host.
    pub fn handle_event<B>(&mut self, event: InputEvent, body: &mut B)
    where
        B: RigidBody<Id = K>,
    {
        match event {
            InputEvent::KeyDown(key) => {
                self.key_down(key, body);
            }
            InputEvent::KeyUp(key) => {
                self.key_up(key);
            }
            InputEvent::MouseMove(motion) => self.mouse_move(motion),
            InputEvent::CursorMode(_) => {}
        }
    }

    /// Subscribe to `hub`, replacing any previous subscription
    pub fn attach(&mut self, hub: &mut InputHub) {
        if let Some(previous) = self.subscription.take() {
            tracing::warn!("Controls for {:?} attached twice, dropping previous subscription", self.body);
            hub.unsubscribe(previous);
        }
        self.subscription = Some(hub.subscribe());
    }

    /// Unsubscribe from `hub`
    ///
    /// Returns false if the controller was not attached to it. Events sent
    /// after this are never seen.
    pub fn detach(&mut self, hub: &mut InputHub) -> bool {
        match self.subscription.take() {
            Some(subscription) => hub.unsubscribe(subscription),
            None => false,
        }
    }

    pub fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }

    /// Handle every event queued since the last pump
    ///
    /// Returns the number of events handled.
    pub fn pump<B>(&mut self, body: &mut B) -> usize
    where
        B: RigidBody<Id = K>,
    {
        let events = match &self.subscription {
            Some(subscription) => subscription.drain(),
            None => return 0,
        };

        let count = events.len();
        for event in events {
            self.handle_event(event, body);
        }
        count
    }

    /// Per-frame update
    ///
    /// Applies the horizontal velocity correction of the configured motion
    /// model, then moves the rig to the body and the camera to the rig.
    /// Non-positive or non-finite `dt` skips the correction.
    pub fn update<B>(&mut self, body: &mut B, dt: f32)
    where
        B: RigidBody<Id = K>,
    {
        debug_assert_eq!(body.id(), self.body, "update applied to a foreign body");

        if dt.is_finite() && dt > 0.0 {
            let velocity = body.velocity();
            let correction = self.correction(velocity, dt);
            if correction != Vec3::ZERO {
                body.set_velocity(velocity + correction);
            }
        }

        self.rig.set_position(body.position());
        self.rig.set_orientation(&self.orientation);
        self.rig.apply_to(&mut self.camera);
    }

    fn correction(&self, velocity: Vec3, dt: f32) -> Vec3 {
        let rotation = self.orientation.rotation();

        match self.config.motion {
            MotionModel::Instant if self.enabled => {
                instant_correction(&self.intent, rotation, self.config.velocity, dt)
            }
            MotionModel::Instant => Vec3::ZERO,
            MotionModel::Damped {
                damping,
                air_control,
            } => {
                // Disabled means "stop", so existing momentum still decays
                let direction = if self.enabled {
                    self.intent.local_direction()
                } else {
                    Vec3::ZERO
                };
                let params = Damped {
                    velocity: self.config.velocity,
                    damping,
                    air_control,
                };
                damped_correction(
                    direction,
                    rotation,
                    velocity,
                    params,
                    self.ground.is_grounded(),
                    dt,
                )
            }
        }
    }
}
