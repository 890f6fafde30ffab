//! Controller tuning

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::orientation::MOUSE_SENSITIVITY;

/// Default dot product between contact normal and up above which a contact
/// counts as ground
pub const DEFAULT_GROUND_THRESHOLD: f32 = 0.5;

/// How held movement keys turn into velocity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum MotionModel {
    /// Add `velocity * dt` per held axis every update, with no decay
    ///
    /// Speed is unbounded while a key is held and keeps whatever it had when
    /// keys are released or the controller is disabled. Diagonals are not
    /// normalized.
    Instant,
    /// Pull horizontal velocity toward the desired velocity at an
    /// exponential rate
    Damped {
        /// Approach rate in 1/s
        damping: f32,
        /// Fraction of `damping` authority kept while airborne
        #[serde(default = "full_air_control")]
        air_control: f32,
    },
}

fn full_air_control() -> f32 {
    1.0
}

impl Default for MotionModel {
    fn default() -> Self {
        MotionModel::Damped {
            damping: 10.0,
            air_control: 0.3,
        }
    }
}

/// When a ground contact stops counting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroundLatch {
    /// Stay grounded until the next jump, even after walking off a ledge
    #[default]
    UntilJump,
    /// Forget ground at the start of every physics step; only contacts
    /// reported during the step re-establish it
    PerStep,
}

/// Controller configuration
///
/// Loaded from the `[controller]` table of the playground config, e.g.
///
/// ```toml
/// [controller]
/// velocity = 8.0
/// jump_velocity = 12.0
/// motion = { model = "damped", damping = 10.0, air_control = 0.3 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Movement speed in world units per second
    pub velocity: f32,
    /// Vertical speed set on jump
    pub jump_velocity: f32,
    pub motion: MotionModel,
    /// Radians of rotation per pixel of pointer motion
    pub sensitivity: f32,
    pub ground_threshold: f32,
    pub ground_latch: GroundLatch,
    /// Camera position relative to the pitch pivot
    pub camera_offset: Vec3,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            velocity: 8.0,
            jump_velocity: 12.0,
            motion: MotionModel::default(),
            sensitivity: MOUSE_SENSITIVITY,
            ground_threshold: DEFAULT_GROUND_THRESHOLD,
            ground_latch: GroundLatch::default(),
            camera_offset: Vec3::ZERO,
        }
    }
}

impl ControllerConfig {
    /// Build a config from the classic construction options
    ///
    /// Without `damping` the controller uses [`MotionModel::Instant`].
    /// `air_control` defaults to 1 when damping is given alone.
    pub fn from_options(
        velocity: f32,
        jump_velocity: f32,
        damping: Option<f32>,
        air_control: Option<f32>,
    ) -> Self {
        let motion = match damping {
            Some(damping) => MotionModel::Damped {
                damping,
                air_control: air_control.unwrap_or_else(full_air_control),
            },
            None => MotionModel::Instant,
        };

        Self {
            velocity,
            jump_velocity,
            motion,
            ..Self::default()
        }
    }

    /// Per-tick additive model with the given speeds
    pub fn instant(velocity: f32, jump_velocity: f32) -> Self {
        Self::from_options(velocity, jump_velocity, None, None)
    }

    pub fn with_camera_offset(mut self, offset: Vec3) -> Self {
        self.camera_offset = offset;
        self
    }

    pub fn with_ground_latch(mut self, latch: GroundLatch) -> Self {
        self.ground_latch = latch;
        self
    }

    /// Check every value is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("velocity", self.velocity)?;
        non_negative("jump_velocity", self.jump_velocity)?;
        non_negative("sensitivity", self.sensitivity)?;

        if let MotionModel::Damped {
            damping,
            air_control,
        } = self.motion
        {
            non_negative("damping", damping)?;
            if !(0.0..=1.0).contains(&air_control) {
                return Err(ConfigError::AirControlOutOfRange(air_control));
            }
        }

        if !(-1.0..=1.0).contains(&self.ground_threshold) {
            return Err(ConfigError::GroundThresholdOutOfRange(
                self.ground_threshold,
            ));
        }

        if !self.camera_offset.is_finite() {
            return Err(ConfigError::NonFiniteCameraOffset(self.camera_offset));
        }

        Ok(())
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue { field, value })
    }
}
