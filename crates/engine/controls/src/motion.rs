//! Horizontal velocity corrections
//!
//! Both functions return the change to apply to the body's linear velocity.
//! The Y component is always zero; gravity and jumping own the vertical axis.

use glam::{Quat, Vec3};

use crate::intent::InputIntent;

/// Per-tick additive correction
///
/// Each held axis contributes `velocity * dt`. When opposite keys are held
/// backward wins over forward and right over left. Diagonals are not
/// normalized.
pub fn instant_correction(intent: &InputIntent, rotation: Quat, velocity: f32, dt: f32) -> Vec3 {
    let step = velocity * dt;
    let mut local = Vec3::ZERO;

    if intent.forward {
        local.z = -step;
    }
    if intent.backward {
        local.z = step;
    }
    if intent.left {
        local.x = -step;
    }
    if intent.right {
        local.x = step;
    }

    horizontal(rotation * local)
}

/// Parameters of the damped model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Damped {
    pub velocity: f32,
    pub damping: f32,
    pub air_control: f32,
}

/// Exponential approach toward the desired horizontal velocity
///
/// The blend factor `1 - exp(-damping * dt)` makes the result independent of
/// how a time span is split into updates. While airborne the correction is
/// scaled by `air_control`.
///
/// # Arguments
/// * `direction` - Unit local direction, or zero for "stop"
/// * `rotation` - Look rotation; only its horizontal effect survives
/// * `current` - Current linear velocity of the body
pub fn damped_correction(
    direction: Vec3,
    rotation: Quat,
    current: Vec3,
    params: Damped,
    on_ground: bool,
    dt: f32,
) -> Vec3 {
    let target = horizontal(rotation * direction) * params.velocity;
    let blend = 1.0 - (-params.damping * dt).exp();

    let correction = (target - horizontal(current)) * blend;
    if on_ground {
        correction
    } else {
        correction * params.air_control
    }
}

/// Drop the vertical component
///
/// Looking straight up or down shortens the horizontal projection; the
/// result is not renormalized.
fn horizontal(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARAMS: Damped = Damped {
        velocity: 8.0,
        damping: 10.0,
        air_control: 0.25,
    };

    #[test]
    fn test_instant_precedence_and_scale() {
        let intent = InputIntent {
            forward: true,
            backward: true,
            left: true,
            right: false,
        };
        let dv = instant_correction(&intent, Quat::IDENTITY, 96.0, 0.5);
        assert_eq!(dv, Vec3::new(-48.0, 0.0, 48.0));
    }

    #[test]
    fn test_instant_idle_is_zero() {
        let dv = instant_correction(&InputIntent::default(), Quat::from_rotation_y(1.0), 96.0, 0.016);
        assert_eq!(dv, Vec3::ZERO);
    }

    #[test]
    fn test_damped_split_independent() {
        let rotation = Quat::from_rotation_y(0.3);
        let mut once = Vec3::new(1.0, -2.0, 0.0);
        let mut split = once;

        once += damped_correction(Vec3::NEG_Z, rotation, once, PARAMS, true, 0.1);
        for _ in 0..4 {
            split += damped_correction(Vec3::NEG_Z, rotation, split, PARAMS, true, 0.025);
        }

        assert!(once.abs_diff_eq(split, 1e-4), "{once} vs {split}");
        assert_eq!(once.y, -2.0);
    }

    #[test]
    fn test_damped_air_control_scales() {
        let ground = damped_correction(Vec3::X, Quat::IDENTITY, Vec3::ZERO, PARAMS, true, 0.05);
        let air = damped_correction(Vec3::X, Quat::IDENTITY, Vec3::ZERO, PARAMS, false, 0.05);
        assert!(air.abs_diff_eq(ground * PARAMS.air_control, 1e-6));
    }

    #[test]
    fn test_pitch_does_not_add_vertical_velocity() {
        let rotation = Quat::from_rotation_x(1.2);
        let dv = damped_correction(Vec3::NEG_Z, rotation, Vec3::ZERO, PARAMS, true, 1.0);
        assert_eq!(dv.y, 0.0);
        assert!(dv.z < 0.0);
    }
}
