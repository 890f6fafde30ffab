use std::f32::consts::FRAC_PI_2;

use glam::{EulerRot, Quat, Vec2, Vec3};

/// Radians per pixel of pointer motion
pub const MOUSE_SENSITIVITY: f32 = 0.002;

/// Pitch is clamped to +/- this angle
pub const PITCH_LIMIT: f32 = FRAC_PI_2;

/// Look direction as yaw around world up and pitch around the yawed right
/// axis
///
/// Yaw is unbounded. Pitch never leaves `[-PITCH_LIMIT, PITCH_LIMIT]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OrientationState {
    yaw: f32,
    pitch: f32,
}

impl OrientationState {
    pub fn new(yaw: f32, pitch: f32) -> Self {
        Self {
            yaw,
            pitch: pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
        }
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Apply a pointer delta in pixels
    ///
    /// Moving right turns right and moving down looks down.
    /// Non-finite deltas are ignored.
    pub fn apply_mouse(&mut self, delta: Vec2, sensitivity: f32) {
        if !delta.is_finite() {
            return;
        }
        self.yaw -= delta.x * sensitivity;
        self.pitch = (self.pitch - delta.y * sensitivity).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    pub fn yaw_rotation(&self) -> Quat {
        Quat::from_rotation_y(self.yaw)
    }

    pub fn pitch_rotation(&self) -> Quat {
        Quat::from_rotation_x(self.pitch)
    }

    /// Combined rotation, yaw applied outermost
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }

    /// Unit view direction in world space
    pub fn forward(&self) -> Vec3 {
        self.rotation() * Vec3::NEG_Z
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_looks_down_negative_z() {
        let state = OrientationState::default();
        assert!(state.forward().abs_diff_eq(Vec3::NEG_Z, 1e-6));
    }

    #[test]
    fn test_pitch_clamped() {
        let mut state = OrientationState::default();
        state.apply_mouse(Vec2::new(0.0, -1.0e6), MOUSE_SENSITIVITY);
        assert_eq!(state.pitch(), PITCH_LIMIT);
        assert!(state.forward().abs_diff_eq(Vec3::Y, 1e-5));

        state.apply_mouse(Vec2::new(0.0, 1.0e6), MOUSE_SENSITIVITY);
        assert_eq!(state.pitch(), -PITCH_LIMIT);

        assert_eq!(OrientationState::new(0.0, 10.0).pitch(), PITCH_LIMIT);
    }

    #[test]
    fn test_non_finite_delta_ignored() {
        let mut state = OrientationState::new(0.3, 0.2);
        state.apply_mouse(Vec2::new(0.0, f32::NAN), MOUSE_SENSITIVITY);
        state.apply_mouse(Vec2::new(f32::INFINITY, 0.0), MOUSE_SENSITIVITY);
        state.apply_mouse(Vec2::new(0.0, f32::NEG_INFINITY), MOUSE_SENSITIVITY);

        assert_eq!(state, OrientationState::new(0.3, 0.2));
        assert!(state.forward().is_finite());
    }

    #[test]
    fn test_yaw_is_unbounded() {
        let mut state = OrientationState::default();
        for _ in 0..10 {
            state.apply_mouse(Vec2::new(-1000.0, 0.0), MOUSE_SENSITIVITY);
        }
        assert!((state.yaw() - 20.0).abs() < 1e-4);
    }

    #[test]
    fn test_rotation_matches_pivot_composition() {
        let state = OrientationState::new(0.7, -0.4);
        let composed = state.yaw_rotation() * state.pitch_rotation();
        assert!(state.rotation().abs_diff_eq(composed, 1e-6));
    }

    #[test]
    fn test_mouse_right_turns_right() {
        let mut state = OrientationState::default();
        state.apply_mouse(Vec2::new(785.398, 0.0), MOUSE_SENSITIVITY);
        // Quarter turn clockwise seen from above
        assert!(state.forward().abs_diff_eq(Vec3::X, 1e-3));
    }
}
