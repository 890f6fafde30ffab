use glam::{Affine3A, Vec3};
use playground_core::{Node, Object};

use crate::orientation::OrientationState;

/// Two-pivot camera rig
///
/// The yaw pivot sits at the body position and rotates about world up. The
/// pitch pivot hangs off it and rotates about its local X axis. The camera
/// is placed at `camera_offset` inside the pitch pivot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRig {
    yaw: Node,
    pitch: Node,
    camera_offset: Vec3,
}

impl CameraRig {
    pub fn new(camera_offset: Vec3) -> Self {
        Self {
            yaw: Node::default(),
            pitch: Node::default(),
            camera_offset,
        }
    }

    /// The yaw pivot: the rig's outermost node
    pub fn yaw_node(&self) -> &Node {
        &self.yaw
    }

    pub fn pitch_node(&self) -> &Node {
        &self.pitch
    }

    pub fn camera_offset(&self) -> Vec3 {
        self.camera_offset
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.yaw.set_position(position);
    }

    pub fn set_orientation(&mut self, orientation: &OrientationState) {
        self.yaw.set_rotation(orientation.yaw_rotation());
        self.pitch.set_rotation(orientation.pitch_rotation());
    }

    /// Camera-to-world transform
    pub fn camera_transform(&self) -> Affine3A {
        self.yaw.transform()
            * self.pitch.transform()
            * Affine3A::from_translation(self.camera_offset)
    }

    /// Move `camera` to the rig's camera pose
    pub fn apply_to(&self, camera: &mut impl Object) {
        let (_, rotation, translation) = self.camera_transform().to_scale_rotation_translation();
        camera.set_position(translation);
        camera.set_rotation(rotation);
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_camera_follows_yaw_pivot() {
        let mut rig = CameraRig::new(Vec3::new(0.0, 2.0, 6.0));
        rig.set_position(Vec3::new(1.0, 5.0, -3.0));

        let mut camera = Node::default();
        rig.apply_to(&mut camera);
        assert!(camera.position.abs_diff_eq(Vec3::new(1.0, 7.0, 3.0), 1e-5));
    }

    #[test]
    fn test_offset_rotates_with_yaw() {
        let mut rig = CameraRig::new(Vec3::new(0.0, 0.0, 6.0));
        rig.set_orientation(&OrientationState::new(FRAC_PI_2, 0.0));

        let mut camera = Node::default();
        rig.apply_to(&mut camera);
        // Facing -X, so "behind" is +X
        assert!(camera.position.abs_diff_eq(Vec3::new(6.0, 0.0, 0.0), 1e-5));
        assert!((camera.rotation * Vec3::NEG_Z).abs_diff_eq(Vec3::NEG_X, 1e-5));
    }

    #[test]
    fn test_pitch_only_on_inner_pivot() {
        let mut rig = CameraRig::default();
        let orientation = OrientationState::new(0.5, -0.3);
        rig.set_orientation(&orientation);

        assert!(rig.yaw_node().rotation.abs_diff_eq(orientation.yaw_rotation(), 1e-6));
        assert!(rig.pitch_node().rotation.abs_diff_eq(orientation.pitch_rotation(), 1e-6));

        let mut camera = Node::default();
        rig.apply_to(&mut camera);
        for axis in [Vec3::NEG_Z, Vec3::Y] {
            let expected = orientation.rotation() * axis;
            assert!((camera.rotation * axis).abs_diff_eq(expected, 1e-5));
        }
    }
}
