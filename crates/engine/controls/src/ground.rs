use glam::Vec3;

/// Whether the controlled body is standing on something
///
/// Set by contacts whose normal, pointing from the other body into ours,
/// is steep enough. Cleared by jumping and, depending on the latch mode,
/// at the start of every physics step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GroundContact {
    on_ground: bool,
}

impl GroundContact {
    pub fn is_grounded(&self) -> bool {
        self.on_ground
    }

    /// Feed a contact normal oriented toward the controlled body
    ///
    /// Returns true if the contact counts as ground. A contact that does not
    /// count never clears an existing ground flag.
    pub fn observe(&mut self, normal: Vec3, threshold: f32) -> bool {
        let grounded = normal.dot(Vec3::Y) > threshold;
        if grounded {
            self.on_ground = true;
        }
        grounded
    }

    /// Clear the flag, returning whether it was set
    pub fn consume(&mut self) -> bool {
        std::mem::take(&mut self.on_ground)
    }

    pub fn clear(&mut self) {
        self.on_ground = false;
    }
}
