use devices::Action;
use glam::Vec3;

/// Which movement directions are currently held
///
/// Each flag mirrors the last down/up event of its action. Repeated events
/// are idempotent, so key repeat is harmless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputIntent {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl InputIntent {
    /// Record a press or release of `action`
    ///
    /// Returns false for actions that are not movement directions.
    pub fn set(&mut self, action: Action, held: bool) -> bool {
        let flag = match action {
            Action::MoveForward => &mut self.forward,
            Action::MoveBackward => &mut self.backward,
            Action::MoveLeft => &mut self.left,
            Action::MoveRight => &mut self.right,
            Action::Jump | Action::Reset => return false,
        };
        *flag = held;
        true
    }

    pub fn is_idle(&self) -> bool {
        !(self.forward || self.backward || self.left || self.right)
    }

    /// Clear all flags
    pub fn release_all(&mut self) {
        *self = Self::default();
    }

    /// Local movement axes as -1, 0 or 1, with -Z forward and +X right
    ///
    /// Opposite keys cancel.
    pub fn axes(&self) -> Vec3 {
        let x = f32::from(u8::from(self.right)) - f32::from(u8::from(self.left));
        let z = f32::from(u8::from(self.backward)) - f32::from(u8::from(self.forward));
        Vec3::new(x, 0.0, z)
    }

    /// Unit local direction, or zero when idle or cancelled out
    pub fn local_direction(&self) -> Vec3 {
        self.axes().normalize_or_zero()
    }
}
