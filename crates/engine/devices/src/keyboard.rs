//! Keyboard input abstraction
//!
//! Hosts hand [`Key`]s to the input hub, which keeps a [`KeyboardState`] so
//! edge-triggered actions can be detected once per frame.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Key state for a single key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyState {
    /// Whether the key is currently pressed
    pub pressed: bool,
    /// Whether the key was just pressed this frame
    pub just_pressed: bool,
    /// Whether the key was just released this frame
    pub just_released: bool,
}

impl KeyState {
    /// Update the key state for a new frame
    ///
    /// Clears the "just_pressed" and "just_released" flags.
    pub fn update(&mut self) {
        self.just_pressed = false;
        self.just_released = false;
    }

    /// Record a key press event, returns false for a repeat of a held key
    pub fn press(&mut self) -> bool {
        let fresh = !self.pressed;
        if fresh {
            self.just_pressed = true;
        }
        self.pressed = true;
        fresh
    }

    /// Record a key release event, returns false if the key was not held
    pub fn release(&mut self) -> bool {
        let was_pressed = self.pressed;
        if was_pressed {
            self.just_released = true;
        }
        self.pressed = false;
        was_pressed
    }

    fn is_idle(&self) -> bool {
        !self.pressed && !self.just_pressed && !self.just_released
    }
}

/// Platform-independent key codes
///
/// A deliberately small set: the keys a first-person playground binds plus
/// the usual modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Key {
    // Letters
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,

    // Navigation
    Up,
    Down,
    Left,
    Right,

    // Modifiers
    ShiftLeft,
    ShiftRight,
    ControlLeft,
    ControlRight,
    AltLeft,
    AltRight,

    // Special
    Space,
    Escape,
    Enter,
    Tab,
}

/// Keyboard state tracker
///
/// Tracks the state of all keys and provides convenient query methods.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    keys: HashMap<Key, KeyState>,
}

impl KeyboardState {
    /// Update the keyboard state for a new frame
    ///
    /// Clears the per-frame flags and forgets keys that are fully released.
    pub fn update(&mut self) {
        for state in self.keys.values_mut() {
            state.update();
        }
        self.keys.retain(|_, state| !state.is_idle());
    }

    /// Record a key press event, returns false for an auto-repeat
    pub fn press(&mut self, key: Key) -> bool {
        self.keys.entry(key).or_default().press()
    }

    /// Record a key release event, returns false if the key was not held
    pub fn release(&mut self, key: Key) -> bool {
        self.keys.entry(key).or_default().release()
    }

    /// State of a single key
    pub fn state(&self, key: Key) -> KeyState {
        self.keys.get(&key).copied().unwrap_or_default()
    }

    /// Check if a key was just pressed this frame
    pub fn is_just_pressed(&self, key: Key) -> bool {
        self.state(key).just_pressed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_state_press_release() {
        let mut state = KeyState::default();
        assert!(!state.pressed);

        assert!(state.press());
        assert!(state.pressed);
        assert!(state.just_pressed);

        // Auto-repeat
        assert!(!state.press());

        state.update();
        assert!(state.pressed);
        assert!(!state.just_pressed);

        assert!(state.release());
        assert!(!state.pressed);
        assert!(state.just_released);
        assert!(!state.release());
    }

    #[test]
    fn test_keyboard_state() {
        let mut kb = KeyboardState::default();
        assert!(!kb.state(Key::W).pressed);

        assert!(kb.press(Key::W));
        assert!(!kb.press(Key::W));
        assert!(kb.state(Key::W).pressed);
        assert!(kb.is_just_pressed(Key::W));

        kb.update();
        assert!(kb.state(Key::W).pressed);
        assert!(!kb.is_just_pressed(Key::W));

        assert!(kb.release(Key::W));
        assert!(kb.state(Key::W).just_released);

        // Fully released keys are forgotten
        kb.update();
        assert_eq!(kb.state(Key::W), KeyState::default());
        assert!(kb.keys.is_empty());
    }
}
