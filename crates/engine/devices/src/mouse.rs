//! Pointer motion and cursor mode

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Relative pointer movement since the previous event, in pixels
///
/// Under pointer lock the absolute cursor position is meaningless; only the
/// delta is reported (the DOM `movementX` / `movementY` pair).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MouseMotion {
    pub delta: Vec2,
}

impl MouseMotion {
    pub fn new(dx: f32, dy: f32) -> Self {
        Self {
            delta: Vec2::new(dx, dy),
        }
    }
}

/// Cursor mode for the application
///
/// Controls how the cursor behaves in the application window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CursorMode {
    /// Visible, free movement (default)
    #[default]
    Normal,
    /// Hidden and locked (pointer lock, for FPS camera)
    ///
    /// Only relative motion is delivered while in this mode.
    Grabbed,
}

impl CursorMode {
    /// Whether the pointer is locked to the window
    pub fn is_grabbed(self) -> bool {
        self == CursorMode::Grabbed
    }
}
