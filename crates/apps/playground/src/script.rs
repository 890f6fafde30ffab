//! Scripted input timeline
//!
//! Stands in for a window's event stream. Each entry fires once, on the
//! first frame whose simulated time has reached `at`.

use devices::{CursorMode, InputEvent, Key, MouseMotion};
use serde::{Deserialize, Serialize};

/// Events the host reacts to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    /// Forwarded to the input hub
    Input(InputEvent),
    /// Window focus gained or lost
    Focus(bool),
}

/// One timeline event as written in the config file
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScriptEvent {
    KeyDown { key: Key },
    KeyUp { key: Key },
    MouseMove { dx: f32, dy: f32 },
    PointerLock { locked: bool },
    Focus { focused: bool },
}

impl From<ScriptEvent> for HostEvent {
    fn from(event: ScriptEvent) -> Self {
        match event {
            ScriptEvent::KeyDown { key } => HostEvent::Input(InputEvent::KeyDown(key)),
            ScriptEvent::KeyUp { key } => HostEvent::Input(InputEvent::KeyUp(key)),
            ScriptEvent::MouseMove { dx, dy } => {
                HostEvent::Input(InputEvent::MouseMove(MouseMotion::new(dx, dy)))
            }
            ScriptEvent::PointerLock { locked } => {
                let mode = if locked {
                    CursorMode::Grabbed
                } else {
                    CursorMode::Normal
                };
                HostEvent::Input(InputEvent::CursorMode(mode))
            }
            ScriptEvent::Focus { focused } => HostEvent::Focus(focused),
        }
    }
}

/// A timeline entry
///
/// ```toml
/// [[script]]
/// at = 1.5
/// type = "key_down"
/// key = "W"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScriptEntry {
    /// Simulated time in seconds
    pub at: f32,
    #[serde(flatten)]
    pub event: ScriptEvent,
}

/// Timeline with a read cursor
#[derive(Debug, Clone, Default)]
pub struct Script {
    entries: Vec<ScriptEntry>,
    cursor: usize,
}

impl Script {
    /// Build a timeline; entries are ordered by time, ties keep file order
    pub fn new(mut entries: Vec<ScriptEntry>) -> Self {
        entries.sort_by(|a, b| a.at.total_cmp(&b.at));
        Self { entries, cursor: 0 }
    }

    /// Take every entry due at `now`
    pub fn due(&mut self, now: f32) -> Vec<HostEvent> {
        let start = self.cursor;
        while self
            .entries
            .get(self.cursor)
            .is_some_and(|entry| entry.at <= now)
        {
            self.cursor += 1;
        }

        self.entries[start..self.cursor]
            .iter()
            .map(|entry| entry.event.into())
            .collect()
    }

    /// Entries not yet fired
    pub fn remaining(&self) -> usize {
        self.entries.len() - self.cursor
    }

    pub fn is_finished(&self) -> bool {
        self.remaining() == 0
    }
}
