//! Mapping from physical keys to logical actions
//!
//! Consumers react to [`Action`]s, never to raw keys, so rebinding is a data
//! change. Several keys may trigger the same action (WASD and the arrow keys
//! both move); a key triggers at most one action.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::keyboard::Key;

/// Logical input actions understood by the playground
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    MoveForward,
    MoveBackward,
    MoveLeft,
    MoveRight,
    Jump,
    /// Put the player back at the spawn point
    Reset,
}

/// Key-to-action binding table
///
/// Serialized as a table of action name to key list:
///
/// ```toml
/// move_forward = ["W", "Up"]
/// jump = ["Space"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<Action, Vec<Key>>", into = "BTreeMap<Action, Vec<Key>>")]
pub struct KeyBindings {
    keys: HashMap<Key, Action>,
}

impl Default for KeyBindings {
    /// WASD and arrow keys to move, Space to jump, R to reset
    fn default() -> Self {
        let mut bindings = Self::empty();
        bindings.bind(Key::W, Action::MoveForward);
        bindings.bind(Key::Up, Action::MoveForward);
        bindings.bind(Key::S, Action::MoveBackward);
        bindings.bind(Key::Down, Action::MoveBackward);
        bindings.bind(Key::A, Action::MoveLeft);
        bindings.bind(Key::Left, Action::MoveLeft);
        bindings.bind(Key::D, Action::MoveRight);
        bindings.bind(Key::Right, Action::MoveRight);
        bindings.bind(Key::Space, Action::Jump);
        bindings.bind(Key::R, Action::Reset);
        bindings
    }
}

impl KeyBindings {
    /// A table with nothing bound
    pub fn empty() -> Self {
        Self {
            keys: HashMap::new(),
        }
    }

    /// Bind `key` to `action`, returning the action it was bound to before
    pub fn bind(&mut self, key: Key, action: Action) -> Option<Action> {
        self.keys.insert(key, action)
    }

    /// The action `key` triggers, if any
    pub fn action(&self, key: Key) -> Option<Action> {
        self.keys.get(&key).copied()
    }

    /// All keys bound to `action`, sorted
    pub fn keys_for(&self, action: Action) -> Vec<Key> {
        let mut keys: Vec<Key> = self
            .keys
            .iter()
            .filter(|(_, bound)| **bound == action)
            .map(|(key, _)| *key)
            .collect();
        keys.sort();
        keys
    }

    /// Number of bound keys
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether no key is bound
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl From<BTreeMap<Action, Vec<Key>>> for KeyBindings {
    fn from(table: BTreeMap<Action, Vec<Key>>) -> Self {
        let mut bindings = Self::empty();
        for (action, keys) in table {
            for key in keys {
                if let Some(previous) = bindings.bind(key, action) {
                    tracing::warn!(
                        "Key {:?} bound to both {:?} and {:?}, keeping {:?}",
                        key,
                        previous,
                        action,
                        action
                    );
                }
            }
        }
        bindings
    }
}

impl From<KeyBindings> for BTreeMap<Action, Vec<Key>> {
    fn from(bindings: KeyBindings) -> Self {
        let mut table: BTreeMap<Action, Vec<Key>> = BTreeMap::new();
        for (key, action) in bindings.keys {
            table.entry(action).or_default().push(key);
        }
        for keys in table.values_mut() {
            keys.sort();
        }
        table
    }
}
