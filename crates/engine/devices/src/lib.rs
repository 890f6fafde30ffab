//! Input device abstractions for the physics playground
//!
//! This crate provides platform-agnostic input types. Hosts translate their
//! native events into [`InputEvent`]s and push them through an [`InputHub`];
//! consumers hold a [`Subscription`] and drain it when convenient.
//!
//! # Modules
//!
//! - [`keyboard`]: Platform-independent key codes and key state tracking
//! - [`mouse`]: Pointer motion and cursor (pointer lock) mode
//! - [`bindings`]: Mapping from physical keys to logical [`Action`]s
//! - [`events`]: Input events and the subscription hub

pub mod bindings;
pub mod events;
pub mod keyboard;
pub mod mouse;

// Re-export commonly used types at crate root
pub use bindings::{Action, KeyBindings};
pub use events::{InputEvent, InputHub, Subscription, SubscriptionId};
pub use keyboard::{Key, KeyState, KeyboardState};
pub use mouse::{CursorMode, MouseMotion};
