//! Input events and the subscription hub
//!
//! The host owns one [`InputHub`] and pushes every platform event into it.
//! Each consumer takes a [`Subscription`], which queues events until the
//! consumer drains it. Dropping or unsubscribing a subscription detaches it,
//! so several consumers (menu, gameplay) can come and go over the lifetime of
//! one hub without leaving handlers behind.

use std::sync::mpsc::{channel, Receiver, Sender};

use crate::keyboard::{Key, KeyboardState};
use crate::mouse::{CursorMode, MouseMotion};

/// A platform input event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    MouseMove(MouseMotion),
    /// Pointer lock was acquired or released
    CursorMode(CursorMode),
}

/// Identifies a subscription within its hub
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// A consumer's queue of input events
#[derive(Debug)]
pub struct Subscription {
    id: SubscriptionId,
    receiver: Receiver<InputEvent>,
}

impl Subscription {
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Take all queued events
    pub fn drain(&self) -> Vec<InputEvent> {
        self.receiver.try_iter().collect()
    }
}

/// Fan-out point for platform input events
#[derive(Debug, Default)]
pub struct InputHub {
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Sender<InputEvent>)>,
    keyboard: KeyboardState,
}

impl InputHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a new consumer
    pub fn subscribe(&mut self) -> Subscription {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;

        let (sender, receiver) = channel();
        self.subscribers.push((id, sender));
        tracing::debug!("Input subscription {:?} attached", id);

        Subscription { id, receiver }
    }

    /// Detach a consumer. Returns false if it was not attached to this hub.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(id, _)| *id != subscription.id);
        let removed = self.subscribers.len() != before;
        if removed {
            tracing::debug!("Input subscription {:?} detached", subscription.id);
        }
        removed
    }

    /// Number of attached consumers
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Deliver an event to every attached consumer
    ///
    /// Subscriptions whose receiving end has been dropped are pruned here.
    pub fn dispatch(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyDown(key) => {
                self.keyboard.press(key);
            }
            InputEvent::KeyUp(key) => {
                self.keyboard.release(key);
            }
            _ => {}
        }

        self.subscribers.retain(|(id, sender)| {
            let alive = sender.send(event).is_ok();
            if !alive {
                tracing::debug!("Input subscription {:?} dropped, pruning", id);
            }
            alive
        });
    }

    /// Keyboard state as seen through the dispatched events
    pub fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    /// Advance the per-frame keyboard flags
    pub fn end_frame(&mut self) {
        self.keyboard.update();
    }
}
