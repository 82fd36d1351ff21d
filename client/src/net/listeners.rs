//! Session-change listener registry.
//!
//! DESIGN
//! ======
//! Listeners are keyed by a monotonically increasing id. A `Subscription`
//! holds only a weak reference to the registry, so a handle that outlives its
//! provider is inert, and dropping the handle removes the listener.

#[cfg(test)]
#[path = "listeners_test.rs"]
mod listeners_test;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::types::{Session, SessionEvent};

/// Listener signature for provider session events.
pub type SessionCallback = Box<dyn Fn(SessionEvent, Option<Session>)>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    entries: Vec<(u64, Rc<dyn Fn(SessionEvent, Option<Session>)>)>,
}

/// Fan-out point for session events inside a provider implementation.
#[derive(Clone, Default)]
pub struct SessionListeners {
    registry: Rc<RefCell<Registry>>,
}

impl SessionListeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, callback: SessionCallback) -> Subscription {
        let mut registry = self.registry.borrow_mut();
        registry.next_id += 1;
        let id = registry.next_id;
        registry.entries.push((id, Rc::from(callback)));
        Subscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Deliver `event` to every registered listener in subscription order.
    ///
    /// The listener list is snapshotted first, so callbacks may subscribe or
    /// unsubscribe while being notified.
    pub fn emit(&self, event: SessionEvent, session: Option<&Session>) {
        let callbacks: Vec<_> = self
            .registry
            .borrow()
            .entries
            .iter()
            .map(|(_, cb)| Rc::clone(cb))
            .collect();
        log::debug!("session event {} -> {} listener(s)", event.as_str(), callbacks.len());
        for callback in callbacks {
            callback(event, session.cloned());
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.registry.borrow().entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Handle for one registered listener.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl Subscription {
    /// Release the listener now rather than at drop.
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().entries.retain(|(id, _)| *id != self.id);
        }
    }
}
