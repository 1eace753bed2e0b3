//! Lifecycle notifications for [`Sequence`](super::sequence::Sequence).
//!
//! Handlers are registered per [`Event`] and run synchronously, in
//! registration order, from inside the mutating call. Each handler receives
//! a flag and a shared reference to the affected node:
//!
//! | Event | Emitted | Flag |
//! |-------|---------|------|
//! | [`Event::Pushed`] | after the node is created, before it is linked | sequence was empty |
//! | [`Event::Popped`] | after the node is unlinked | sequence is now empty |
//! | [`Event::Removed`] | after the node is spliced out | sequence is now empty |
//!
//! # Reentrancy
//!
//! A handler must not mutate the sequence that is emitting. The sequence is
//! mid-operation while handlers run, so a `Pushed` handler would see an
//! unlinked node and a half-updated chain. Safe code cannot reach the
//! sequence directly from a handler; a handler that reaches it through shared
//! ownership instead hits the outer borrow: a `RefCell` panics with "already
//! borrowed" and a `Mutex` is already held (`try_lock` fails, `lock`
//! deadlocks).

use alloc::{boxed::Box, vec::Vec};

use hashbrown::HashMap;

use super::double::DoubleNode;

/// The categories of notification a sequence emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    Pushed,
    Popped,
    Removed,
}

/// Identifies one registered handler, for unsubscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// A notification handler.
///
/// Handlers are `Send` so a sequence can move between threads behind a lock.
pub type Handler<T> = Box<dyn FnMut(bool, &DoubleNode<T>) + Send>;

/// A registry of handlers keyed by [`Event`].
pub struct Emitter<T> {
    handlers: HashMap<Event, Vec<(ListenerId, Handler<T>)>>,
    next_id: u64,
}

impl<T> Emitter<T> {
    /// Creates an emitter with no handlers.
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
            next_id: 0,
        }
    }

    /// Registers `handler` for `event`, after any handlers already present.
    pub fn subscribe<F>(&mut self, event: Event, handler: F) -> ListenerId
    where
        F: FnMut(bool, &DoubleNode<T>) + Send + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.handlers
            .entry(event)
            .or_default()
            .push((id, Box::new(handler)));
        id
    }

    /// Removes the handler registered under `id` for `event`.
    ///
    /// Returns `false` if no such handler was registered.
    pub fn unsubscribe(&mut self, event: Event, id: ListenerId) -> bool {
        let Some(handlers) = self.handlers.get_mut(&event) else {
            return false;
        };
        let Some(pos) = handlers.iter().position(|(registered, _)| *registered == id) else {
            return false;
        };
        handlers.remove(pos);
        if handlers.is_empty() {
            self.handlers.remove(&event);
        }
        true
    }

    /// Number of handlers registered for `event`.
    pub fn listener_count(&self, event: Event) -> usize {
        self.handlers.get(&event).map_or(0, Vec::len)
    }

    /// Invokes every handler registered for `event`, in registration order.
    pub fn emit(&mut self, event: Event, flag: bool, node: &DoubleNode<T>) {
        if let Some(handlers) = self.handlers.get_mut(&event) {
            for (_, handler) in handlers.iter_mut() {
                handler(flag, node);
            }
        }
    }
}

impl<T> Default for Emitter<T> {
    fn default() -> Self {
        Self::new()
    }
}
