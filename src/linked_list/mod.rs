//! Arena-backed linked structures.
//!
//! Nodes are owned by a [`slab::Slab`] inside each structure and link to one
//! another by key, so splicing never touches freed memory.
//!
//! - [`queue::Queue`]: singly linked FIFO over [`single::SingleNode`].
//! - [`sequence::Sequence`]: doubly linked, two-ended sequence over
//!   [`double::DoubleNode`], with [`events`] notifications.
//!
//! # Examples
//!
//! ```
//! use std::sync::{Arc, Mutex};
//!
//! use linked_blocks::linked_list::{events::Event, prelude::*, sequence::Sequence};
//!
//! let mut seq = Sequence::new();
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&seen);
//! seq.subscribe(Event::Pushed, move |was_empty, node| {
//!     sink.lock().unwrap().push((was_empty, *node.data()));
//! });
//!
//! seq.push_tail(1);
//! seq.push_tail(2);
//! seq.push_head(0);
//!
//! assert_eq!(seq.len(), 3);
//! assert_eq!(seq.remove(&1), Ok(1));
//! assert_eq!(seq.pop_head(), Ok(0));
//! assert_eq!(seq.pop_tail(), Ok(2));
//! assert!(seq.is_empty());
//! assert_eq!(*seen.lock().unwrap(), vec![(true, 1), (false, 2), (false, 0)]);
//! ```

pub mod double;
pub mod events;
pub mod node;
pub mod queue;
pub mod sequence;
pub mod single;
pub mod traits;

pub mod prelude {
    pub use super::traits::*;
}

#[cfg(test)]
mod tests;
