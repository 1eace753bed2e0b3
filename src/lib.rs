//! Small generic collection building blocks.
//!
//! - [`flags::Flags`]: set, clear and test bits of an integer mask.
//! - [`linked_list::queue::Queue`]: a singly linked FIFO queue.
//! - [`linked_list::sequence::Sequence`]: a doubly linked, two-ended sequence
//!   with removal by value and lifecycle notifications.
#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod error;
pub mod flags;
pub mod linked_list;

pub use error::{CollectionError, CollectionResult};
