use core::fmt;

use slab::Slab;

use super::{
    single::SingleNode,
    traits::{Link, NodeWithData},
};
use crate::error::{CollectionError, CollectionResult};

/// A singly linked FIFO queue.
///
/// Values enter at the tail and leave from the head; each node's `next`
/// points one step closer to the tail.
pub struct Queue<T> {
    nodes: Slab<SingleNode<T>>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl<T> Queue<T> {
    /// Creates a new, empty queue.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Adds `value` at the tail.
    pub fn enqueue(&mut self, value: T) {
        let key = self.nodes.insert(SingleNode::new(value));
        match self.tail.replace(key) {
            Some(old_tail) => self.nodes[old_tail].set_next(Some(key)),
            None => self.head = Some(key),
        }
    }

    /// Removes and returns the value at the head.
    pub fn dequeue(&mut self) -> CollectionResult<T> {
        let key = self.head.ok_or(CollectionError::Empty)?;
        let node = self.nodes.remove(key);
        self.head = node.next();
        if self.head.is_none() {
            self.tail = None;
        }
        Ok(node.into_data())
    }

    /// Returns the value that the next [`Queue::dequeue`] would remove.
    pub fn peek(&self) -> CollectionResult<&T> {
        let key = self.head.ok_or(CollectionError::Empty)?;
        Ok(self.nodes[key].data())
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        let mut cursor = self.head;
        while let Some(key) = cursor {
            let node = &self.nodes[key];
            list.entry(node.data());
            cursor = node.next();
        }
        list.finish()
    }
}
