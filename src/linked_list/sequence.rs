use core::fmt;

use slab::Slab;

use super::{
    double::DoubleNode,
    events::{Emitter, Event, ListenerId},
    traits::{Link, LinkWithPrev, NodeWithData},
};
use crate::error::{CollectionError, CollectionResult};

/// A doubly linked sequence with mutation at both ends.
///
/// Following `next` from the tail visits every node and ends at the head;
/// following `prev` from the head visits the same nodes in reverse. Nodes
/// live in an arena and refer to each other by key.
///
/// Not synchronized: share it across threads only behind an external lock,
/// e.g. `Arc<Mutex<Sequence<T>>>`. It is `Send` whenever `T` is.
pub struct Sequence<T> {
    nodes: Slab<DoubleNode<T>>,
    head: Option<usize>,
    tail: Option<usize>,
    events: Emitter<T>,
}

impl<T> Sequence<T> {
    /// Creates a new, empty sequence.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty sequence with room for `capacity` nodes before the
    /// arena reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            head: None,
            tail: None,
            events: Emitter::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Registers `handler` for `event`.
    ///
    /// Handlers run synchronously inside the mutating call and only see the
    /// affected node. A [`Event::Pushed`] handler observes the node before it
    /// is linked, so its links are still empty.
    ///
    /// # Reentrancy
    ///
    /// A handler must not mutate the sequence that is emitting. If the
    /// sequence is shared through a `RefCell`, doing so panics with "already
    /// borrowed"; behind a `Mutex` the lock is still held by the emitting
    /// call.
    pub fn subscribe<F>(&mut self, event: Event, handler: F) -> ListenerId
    where
        F: FnMut(bool, &DoubleNode<T>) + Send + 'static,
    {
        self.events.subscribe(event, handler)
    }

    /// Removes a handler previously returned by [`Sequence::subscribe`].
    pub fn unsubscribe(&mut self, event: Event, id: ListenerId) -> bool {
        self.events.unsubscribe(event, id)
    }

    pub fn listener_count(&self, event: Event) -> usize {
        self.events.listener_count(event)
    }

    /// Pushes `value` at the head end.
    pub fn push_head(&mut self, value: T) {
        let mut node = DoubleNode::new(value);
        let was_empty = self.is_empty();
        self.events.emit(Event::Pushed, was_empty, &node);

        match self.head {
            None => {
                let key = self.nodes.insert(node);
                self.head = Some(key);
                self.tail = Some(key);
            }
            Some(old_head) => {
                node.set_prev(Some(old_head));
                let key = self.nodes.insert(node);
                self.nodes[old_head].set_next(Some(key));
                self.head = Some(key);
            }
        }
    }

    /// Pushes `value` at the tail end.
    pub fn push_tail(&mut self, value: T) {
        let mut node = DoubleNode::new(value);
        let was_empty = self.is_empty();
        self.events.emit(Event::Pushed, was_empty, &node);

        match self.tail {
            None => {
                let key = self.nodes.insert(node);
                self.head = Some(key);
                self.tail = Some(key);
            }
            Some(old_tail) => {
                node.set_next(Some(old_tail));
                let key = self.nodes.insert(node);
                self.nodes[old_tail].set_prev(Some(key));
                self.tail = Some(key);
            }
        }
    }

    /// Pops the value at the head end.
    pub fn pop_head(&mut self) -> CollectionResult<T> {
        let key = self.head.ok_or(CollectionError::Empty)?;
        let node = self.nodes.remove(key);

        match node.prev() {
            None => {
                self.head = None;
                self.tail = None;
            }
            Some(new_head) => {
                self.nodes[new_head].set_next(None);
                self.head = Some(new_head);
            }
        }

        Ok(self.release(Event::Popped, node))
    }

    /// Pops the value at the tail end.
    pub fn pop_tail(&mut self) -> CollectionResult<T> {
        let key = self.tail.ok_or(CollectionError::Empty)?;
        let node = self.nodes.remove(key);

        match node.next() {
            None => {
                self.head = None;
                self.tail = None;
            }
            Some(new_tail) => {
                self.nodes[new_tail].set_prev(None);
                self.tail = Some(new_tail);
            }
        }

        Ok(self.release(Event::Popped, node))
    }

    /// Returns the value at the head end.
    pub fn peek_head(&self) -> CollectionResult<&T> {
        let key = self.head.ok_or(CollectionError::Empty)?;
        Ok(self.nodes[key].data())
    }

    /// Returns the value at the tail end.
    pub fn peek_tail(&self) -> CollectionResult<&T> {
        let key = self.tail.ok_or(CollectionError::Empty)?;
        Ok(self.nodes[key].data())
    }

    /// Removes the first value, scanning from tail to head, for which
    /// `matches` returns `true`.
    ///
    /// Use this to match on identity, e.g. `|v| Rc::ptr_eq(v, &needle)`.
    pub fn remove_by<F>(&mut self, mut matches: F) -> CollectionResult<T>
    where
        F: FnMut(&T) -> bool,
    {
        if self.is_empty() {
            return Err(CollectionError::Empty);
        }

        let mut cursor = self.tail;
        while let Some(key) = cursor {
            let node = &self.nodes[key];
            if !matches(node.data()) {
                cursor = node.next();
                continue;
            }

            let (prev, next) = (node.prev(), node.next());
            match prev {
                Some(prev) => self.nodes[prev].set_next(next),
                None => self.tail = next,
            }
            match next {
                Some(next) => self.nodes[next].set_prev(prev),
                None => self.head = prev,
            }

            let node = self.nodes.remove(key);
            return Ok(self.release(Event::Removed, node));
        }

        Err(CollectionError::NotFound)
    }

    /// Removes the first value equal to `needle`, scanning from tail to head.
    pub fn remove(&mut self, needle: &T) -> CollectionResult<T>
    where
        T: PartialEq,
    {
        self.remove_by(|value| value == needle)
    }

    /// Clears the links of an unlinked node, notifies `event` handlers and
    /// hands back the node's value.
    fn release(&mut self, event: Event, mut node: DoubleNode<T>) -> T {
        node.unlink();
        let now_empty = self.is_empty();
        self.events.emit(event, now_empty, &node);
        node.into_data()
    }

    /// Values reached by following `next` from the tail.
    #[cfg(test)]
    pub(crate) fn walk_next(&self) -> alloc::vec::Vec<&T> {
        let mut values = alloc::vec::Vec::new();
        let mut cursor = self.tail;
        while let Some(key) = cursor {
            values.push(self.nodes[key].data());
            cursor = self.nodes[key].next();
        }
        values
    }

    /// Values reached by following `prev` from the head.
    #[cfg(test)]
    pub(crate) fn walk_prev(&self) -> alloc::vec::Vec<&T> {
        let mut values = alloc::vec::Vec::new();
        let mut cursor = self.head;
        while let Some(key) = cursor {
            values.push(self.nodes[key].data());
            cursor = self.nodes[key].prev();
        }
        values
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        let mut cursor = self.tail;
        while let Some(key) = cursor {
            let node = &self.nodes[key];
            list.entry(node.data());
            cursor = node.next();
        }
        list.finish()
    }
}
