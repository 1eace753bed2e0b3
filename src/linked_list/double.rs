use super::{
    node::ListNode,
    traits::{Link, LinkWithPrev},
};

/// A node in a doubly linked list.
pub type DoubleNode<T> = ListNode<DoubleLink, T>;

/// A link in a doubly linked list.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DoubleLink {
    next: Option<usize>,
    prev: Option<usize>,
}

impl Link for DoubleLink {
    fn next(&self) -> Option<usize> {
        self.next
    }

    fn set_next(&mut self, next: Option<usize>) {
        self.next = next;
    }
}

impl LinkWithPrev for DoubleLink {
    fn prev(&self) -> Option<usize> {
        self.prev
    }

    fn set_prev(&mut self, prev: Option<usize>) {
        self.prev = prev;
    }
}
