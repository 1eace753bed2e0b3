use super::{node::ListNode, traits::Link};

/// A node in a singly linked list.
pub type SingleNode<T> = ListNode<SingleLink, T>;

/// A link in a singly linked list.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SingleLink {
    next: Option<usize>,
}

impl Link for SingleLink {
    fn next(&self) -> Option<usize> {
        self.next
    }

    fn set_next(&mut self, next: Option<usize>) {
        self.next = next;
    }
}
