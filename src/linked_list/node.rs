use super::traits::{Link, LinkWithPrev, NodeWithData};

/// A node owned by a linked structure's arena.
///
/// `L` decides the shape of the link ([`SingleLink`](super::single::SingleLink)
/// or [`DoubleLink`](super::double::DoubleLink)), `T` is the carried value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListNode<L, T> {
    link: L,
    data: T,
}

impl<L, T> ListNode<L, T>
where
    L: Link + Default,
{
    /// Creates a detached node wrapping `data`.
    pub fn new(data: T) -> Self {
        Self {
            link: L::default(),
            data,
        }
    }

    /// Clears every link of the node.
    pub(crate) fn unlink(&mut self) {
        self.link = L::default();
    }

    /// Consumes the node shell, handing back its value.
    pub(crate) fn into_data(self) -> T {
        self.data
    }
}

impl<L: Link, T> Link for ListNode<L, T> {
    fn next(&self) -> Option<usize> {
        self.link.next()
    }

    fn set_next(&mut self, next: Option<usize>) {
        self.link.set_next(next);
    }
}

impl<L, T> LinkWithPrev for ListNode<L, T>
where
    L: LinkWithPrev,
{
    fn prev(&self) -> Option<usize> {
        self.link.prev()
    }

    fn set_prev(&mut self, prev: Option<usize>) {
        self.link.set_prev(prev);
    }
}

impl<L: Link, T> NodeWithData for ListNode<L, T> {
    type Data = T;

    fn data(&self) -> &Self::Data {
        &self.data
    }
}
