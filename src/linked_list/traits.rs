/// A trait for a link in an arena-backed linked list.
///
/// Links refer to their neighbours by arena key rather than by pointer.
pub trait Link {
    /// Get the key of the next node
    fn next(&self) -> Option<usize>;

    /// Set the key of the next node
    fn set_next(&mut self, next: Option<usize>);
}

/// A trait for a link with a previous pointer.
pub trait LinkWithPrev: Link {
    /// Get the key of the previous node
    fn prev(&self) -> Option<usize>;

    /// Set the key of the previous node
    fn set_prev(&mut self, prev: Option<usize>);
}

/// A trait for a node that contains data.
pub trait NodeWithData: Link {
    /// The type of data stored in the node.
    type Data;

    /// Get the data associated with the node
    fn data(&self) -> &Self::Data;
}
