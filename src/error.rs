//! Error types shared by the linked structures.

use thiserror::Error;

/// Result type alias for collection operations.
pub type CollectionResult<T> = Result<T, CollectionError>;

/// Errors returned when an operation's precondition does not hold.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionError {
    /// The collection has no elements to pop, peek or search.
    #[error("collection is empty")]
    Empty,

    /// A removal scan reached the end without a match.
    #[error("needle not present in sequence")]
    NotFound,
}
