//! Common traits and the error type shared by every collection
//!
//! This module provides:
//!
//! - [`CollectionError`]: the failure kinds surfaced by fallible operations
//! - [`Collection`]: the minimal read-only interface (`len`, `is_empty`,
//!   `contains`) implemented by every structure that stores [`Element`]s
//!
//! Operations that need at least one element, or that target a value by
//! content, return a [`Result`] instead of panicking. Every check happens
//! before any mutation, so a failed call leaves the collection untouched.

use thiserror::Error;

use crate::Element;

/// Error type for collection operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// The operation needs at least one element but the collection is empty
    #[error("collection is empty")]
    EmptyCollection,
    /// A value-based removal targeted a value that is not stored
    #[error("value {0} not found")]
    NotFound(Element),
    /// The value is already stored and the collection rejects duplicates
    #[error("value {0} is already present")]
    Duplicate(Element),
    /// An element index lies outside `0..len`
    #[error("element {index} is out of bounds for {len} elements")]
    OutOfBounds {
        /// The requested element
        index: usize,
        /// Number of elements in the structure
        len: usize,
    },
    /// A structure was requested with zero capacity
    #[error("size must be a positive number")]
    InvalidCapacity,
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, CollectionError>;

/// Base trait for collections of [`Element`]s
///
/// # Example
///
/// ```rust
/// use classic_adts::Collection;
/// use classic_adts::stack::Stack;
///
/// fn count_hits<C: Collection>(c: &C, probes: &[i64]) -> usize {
///     probes.iter().filter(|&&p| c.contains(p)).count()
/// }
///
/// let mut stack = Stack::new();
/// stack.push(1);
/// stack.push(2);
/// assert_eq!(count_hits(&stack, &[1, 2, 3]), 2);
/// ```
pub trait Collection {
    /// Returns the number of elements in the collection
    ///
    /// # Time Complexity
    /// O(1) for all implementations
    fn len(&self) -> usize;

    /// Returns true if the collection holds no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if some element equals `value`
    ///
    /// # Time Complexity
    /// O(n) for the linear structures, O(height) for the search tree.
    fn contains(&self, value: Element) -> bool;
}
