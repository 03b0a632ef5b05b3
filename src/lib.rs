//! Classic Abstract Data Types for Rust
//!
//! This crate provides small, independent implementations of the textbook
//! collections over a fixed element type, [`Element`].
//!
//! # Features
//!
//! - **Binary Min-Heap**: O(log n) push and pop, O(1) peek, and removal of an arbitrary value
//! - **Stack**: O(1) amortized push and pop
//! - **Linked List**: arena-backed singly linked list with O(1) insertion at both ends
//! - **Doubly Linked List**: arena-backed, O(1) insertion and removal at both ends
//! - **Queue**: FIFO adapter over the doubly linked list
//! - **Binary Search Tree**: unbalanced, rejects duplicates, four traversal orders
//! - **Union-Find**: path compression and union by size
//!
//! Operations that need an element, or that target a value by content, return
//! a [`Result`] with a [`CollectionError`] instead of panicking, and never
//! modify the collection when they fail.
//!
//! # Example
//!
//! ```rust
//! use classic_adts::binary_heap::BinaryMinHeap;
//! use classic_adts::CollectionError;
//!
//! let mut heap: BinaryMinHeap = [2, 5, 4, 1, 3].into_iter().collect();
//! heap.remove_first_occurrence(4).unwrap();
//!
//! assert_eq!(heap.pop(), Ok(1));
//! assert_eq!(heap.pop(), Ok(2));
//! assert_eq!(heap.remove_first_occurrence(4), Err(CollectionError::NotFound(4)));
//! ```

pub mod binary_heap;
pub mod bst;
pub mod config;
pub mod doubly_linked_list;
pub mod linked_list;
pub mod queue;
pub mod stack;
mod storage;
pub mod traits;
pub mod union_find;

// Re-export the main trait and error for convenience
pub use traits::{Collection, CollectionError, Result};

/// The value type stored by every collection in this crate
///
/// A fixed-size, totally ordered, `Copy` value.
pub type Element = i64;
