//! Binary Min-Heap priority queue
//!
//! An array-backed binary min-heap. The backing `Vec` is read as an implicit
//! complete binary tree: the parent of index `i` is `(i - 1) / 2` and its
//! children are `2i + 1` and `2i + 2`. Every element is no smaller than its
//! parent, so the minimum always sits at index 0.
//!
//! Besides the usual `push`/`pop`/`peek`, the heap supports removing an
//! arbitrary value with [`BinaryMinHeap::remove_first_occurrence`].
//!
//! # Time Complexity
//!
//! | Operation                 | Complexity         |
//! |---------------------------|--------------------|
//! | `push`                    | O(log n) amortized |
//! | `pop`                     | O(log n)           |
//! | `peek`                    | O(1)               |
//! | `contains`                | O(n)               |
//! | `remove_first_occurrence` | O(n)               |
//!
//! # Example
//!
//! ```rust
//! use classic_adts::binary_heap::BinaryMinHeap;
//! use classic_adts::CollectionError;
//!
//! let mut heap = BinaryMinHeap::new();
//! heap.push(3);
//! heap.push(1);
//! heap.push(2);
//!
//! assert_eq!(heap.peek(), Ok(1));
//! heap.remove_first_occurrence(2).unwrap();
//! assert_eq!(heap.pop(), Ok(1));
//! assert_eq!(heap.pop(), Ok(3));
//! assert_eq!(heap.pop(), Err(CollectionError::EmptyCollection));
//! ```

use std::fmt;

use log::trace;

use crate::config::{ShrinkPolicy, DEFAULT_MIN_CAPACITY};
use crate::traits::{Collection, CollectionError, Result};
use crate::Element;

/// A binary min-heap of [`Element`]s
///
/// Duplicate values are allowed and indistinguishable from each other. The
/// heap gives no ordering guarantee among equal values.
#[derive(Debug, Clone)]
pub struct BinaryMinHeap {
    /// The heap data in implicit-tree order
    data: Vec<Element>,
    policy: ShrinkPolicy,
}

#[inline]
fn parent(index: usize) -> usize {
    (index - 1) / 2
}

impl BinaryMinHeap {
    /// Creates a new empty heap with the default [`ShrinkPolicy`]
    pub fn new() -> Self {
        Self::with_policy(ShrinkPolicy::default())
    }

    /// Creates a new empty heap with room for `capacity` elements
    ///
    /// Storage is never shrunk below the reserved capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            policy: ShrinkPolicy::Quarter {
                min_capacity: capacity.max(DEFAULT_MIN_CAPACITY),
            },
        }
    }

    /// Creates a new empty heap that releases storage according to `policy`
    pub fn with_policy(policy: ShrinkPolicy) -> Self {
        Self {
            data: Vec::new(),
            policy,
        }
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements the heap can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Inserts `value` as the new last leaf and sifts it up
    pub fn push(&mut self, value: Element) {
        self.data.push(value);
        self.sift_up(self.data.len() - 1);
    }

    /// Returns the minimum without removing it
    ///
    /// # Errors
    /// Returns [`CollectionError::EmptyCollection`] if the heap is empty.
    pub fn peek(&self) -> Result<Element> {
        self.data
            .first()
            .copied()
            .ok_or(CollectionError::EmptyCollection)
    }

    /// Removes and returns the minimum
    ///
    /// The last leaf takes the root's place and is sifted down.
    ///
    /// # Errors
    /// Returns [`CollectionError::EmptyCollection`] if the heap is empty.
    pub fn pop(&mut self) -> Result<Element> {
        let last = self.data.pop().ok_or(CollectionError::EmptyCollection)?;
        let min = match self.data.first_mut() {
            Some(root) => std::mem::replace(root, last),
            None => last,
        };
        self.sift_down(0);
        self.policy.apply(&mut self.data);
        Ok(min)
    }

    /// Returns true if some element equals `value`
    pub fn contains(&self, value: Element) -> bool {
        self.data.contains(&value)
    }

    /// Removes one element equal to `value`
    ///
    /// The occurrence removed is the first one met scanning the backing array,
    /// which is not necessarily the one inserted first. When duplicates exist,
    /// callers should treat it as "any one occurrence".
    ///
    /// # Errors
    /// Returns [`CollectionError::NotFound`] if no element equals `value`.
    pub fn remove_first_occurrence(&mut self, value: Element) -> Result<()> {
        let index = self
            .data
            .iter()
            .position(|&v| v == value)
            .ok_or(CollectionError::NotFound(value))?;

        // The last leaf fills the hole. If the hole was the last leaf itself
        // there is nothing to restore.
        self.data.swap_remove(index);
        if index < self.data.len() {
            self.restore(index);
        }
        self.policy.apply(&mut self.data);
        Ok(())
    }

    /// Restores the invariant around a slot whose value was just overwritten
    ///
    /// The new value can only be out of place towards one side: too large for
    /// its children or too small for its parent. Sifting down moves it away
    /// from `index` exactly when it was too large, so sifting up is needed only
    /// if it is still there afterwards.
    fn restore(&mut self, index: usize) {
        let moved = self.data[index];
        self.sift_down(index);
        if self.data[index] == moved {
            trace!("value {} settled at or above slot {}, sifting up", moved, index);
            self.sift_up(index);
        } else {
            trace!("value {} sifted down from slot {}", moved, index);
        }
    }

    /// Returns the backing array in heap order
    pub fn as_slice(&self) -> &[Element] {
        &self.data
    }

    /// Iterates over the elements in arbitrary (heap) order
    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.data.iter()
    }

    /// Removes every element, keeping the allocation subject to the policy
    pub fn clear(&mut self) {
        self.data.clear();
        self.policy.apply(&mut self.data);
    }

    /// Consumes the heap and returns its elements in non-decreasing order
    pub fn into_sorted_vec(mut self) -> Vec<Element> {
        self.policy = ShrinkPolicy::Never;
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Ok(min) = self.pop() {
            sorted.push(min);
        }
        sorted
    }

    /// Checks the heap property for every parent-child pair
    pub fn verify_heap_property(&self) -> bool {
        (1..self.data.len()).all(|i| self.data[i] >= self.data[parent(i)])
    }

    /// Move element at index up to maintain heap property
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 && self.data[index] < self.data[parent(index)] {
            self.data.swap(index, parent(index));
            index = parent(index);
        }
    }

    /// Move element at index down to maintain heap property
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let min_child = if right < len && self.data[right] < self.data[left] {
                right
            } else {
                left
            };

            if self.data[min_child] < self.data[index] {
                self.data.swap(index, min_child);
                index = min_child;
            } else {
                break;
            }
        }
    }
}

impl Default for BinaryMinHeap {
    fn default() -> Self {
        Self::new()
    }
}

impl Collection for BinaryMinHeap {
    fn len(&self) -> usize {
        self.len()
    }

    fn contains(&self, value: Element) -> bool {
        self.contains(value)
    }
}

impl Extend<Element> for BinaryMinHeap {
    fn extend<I: IntoIterator<Item = Element>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl FromIterator<Element> for BinaryMinHeap {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}

impl fmt::Display for BinaryMinHeap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ ")?;
        for value in &self.data {
            write!(f, "{} ", value)?;
        }
        write!(f, "]")
    }
}
