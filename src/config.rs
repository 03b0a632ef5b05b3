//! Construction-time configuration for the array-backed collections
//!
//! Nothing here is read from files or the environment: callers pick a policy
//! and hand it to a constructor such as
//! [`BinaryMinHeap::with_policy`](crate::binary_heap::BinaryMinHeap::with_policy).
//!
//! # Shrinking
//!
//! A `Vec` never gives memory back on its own. Long-lived heaps and stacks that
//! spike and then drain would otherwise keep their peak allocation forever.
//! [`ShrinkPolicy::Quarter`] halves the slack once the collection drops to a
//! quarter of its capacity, which keeps `push`/`pop` amortized O(1) since a
//! shrink can only follow Θ(capacity) removals.

use log::debug;

/// Capacity below which a collection is never shrunk by the default policy
pub const DEFAULT_MIN_CAPACITY: usize = 16;

/// Number of singleton sets created by
/// [`UnionFind::new`](crate::union_find::UnionFind::new)
pub const DEFAULT_UNION_FIND_SIZE: usize = 8;

/// When to release unused backing storage after a removal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShrinkPolicy {
    /// Keep the allocation at its high-water mark
    Never,
    /// Shrink to `max(len * 2, min_capacity)` once `len * 4 <= capacity`
    Quarter {
        /// Capacity that is always retained
        min_capacity: usize,
    },
}

impl Default for ShrinkPolicy {
    fn default() -> Self {
        ShrinkPolicy::Quarter {
            min_capacity: DEFAULT_MIN_CAPACITY,
        }
    }
}

impl ShrinkPolicy {
    /// Returns the capacity `buf` should be reduced to, if any
    fn target_capacity(&self, len: usize, capacity: usize) -> Option<usize> {
        match *self {
            ShrinkPolicy::Never => None,
            ShrinkPolicy::Quarter { min_capacity } => {
                if capacity <= min_capacity || len.saturating_mul(4) > capacity {
                    return None;
                }
                let target = len.saturating_mul(2).max(min_capacity);
                (target < capacity).then_some(target)
            }
        }
    }

    /// Applies the policy to `buf`, returning true if it was shrunk
    ///
    /// The contents and their order are never changed.
    pub fn apply<T>(&self, buf: &mut Vec<T>) -> bool {
        let before = buf.capacity();
        match self.target_capacity(buf.len(), before) {
            Some(target) => {
                buf.shrink_to(target);
                debug!(
                    "shrunk backing storage from {} to {} slots ({} in use)",
                    before,
                    buf.capacity(),
                    buf.len()
                );
                buf.capacity() < before
            }
            None => false,
        }
    }
}
