//! Arena storage for list nodes
//!
//! Linked nodes live in a [`SlotMap`] and refer to each other by
//! [`NodeKey`] instead of by pointer. Each node has a single owner (the
//! arena), links are plain copyable keys, and a freed slot is reused by the
//! next insertion.
//!
//! Keys are generational: a key to a removed node never aliases a node
//! inserted later into the same slot. The lists built on top keep every link
//! pointing at a live node, so indexing with a link key cannot fail unless the
//! list itself is corrupt.

use std::ops::{Index, IndexMut};

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Key of a node stored in a [`NodeArena`]
    pub(crate) struct NodeKey;
}

/// Slot-reusing node storage
#[derive(Debug, Clone)]
pub(crate) struct NodeArena<N> {
    nodes: SlotMap<NodeKey, N>,
}

impl<N> Default for NodeArena<N> {
    fn default() -> Self {
        Self {
            nodes: SlotMap::with_key(),
        }
    }
}

impl<N> NodeArena<N> {
    /// Insert a node, returning a key to reference it
    pub(crate) fn insert(&mut self, node: N) -> NodeKey {
        self.nodes.insert(node)
    }

    /// Remove a node that a live link points at
    ///
    /// # Panics
    /// Panics if `key` was already removed, which means a list link was left
    /// dangling.
    pub(crate) fn take(&mut self, key: NodeKey) -> N {
        self.nodes
            .remove(key)
            .expect("list link points at a removed node")
    }

    /// Get an immutable reference to a node, or `None` for a stale key
    pub(crate) fn get(&self, key: NodeKey) -> Option<&N> {
        self.nodes.get(key)
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
    }
}

impl<N> Index<NodeKey> for NodeArena<N> {
    type Output = N;

    fn index(&self, key: NodeKey) -> &N {
        &self.nodes[key]
    }
}

impl<N> IndexMut<NodeKey> for NodeArena<N> {
    fn index_mut(&mut self, key: NodeKey) -> &mut N {
        &mut self.nodes[key]
    }
}
