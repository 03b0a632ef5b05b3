//! Union-Find (disjoint sets)
//!
//! Tracks a partition of the elements `0..len` into disjoint components.
//!
//! - `find` compresses the path it walks, re-linking every visited element
//!   directly to the root.
//! - `union` links the root of the smaller component under the root of the
//!   larger one (union by size).
//!
//! Together these make every operation O(α(n)) amortized, where α is the
//! inverse Ackermann function.
//!
//! # Example
//!
//! ```rust
//! use classic_adts::union_find::UnionFind;
//!
//! let mut uf = UnionFind::with_size(5).unwrap();
//! uf.union(0, 1).unwrap();
//! uf.union(3, 4).unwrap();
//! uf.union(1, 4).unwrap();
//!
//! assert!(uf.connected(0, 3).unwrap());
//! assert!(!uf.connected(0, 2).unwrap());
//! assert_eq!(uf.component_size(4), Ok(4));
//! assert_eq!(uf.components(), 2);
//! ```

use std::fmt;

use log::trace;

use crate::config::DEFAULT_UNION_FIND_SIZE;
use crate::traits::{CollectionError, Result};

/// Array-backed disjoint-set forest over `0..len`
#[derive(Debug, Clone)]
pub struct UnionFind {
    /// Parent of each element; roots are their own parent
    parent: Vec<usize>,
    /// Component size, only meaningful at roots
    size: Vec<usize>,
    components: usize,
}

impl UnionFind {
    /// Creates [`DEFAULT_UNION_FIND_SIZE`] singleton components
    pub fn new() -> Self {
        Self::singletons(DEFAULT_UNION_FIND_SIZE)
    }

    /// Creates `size` singleton components
    ///
    /// # Errors
    /// Returns [`CollectionError::InvalidCapacity`] if `size` is zero.
    pub fn with_size(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(CollectionError::InvalidCapacity);
        }
        Ok(Self::singletons(size))
    }

    fn singletons(size: usize) -> Self {
        Self {
            parent: (0..size).collect(),
            size: vec![1; size],
            components: size,
        }
    }

    /// Returns the number of elements
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Always false: a union-find holds at least one element
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of disjoint components
    pub fn components(&self) -> usize {
        self.components
    }

    fn check(&self, element: usize) -> Result<()> {
        if element >= self.len() {
            return Err(CollectionError::OutOfBounds {
                index: element,
                len: self.len(),
            });
        }
        Ok(())
    }

    /// Returns the root of the component holding `element`
    ///
    /// # Errors
    /// Returns [`CollectionError::OutOfBounds`] if `element >= len`.
    pub fn find(&mut self, element: usize) -> Result<usize> {
        self.check(element)?;

        let mut root = element;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut cursor = element;
        while cursor != root {
            let next = self.parent[cursor];
            self.parent[cursor] = root;
            cursor = next;
        }

        Ok(root)
    }

    /// Returns true if `a` and `b` are in the same component
    pub fn connected(&mut self, a: usize, b: usize) -> Result<bool> {
        Ok(self.find(a)? == self.find(b)?)
    }

    /// Returns the number of elements in the component holding `element`
    pub fn component_size(&mut self, element: usize) -> Result<usize> {
        let root = self.find(element)?;
        Ok(self.size[root])
    }

    /// Merges the components holding `a` and `b`
    ///
    /// The larger component's root becomes the root of the merged component;
    /// on a tie `a`'s root wins. Merging a component with itself does nothing.
    ///
    /// # Errors
    /// Returns [`CollectionError::OutOfBounds`] if either element is out of
    /// range, in which case nothing is merged.
    pub fn union(&mut self, a: usize, b: usize) -> Result<()> {
        self.check(b)?;
        let root_a = self.find(a)?;
        let root_b = self.find(b)?;
        if root_a == root_b {
            return Ok(());
        }

        let (root, child) = if self.size[root_a] < self.size[root_b] {
            (root_b, root_a)
        } else {
            (root_a, root_b)
        };
        self.parent[child] = root;
        self.size[root] += self.size[child];
        self.components -= 1;
        trace!(
            "linked root {} under {} (component size {}, {} components left)",
            child,
            root,
            self.size[root],
            self.components
        );
        Ok(())
    }
}

impl Default for UnionFind {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UnionFind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ ")?;
        for (element, parent) in self.parent.iter().enumerate() {
            write!(f, "{}->{} ", element, parent)?;
        }
        write!(f, "}}")
    }
}
