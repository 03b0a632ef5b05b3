//! Binary Search Tree
//!
//! An unbalanced binary search tree. Every value in a node's left subtree is
//! smaller than the node's value and every value in its right subtree is
//! larger; duplicates are rejected.
//!
//! Each node is owned by exactly one link (`Option<Box<Node>>`), so removal
//! is a matter of moving boxes between links. Removing a node with two
//! children copies its in-order successor (the leftmost value of the right
//! subtree) into it and removes the successor instead.
//!
//! Operations walk a single root-to-leaf path, so they cost O(height): O(log n)
//! for random insertion orders and O(n) for sorted ones.

use std::cmp::Ordering;
use std::collections::VecDeque;

use crate::traits::{Collection, CollectionError, Result};
use crate::Element;

type Link = Option<Box<Node>>;

#[derive(Debug, Clone)]
struct Node {
    value: Element,
    left: Link,
    right: Link,
}

impl Node {
    fn leaf(value: Element) -> Box<Self> {
        Box::new(Node {
            value,
            left: None,
            right: None,
        })
    }
}

/// An unbalanced binary search tree of distinct [`Element`]s
///
/// # Example
///
/// ```rust
/// use classic_adts::bst::BinarySearchTree;
///
/// let mut tree = BinarySearchTree::new();
/// for v in [5, 3, 8, 1, 4] {
///     tree.insert(v).unwrap();
/// }
/// assert!(tree.insert(3).is_err());
///
/// assert_eq!(tree.in_order(), vec![1, 3, 4, 5, 8]);
/// assert_eq!(tree.height(), 3);
///
/// tree.remove(3).unwrap();
/// assert_eq!(tree.pre_order(), vec![5, 4, 1, 8]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BinarySearchTree {
    root: Link,
    len: usize,
}

impl BinarySearchTree {
    /// Creates a new empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored values
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree is empty
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the sum of the degrees of all nodes, which is `len - 1`
    ///
    /// # Errors
    /// Returns [`CollectionError::EmptyCollection`] for an empty tree, which
    /// has no degree.
    pub fn total_degree(&self) -> Result<usize> {
        if self.is_empty() {
            return Err(CollectionError::EmptyCollection);
        }
        Ok(self.len - 1)
    }

    /// Returns the number of nodes on the longest root-to-leaf path
    ///
    /// An empty tree has height 0 and a single node has height 1.
    pub fn height(&self) -> usize {
        Self::height_of(&self.root)
    }

    fn height_of(link: &Link) -> usize {
        link.as_ref().map_or(0, |node| {
            1 + Self::height_of(&node.left).max(Self::height_of(&node.right))
        })
    }

    /// Inserts `value`
    ///
    /// # Errors
    /// Returns [`CollectionError::Duplicate`] if `value` is already stored.
    pub fn insert(&mut self, value: Element) -> Result<()> {
        Self::insert_into(&mut self.root, value)?;
        self.len += 1;
        Ok(())
    }

    fn insert_into(link: &mut Link, value: Element) -> Result<()> {
        match link {
            None => {
                *link = Some(Node::leaf(value));
                Ok(())
            }
            Some(node) => match value.cmp(&node.value) {
                Ordering::Less => Self::insert_into(&mut node.left, value),
                Ordering::Greater => Self::insert_into(&mut node.right, value),
                Ordering::Equal => Err(CollectionError::Duplicate(value)),
            },
        }
    }

    /// Removes `value`
    ///
    /// # Errors
    /// Returns [`CollectionError::NotFound`] if `value` is not stored.
    pub fn remove(&mut self, value: Element) -> Result<()> {
        if !Self::remove_from(&mut self.root, value) {
            return Err(CollectionError::NotFound(value));
        }
        self.len -= 1;
        Ok(())
    }

    fn remove_from(link: &mut Link, value: Element) -> bool {
        let Some(node) = link else {
            return false;
        };
        match value.cmp(&node.value) {
            Ordering::Less => Self::remove_from(&mut node.left, value),
            Ordering::Greater => Self::remove_from(&mut node.right, value),
            Ordering::Equal => {
                if node.left.is_some() && node.right.is_some() {
                    if let Some(successor) = Self::take_min(&mut node.right) {
                        node.value = successor;
                    }
                } else {
                    let child = node.left.take().or_else(|| node.right.take());
                    *link = child;
                }
                true
            }
        }
    }

    /// Detaches the leftmost node below `link` and returns its value
    fn take_min(link: &mut Link) -> Option<Element> {
        let node = link.as_mut()?;
        if node.left.is_some() {
            return Self::take_min(&mut node.left);
        }
        let node = link.take()?;
        *link = node.right;
        Some(node.value)
    }

    /// Returns true if `value` is stored
    pub fn contains(&self, value: Element) -> bool {
        let mut cursor = &self.root;
        while let Some(node) = cursor {
            cursor = match value.cmp(&node.value) {
                Ordering::Less => &node.left,
                Ordering::Greater => &node.right,
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Returns the smallest value
    pub fn min(&self) -> Option<Element> {
        let mut node = self.root.as_ref()?;
        while let Some(left) = &node.left {
            node = left;
        }
        Some(node.value)
    }

    /// Returns the largest value
    pub fn max(&self) -> Option<Element> {
        let mut node = self.root.as_ref()?;
        while let Some(right) = &node.right {
            node = right;
        }
        Some(node.value)
    }

    /// Values in node, left, right order
    pub fn pre_order(&self) -> Vec<Element> {
        fn walk(link: &Link, out: &mut Vec<Element>) {
            if let Some(node) = link {
                out.push(node.value);
                walk(&node.left, out);
                walk(&node.right, out);
            }
        }
        let mut out = Vec::with_capacity(self.len);
        walk(&self.root, &mut out);
        out
    }

    /// Values in left, node, right order, which is ascending
    pub fn in_order(&self) -> Vec<Element> {
        fn walk(link: &Link, out: &mut Vec<Element>) {
            if let Some(node) = link {
                walk(&node.left, out);
                out.push(node.value);
                walk(&node.right, out);
            }
        }
        let mut out = Vec::with_capacity(self.len);
        walk(&self.root, &mut out);
        out
    }

    /// Values in left, right, node order
    pub fn post_order(&self) -> Vec<Element> {
        fn walk(link: &Link, out: &mut Vec<Element>) {
            if let Some(node) = link {
                walk(&node.left, out);
                walk(&node.right, out);
                out.push(node.value);
            }
        }
        let mut out = Vec::with_capacity(self.len);
        walk(&self.root, &mut out);
        out
    }

    /// Values level by level from the root, left to right within a level
    pub fn level_order(&self) -> Vec<Element> {
        let mut out = Vec::with_capacity(self.len);
        let mut explore: VecDeque<&Node> = self.root.as_deref().into_iter().collect();
        while let Some(node) = explore.pop_front() {
            out.push(node.value);
            explore.extend(node.left.as_deref());
            explore.extend(node.right.as_deref());
        }
        out
    }
}

impl Collection for BinarySearchTree {
    fn len(&self) -> usize {
        self.len()
    }

    fn contains(&self, value: Element) -> bool {
        self.contains(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    //        8
    //      /   \
    //     3     10
    //    / \      \
    //   1   6      14
    //      / \    /
    //     4   7  13
    fn sample() -> BinarySearchTree {
        let mut tree = BinarySearchTree::new();
        for v in [8, 3, 10, 1, 6, 14, 4, 7, 13] {
            tree.insert(v).unwrap();
        }
        tree
    }

    #[test]
    fn test_insert() {
        let mut tree = sample();
        assert_eq!(tree.len(), 9);
        assert_eq!(tree.total_degree(), Ok(8));
        assert_eq!(tree.height(), 4);
        assert_eq!(tree.insert(6), Err(CollectionError::Duplicate(6)));
        assert_eq!(tree.len(), 9);
    }

    #[test]
    fn test_empty_tree() {
        let mut tree = BinarySearchTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.total_degree(), Err(CollectionError::EmptyCollection));
        assert_eq!(tree.min(), None);
        assert_eq!(tree.remove(1), Err(CollectionError::NotFound(1)));
        assert!(tree.level_order().is_empty());
    }

    #[test]
    fn test_contains() {
        let tree = sample();
        for v in [8, 3, 10, 1, 6, 14, 4, 7, 13] {
            assert!(tree.contains(v));
        }
        assert!(!tree.contains(5));
        assert!(!tree.contains(100));
        assert_eq!(tree.min(), Some(1));
        assert_eq!(tree.max(), Some(14));
    }

    #[test]
    fn test_traversals() {
        let tree = sample();
        assert_eq!(tree.pre_order(), vec![8, 3, 1, 6, 4, 7, 10, 14, 13]);
        assert_eq!(tree.in_order(), vec![1, 3, 4, 6, 7, 8, 10, 13, 14]);
        assert_eq!(tree.post_order(), vec![1, 4, 7, 6, 3, 13, 14, 10, 8]);
        assert_eq!(tree.level_order(), vec![8, 3, 10, 1, 6, 14, 4, 7, 13]);
    }

    #[test]
    fn test_remove_leaf() {
        let mut tree = sample();
        tree.remove(13).unwrap();
        assert_eq!(tree.in_order(), vec![1, 3, 4, 6, 7, 8, 10, 14]);
        assert_eq!(tree.len(), 8);
    }

    #[test]
    fn test_remove_single_child() {
        let mut tree = sample();
        tree.remove(10).unwrap();
        assert_eq!(tree.pre_order(), vec![8, 3, 1, 6, 4, 7, 14, 13]);
    }

    #[test]
    fn test_remove_two_children_uses_successor() {
        let mut tree = sample();
        tree.remove(3).unwrap();
        assert_eq!(tree.pre_order(), vec![8, 4, 1, 6, 7, 10, 14, 13]);

        tree.remove(8).unwrap();
        assert_eq!(tree.pre_order(), vec![10, 4, 1, 6, 7, 14, 13]);
        assert_eq!(tree.in_order(), vec![1, 4, 6, 7, 10, 13, 14]);
    }

    #[test]
    fn test_remove_everything() {
        let mut tree = sample();
        for v in [8, 3, 10, 1, 6, 14, 4, 7, 13] {
            tree.remove(v).unwrap();
            assert!(!tree.contains(v));
        }
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.remove(8), Err(CollectionError::NotFound(8)));
    }
}
