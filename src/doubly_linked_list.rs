//! Doubly linked list
//!
//! Every node links to both neighbours, so the list can be walked in either
//! direction and both ends can be removed in O(1). Nodes live in an arena and
//! the `prev`/`next` links are arena keys, which gives back-references without
//! shared ownership.
//!
//! # Time Complexity
//!
//! | Operation                 | Complexity |
//! |---------------------------|------------|
//! | `insert_from_head`        | O(1)       |
//! | `insert_from_tail`        | O(1)       |
//! | `remove_from_head`        | O(1)       |
//! | `remove_from_tail`        | O(1)       |
//! | `contains`                | O(n)       |
//! | `remove_first_occurrence` | O(n)       |

use std::fmt;

use crate::linked_list::write_list;
use crate::storage::{NodeArena, NodeKey};
use crate::traits::{Collection, CollectionError, Result};
use crate::Element;

#[derive(Debug, Clone)]
struct Node {
    value: Element,
    prev: Option<NodeKey>,
    next: Option<NodeKey>,
}

/// A doubly linked list of [`Element`]s
///
/// # Example
///
/// ```rust
/// use classic_adts::doubly_linked_list::DoublyLinkedList;
///
/// let mut list: DoublyLinkedList = (1..=4).collect();
/// assert_eq!(list.iter().rev().copied().collect::<Vec<_>>(), vec![4, 3, 2, 1]);
///
/// assert_eq!(list.remove_from_tail(), Ok(4));
/// assert_eq!(list.remove_from_head(), Ok(1));
/// assert_eq!(list.to_string(), "[ 2, 3 ]");
/// ```
#[derive(Debug, Clone, Default)]
pub struct DoublyLinkedList {
    nodes: NodeArena<Node>,
    head: Option<NodeKey>,
    tail: Option<NodeKey>,
}

impl DoublyLinkedList {
    /// Creates a new empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the list has no nodes
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the value at the front of the list
    pub fn head(&self) -> Option<Element> {
        self.head.map(|key| self.nodes[key].value)
    }

    /// Returns the value at the end of the list
    pub fn tail(&self) -> Option<Element> {
        self.tail.map(|key| self.nodes[key].value)
    }

    /// Removes every node
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
    }

    /// Adds `value` in front of the list
    pub fn insert_from_head(&mut self, value: Element) {
        let key = self.nodes.insert(Node {
            value,
            prev: None,
            next: self.head,
        });
        match self.head {
            Some(head) => self.nodes[head].prev = Some(key),
            None => self.tail = Some(key),
        }
        self.head = Some(key);
    }

    /// Adds `value` at the end of the list
    pub fn insert_from_tail(&mut self, value: Element) {
        let key = self.nodes.insert(Node {
            value,
            prev: self.tail,
            next: None,
        });
        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(key),
            None => self.head = Some(key),
        }
        self.tail = Some(key);
    }

    /// Removes the front node and returns its value
    ///
    /// # Errors
    /// Returns [`CollectionError::EmptyCollection`] if the list is empty.
    pub fn remove_from_head(&mut self) -> Result<Element> {
        let head = self.head.ok_or(CollectionError::EmptyCollection)?;
        Ok(self.unlink(head))
    }

    /// Removes the last node and returns its value
    ///
    /// # Errors
    /// Returns [`CollectionError::EmptyCollection`] if the list is empty.
    pub fn remove_from_tail(&mut self) -> Result<Element> {
        let tail = self.tail.ok_or(CollectionError::EmptyCollection)?;
        Ok(self.unlink(tail))
    }

    /// Returns true if some node holds `value`
    pub fn contains(&self, value: Element) -> bool {
        self.iter().any(|&v| v == value)
    }

    /// Removes the node closest to the head that holds `value`
    ///
    /// # Errors
    /// Returns [`CollectionError::NotFound`] if no node holds `value`.
    pub fn remove_first_occurrence(&mut self, value: Element) -> Result<()> {
        let mut cursor = self.head;
        while let Some(key) = cursor {
            let node = &self.nodes[key];
            if node.value == value {
                self.unlink(key);
                return Ok(());
            }
            cursor = node.next;
        }
        Err(CollectionError::NotFound(value))
    }

    /// Iterates from head to tail; use `.rev()` to walk tail to head
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            nodes: &self.nodes,
            front: self.head,
            back: self.tail,
            remaining: self.len(),
        }
    }

    /// Detaches `key` from its neighbours and returns its value
    fn unlink(&mut self, key: NodeKey) -> Element {
        let node = self.nodes.take(key);
        match node.prev {
            Some(prev) => self.nodes[prev].next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => self.nodes[next].prev = node.prev,
            None => self.tail = node.prev,
        }
        node.value
    }
}

/// Double-ended iterator over the values of a [`DoublyLinkedList`]
pub struct Iter<'a> {
    nodes: &'a NodeArena<Node>,
    front: Option<NodeKey>,
    back: Option<NodeKey>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.nodes.get(self.front?)?;
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.nodes.get(self.back?)?;
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a DoublyLinkedList {
    type Item = &'a Element;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Collection for DoublyLinkedList {
    fn len(&self) -> usize {
        self.len()
    }

    fn contains(&self, value: Element) -> bool {
        self.contains(value)
    }
}

impl Extend<Element> for DoublyLinkedList {
    fn extend<I: IntoIterator<Item = Element>>(&mut self, iter: I) {
        for value in iter {
            self.insert_from_tail(value);
        }
    }
}

impl FromIterator<Element> for DoublyLinkedList {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl fmt::Display for DoublyLinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, self)
    }
}
