//! Singly linked list
//!
//! Nodes are kept in an arena and each one owns a single `next` link. The list
//! tracks both ends, so insertion at either end is O(1). Removing the tail has
//! to walk from the head to find the new tail, which makes it O(n).
//!
//! # Time Complexity
//!
//! | Operation                 | Complexity |
//! |---------------------------|------------|
//! | `insert_from_head`        | O(1)       |
//! | `insert_from_tail`        | O(1)       |
//! | `remove_from_head`        | O(1)       |
//! | `remove_from_tail`        | O(n)       |
//! | `contains`                | O(n)       |
//! | `remove_first_occurrence` | O(n)       |

use std::fmt;

use crate::storage::{NodeArena, NodeKey};
use crate::traits::{Collection, CollectionError, Result};
use crate::Element;

#[derive(Debug, Clone)]
struct Node {
    value: Element,
    next: Option<NodeKey>,
}

/// A singly linked list of [`Element`]s
///
/// # Example
///
/// ```rust
/// use classic_adts::linked_list::LinkedList;
///
/// let mut list = LinkedList::new();
/// list.insert_from_tail(2);
/// list.insert_from_head(1);
/// list.insert_from_tail(3);
/// assert_eq!(list.to_string(), "[ 1, 2, 3 ]");
///
/// list.remove_first_occurrence(2).unwrap();
/// assert_eq!(list.remove_from_tail(), Ok(3));
/// assert_eq!(list.remove_from_head(), Ok(1));
/// assert!(list.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct LinkedList {
    nodes: NodeArena<Node>,
    head: Option<NodeKey>,
    tail: Option<NodeKey>,
}

impl LinkedList {
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
            next: self.head,
        });
        if self.tail.is_none() {
            self.tail = Some(key);
        }
        self.head = Some(key);
    }

    /// Adds `value` at the end of the list
    pub fn insert_from_tail(&mut self, value: Element) {
        let key = self.nodes.insert(Node { value, next: None });
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
        let node = self.nodes.take(head);
        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        Ok(node.value)
    }

    /// Removes the last node and returns its value
    ///
    /// # Errors
    /// Returns [`CollectionError::EmptyCollection`] if the list is empty.
    pub fn remove_from_tail(&mut self) -> Result<Element> {
        let tail = self.tail.ok_or(CollectionError::EmptyCollection)?;
        let before_tail = self.predecessor(tail);
        Ok(self.unlink(before_tail, tail))
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
        let mut prev = None;
        let mut cursor = self.head;
        while let Some(key) = cursor {
            if self.nodes[key].value == value {
                self.unlink(prev, key);
                return Ok(());
            }
            prev = Some(key);
            cursor = self.nodes[key].next;
        }
        Err(CollectionError::NotFound(value))
    }

    /// Iterates from head to tail
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            nodes: &self.nodes,
            next: self.head,
            remaining: self.len(),
        }
    }

    /// Finds the node whose `next` link is `target`
    fn predecessor(&self, target: NodeKey) -> Option<NodeKey> {
        let mut cursor = self.head;
        while let Some(key) = cursor {
            let next = self.nodes[key].next;
            if next == Some(target) {
                return Some(key);
            }
            cursor = next;
        }
        None
    }

    /// Detaches `key`, whose predecessor is `prev`, and returns its value
    fn unlink(&mut self, prev: Option<NodeKey>, key: NodeKey) -> Element {
        let node = self.nodes.take(key);
        match prev {
            Some(prev) => self.nodes[prev].next = node.next,
            None => self.head = node.next,
        }
        if self.tail == Some(key) {
            self.tail = prev;
        }
        node.value
    }
}

/// Iterator over the values of a [`LinkedList`], head first
pub struct Iter<'a> {
    nodes: &'a NodeArena<Node>,
    next: Option<NodeKey>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.get(self.next?)?;
        self.next = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a LinkedList {
    type Item = &'a Element;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Collection for LinkedList {
    fn len(&self) -> usize {
        self.len()
    }

    fn contains(&self, value: Element) -> bool {
        self.contains(value)
    }
}

impl Extend<Element> for LinkedList {
    fn extend<I: IntoIterator<Item = Element>>(&mut self, iter: I) {
        for value in iter {
            self.insert_from_tail(value);
        }
    }
}

impl FromIterator<Element> for LinkedList {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

/// Formats values separated by `", "` between `"[ "` and `" ]"`
pub(crate) fn write_list<'a, I>(f: &mut fmt::Formatter<'_>, values: I) -> fmt::Result
where
    I: IntoIterator<Item = &'a Element>,
{
    write!(f, "[ ")?;
    for (i, value) in values.into_iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", value)?;
    }
    write!(f, " ]")
}

impl fmt::Display for LinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, self)
    }
}
