//! FIFO queue built on [`DoublyLinkedList`]
//!
//! New elements enter at the list head and leave from the list tail, so both
//! `enqueue` and `dequeue` are O(1).

use crate::doubly_linked_list::{self, DoublyLinkedList};
use crate::traits::{Collection, CollectionError, Result};
use crate::Element;

/// A first-in first-out queue of [`Element`]s
///
/// # Example
///
/// ```rust
/// use classic_adts::queue::Queue;
///
/// let mut queue = Queue::new();
/// queue.enqueue(1);
/// queue.enqueue(2);
/// assert_eq!(queue.peek(), Ok(1));
/// assert_eq!(queue.dequeue(), Ok(1));
/// assert_eq!(queue.dequeue(), Ok(2));
/// assert!(queue.dequeue().is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Queue {
    data: DoublyLinkedList,
}

impl Queue {
    /// Creates a new empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of queued elements
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if nothing is queued
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Adds `value` at the back of the queue
    pub fn enqueue(&mut self, value: Element) {
        self.data.insert_from_head(value);
    }

    /// Removes and returns the element at the front of the queue
    ///
    /// # Errors
    /// Returns [`CollectionError::EmptyCollection`] if the queue is empty.
    pub fn dequeue(&mut self) -> Result<Element> {
        self.data.remove_from_tail()
    }

    /// Returns the element that the next `dequeue` would return
    ///
    /// # Errors
    /// Returns [`CollectionError::EmptyCollection`] if the queue is empty.
    pub fn peek(&self) -> Result<Element> {
        self.data.tail().ok_or(CollectionError::EmptyCollection)
    }

    /// Returns true if some queued element equals `value`
    pub fn contains(&self, value: Element) -> bool {
        self.data.contains(value)
    }

    /// Removes the most recently enqueued element equal to `value`
    ///
    /// # Errors
    /// Returns [`CollectionError::NotFound`] if no element equals `value`.
    pub fn remove_first_occurrence(&mut self, value: Element) -> Result<()> {
        self.data.remove_first_occurrence(value)
    }

    /// Iterates in dequeue order, front of the queue first
    pub fn iter(&self) -> std::iter::Rev<doubly_linked_list::Iter<'_>> {
        self.data.iter().rev()
    }

    /// Removes every queued element
    pub fn clear(&mut self) {
        self.data.clear();
    }
}

impl Collection for Queue {
    fn len(&self) -> usize {
        self.len()
    }

    fn contains(&self, value: Element) -> bool {
        self.contains(value)
    }
}

impl Extend<Element> for Queue {
    fn extend<I: IntoIterator<Item = Element>>(&mut self, iter: I) {
        for value in iter {
            self.enqueue(value);
        }
    }
}

impl FromIterator<Element> for Queue {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}
