//! LIFO stack backed by a `Vec`
//!
//! Only the top is reachable for mutation. `contains` scans the whole stack.

use crate::config::ShrinkPolicy;
use crate::traits::{Collection, CollectionError, Result};
use crate::Element;

/// A last-in first-out stack of [`Element`]s
///
/// # Example
///
/// ```rust
/// use classic_adts::stack::Stack;
///
/// let mut stack = Stack::new();
/// stack.push(1);
/// stack.push(2);
/// assert_eq!(stack.peek(), Ok(2));
/// assert_eq!(stack.pop(), Ok(2));
/// assert_eq!(stack.pop(), Ok(1));
/// assert!(stack.pop().is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Stack {
    data: Vec<Element>,
    policy: ShrinkPolicy,
}

impl Stack {
    /// Creates a new empty stack
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new empty stack that releases storage according to `policy`
    pub fn with_policy(policy: ShrinkPolicy) -> Self {
        Self {
            data: Vec::new(),
            policy,
        }
    }

    /// Returns the number of elements on the stack
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the stack is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Pushes `value` on top of the stack
    ///
    /// # Time Complexity
    /// O(1) amortized
    pub fn push(&mut self, value: Element) {
        self.data.push(value);
    }

    /// Removes and returns the top of the stack
    ///
    /// # Errors
    /// Returns [`CollectionError::EmptyCollection`] if the stack is empty.
    pub fn pop(&mut self) -> Result<Element> {
        let top = self.data.pop().ok_or(CollectionError::EmptyCollection)?;
        self.policy.apply(&mut self.data);
        Ok(top)
    }

    /// Returns the top of the stack without removing it
    ///
    /// # Errors
    /// Returns [`CollectionError::EmptyCollection`] if the stack is empty.
    pub fn peek(&self) -> Result<Element> {
        self.data
            .last()
            .copied()
            .ok_or(CollectionError::EmptyCollection)
    }

    /// Returns true if some element equals `value`
    pub fn contains(&self, value: Element) -> bool {
        self.data.contains(&value)
    }

    /// Iterates from the top of the stack to the bottom
    pub fn iter(&self) -> std::iter::Rev<std::slice::Iter<'_, Element>> {
        self.data.iter().rev()
    }

    /// Removes every element
    pub fn clear(&mut self) {
        self.data.clear();
        self.policy.apply(&mut self.data);
    }
}

impl Collection for Stack {
    fn len(&self) -> usize {
        self.len()
    }

    fn contains(&self, value: Element) -> bool {
        self.contains(value)
    }
}

impl Extend<Element> for Stack {
    fn extend<I: IntoIterator<Item = Element>>(&mut self, iter: I) {
        self.data.extend(iter);
    }
}

impl FromIterator<Element> for Stack {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}
