//! The constant-time min-max stack.

use std::slice;

use super::{EmptyStackError, ExtremaStack};
use crate::{ExtremaLedger, Operation};

/// A LIFO stack answering minimum and maximum queries in O(1).
///
/// Elements are kept in a vector, alongside an [`ExtremaLedger`] recording the
/// extremes seen so far and how many elements are tied at each of them. Both
/// are updated in lockstep by [`MinMaxStack::push`] and [`MinMaxStack::pop`],
/// so that `push`, `pop`, `top`, `min` and `max` are all O(1) amortized.
///
/// # Example
///
/// ```
/// use minmax_stack::MinMaxStack;
///
/// let mut stack = MinMaxStack::new();
/// stack.extend([5, 2, 7]);
/// assert_eq!(stack.min(), Ok(&2));
/// assert_eq!(stack.max(), Ok(&7));
/// assert_eq!(stack.pop(), Ok(7));
/// assert_eq!(stack.max(), Ok(&5));
/// ```
#[derive(Debug, Clone)]
pub struct MinMaxStack<T> {
    elements: Vec<T>,
    ledger: ExtremaLedger<T>,
}

impl<T> Default for MinMaxStack<T> {
    fn default() -> Self {
        Self {
            elements: Vec::new(),
            ledger: ExtremaLedger::default(),
        }
    }
}

impl<T> MinMaxStack<T> {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty stack with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
            ledger: ExtremaLedger::default(),
        }
    }

    /// The top element.
    #[doc(alias = "peek")]
    pub fn top(&self) -> Result<&T, EmptyStackError> {
        self.elements
            .last()
            .ok_or(EmptyStackError::new(Operation::Top))
    }

    /// The smallest element on the stack.
    #[doc(alias = "getMin")]
    pub fn min(&self) -> Result<&T, EmptyStackError> {
        self.ledger
            .first()
            .ok_or(EmptyStackError::new(Operation::Min))
    }

    /// The largest element on the stack.
    #[doc(alias = "getMax")]
    pub fn max(&self) -> Result<&T, EmptyStackError> {
        self.ledger
            .last()
            .ok_or(EmptyStackError::new(Operation::Max))
    }

    /// The number of elements on the stack.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Remove all elements.
    pub fn clear(&mut self) {
        self.elements.clear();
        self.ledger.clear();
    }

    /// Iterate over the elements, from the bottom of the stack to the top.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// The extremes currently tracked by the stack.
    pub fn ledger(&self) -> &ExtremaLedger<T> {
        &self.ledger
    }
}

impl<T: Ord + Clone> MinMaxStack<T> {
    /// Push `value` on top of the stack.
    pub fn push(&mut self, value: T) {
        self.ledger.record(&value);
        self.elements.push(value);
    }

    /// Remove and return the top element.
    pub fn pop(&mut self) -> Result<T, EmptyStackError> {
        let value = self
            .elements
            .pop()
            .ok_or(EmptyStackError::new(Operation::Pop))?;
        self.ledger.release(&value);
        Ok(value)
    }
}

impl<T: Ord + Clone> ExtremaStack<T> for MinMaxStack<T> {
    fn push(&mut self, value: T) {
        MinMaxStack::push(self, value)
    }

    fn pop(&mut self) -> Result<T, EmptyStackError> {
        MinMaxStack::pop(self)
    }

    fn top(&self) -> Result<&T, EmptyStackError> {
        MinMaxStack::top(self)
    }

    fn min(&self) -> Result<&T, EmptyStackError> {
        MinMaxStack::min(self)
    }

    fn max(&self) -> Result<&T, EmptyStackError> {
        MinMaxStack::max(self)
    }

    fn len(&self) -> usize {
        MinMaxStack::len(self)
    }
}

/// Stacks are equal if they hold the same elements in the same order.
impl<T: PartialEq> PartialEq for MinMaxStack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<T: Eq> Eq for MinMaxStack<T> {}

impl<T: Ord + Clone> Extend<T> for MinMaxStack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T: Ord + Clone> FromIterator<T> for MinMaxStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}

impl<'a, T> IntoIterator for &'a MinMaxStack<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
