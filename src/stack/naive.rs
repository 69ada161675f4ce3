//! A reference stack that scans its elements for every extremum query.

use itertools::{Itertools, MinMaxResult};

use super::{EmptyStackError, ExtremaStack};
use crate::Operation;

/// A min-max stack without auxiliary structure.
///
/// Minimum and maximum queries are O(n). Use [`MinMaxStack`] instead; this
/// type exists as a baseline for benchmarks and as an oracle in tests.
///
/// [`MinMaxStack`]: crate::MinMaxStack
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NaiveMinMaxStack<T> {
    elements: Vec<T>,
}

impl<T> Default for NaiveMinMaxStack<T> {
    fn default() -> Self {
        Self {
            elements: Vec::new(),
        }
    }
}

impl<T> NaiveMinMaxStack<T> {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterate over the elements, from the bottom of the stack to the top.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.elements.iter()
    }
}

impl<T: Ord> NaiveMinMaxStack<T> {
    /// The smallest and the largest elements, found in a single scan.
    pub fn min_max(&self) -> Option<(&T, &T)> {
        match self.elements.iter().minmax() {
            MinMaxResult::NoElements => None,
            MinMaxResult::OneElement(v) => Some((v, v)),
            MinMaxResult::MinMax(min, max) => Some((min, max)),
        }
    }
}

impl<T: Ord> ExtremaStack<T> for NaiveMinMaxStack<T> {
    fn push(&mut self, value: T) {
        self.elements.push(value);
    }

    fn pop(&mut self) -> Result<T, EmptyStackError> {
        self.elements
            .pop()
            .ok_or(EmptyStackError::new(Operation::Pop))
    }

    fn top(&self) -> Result<&T, EmptyStackError> {
        self.elements
            .last()
            .ok_or(EmptyStackError::new(Operation::Top))
    }

    fn min(&self) -> Result<&T, EmptyStackError> {
        self.elements
            .iter()
            .min()
            .ok_or(EmptyStackError::new(Operation::Min))
    }

    fn max(&self) -> Result<&T, EmptyStackError> {
        self.elements
            .iter()
            .max()
            .ok_or(EmptyStackError::new(Operation::Max))
    }

    fn len(&self) -> usize {
        self.elements.len()
    }
}

impl<T> FromIterator<T> for NaiveMinMaxStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_max_scan() {
        let stack: NaiveMinMaxStack<i32> = [5, 2, 7, 2, 9].into_iter().collect();
        assert_eq!(stack.min_max(), Some((&2, &9)));
        assert_eq!(stack.iter().count(), 5);
        assert_eq!(NaiveMinMaxStack::<i32>::new().min_max(), None);
        let single: NaiveMinMaxStack<i32> = [4].into_iter().collect();
        assert_eq!(single.min_max(), Some((&4, &4)));
    }
}
