//! Stacks with minimum and maximum queries.
//!
//! The [`ExtremaStack`] trait is the interface shared by all stacks in this
//! crate. The following implementations are provided:
//!  - [`MinMaxStack`], answering every query in O(1) by maintaining an
//!    [`ExtremaLedger`](crate::ExtremaLedger) next to its elements. The main
//!    stack implementation of this crate.
//!  - [`NaiveMinMaxStack`], scanning all elements on every minimum or maximum
//!    query. Mostly useful as a benchmark and for testing.

mod min_max;
mod naive;

use thiserror::Error;

pub use self::min_max::MinMaxStack;
pub use self::naive::NaiveMinMaxStack;
use crate::Operation;

/// A LIFO stack that can report its smallest and largest elements.
pub trait ExtremaStack<T> {
    /// Push `value` on top of the stack.
    fn push(&mut self, value: T);

    /// Remove and return the top element.
    fn pop(&mut self) -> Result<T, EmptyStackError>;

    /// The top element.
    fn top(&self) -> Result<&T, EmptyStackError>;

    /// The smallest element currently on the stack.
    fn min(&self) -> Result<&T, EmptyStackError>;

    /// The largest element currently on the stack.
    fn max(&self) -> Result<&T, EmptyStackError>;

    /// The number of elements on the stack.
    fn len(&self) -> usize;

    /// Whether the stack holds no element.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A stack operation was attempted on an empty stack.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("{}", empty_message(.operation))]
pub struct EmptyStackError {
    operation: Operation,
}

impl EmptyStackError {
    /// Create an error for `operation`.
    pub fn new(operation: Operation) -> Self {
        Self { operation }
    }

    /// The operation that failed.
    pub fn operation(&self) -> Operation {
        self.operation
    }
}

fn empty_message(operation: &Operation) -> &'static str {
    match operation {
        Operation::Pop => "Pop from an empty stack",
        Operation::Top => "Top from an empty stack",
        Operation::Push | Operation::Min | Operation::Max => "Stack is empty",
    }
}
