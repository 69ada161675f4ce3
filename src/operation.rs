//! The operations exposed by a min-max stack.

use derive_more::Display;

/// One of the five stack operations.
///
/// The display form matches the labels shown to users of the interactive
/// shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum Operation {
    /// Append an element to the top of the stack.
    #[display(fmt = "push")]
    Push,
    /// Remove and return the top element.
    #[display(fmt = "pop")]
    Pop,
    /// Read the top element.
    #[display(fmt = "top")]
    Top,
    /// Read the smallest element.
    #[display(fmt = "getMin")]
    Min,
    /// Read the largest element.
    #[display(fmt = "getMax")]
    Max,
}

impl Operation {
    /// All operations, in menu order.
    pub const ALL: [Operation; 5] = [
        Operation::Push,
        Operation::Pop,
        Operation::Top,
        Operation::Min,
        Operation::Max,
    ];

    /// Whether the operation leaves the stack unchanged.
    pub fn is_read_only(self) -> bool {
        matches!(self, Operation::Top | Operation::Min | Operation::Max)
    }
}
