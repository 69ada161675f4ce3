#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod ledger;
pub mod operation;
#[cfg(any(test, feature = "proptest"))]
pub mod proptest;
pub mod shell;
pub mod stack;

pub use ledger::ExtremaLedger;
pub use operation::Operation;
pub use stack::{EmptyStackError, ExtremaStack, MinMaxStack, NaiveMinMaxStack};
