//! Stack Error Handling
//!
//! Contract violations are reported as values instead of panics, so callers
//! can tell "the stack was empty" apart from "the top happened to hold a
//! default value".
//!
//! # Usage
//!
//! ```
//! use linked_stack::{Stack, StackError};
//!
//! let mut stack: Stack<i32> = Stack::new();
//! assert_eq!(stack.top(), Err(StackError::EmptyContainer));
//! ```

use thiserror::Error;

/// Errors returned by [`Stack`](crate::Stack) and its iteration sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StackError {
    /// `top`, `pop`, `peek` or `peek_mut` was called on a stack with no elements.
    #[error("empty stack")]
    EmptyContainer,

    /// An iteration session was advanced past its last element.
    #[error("iteration exhausted")]
    IterationExhausted,
}
