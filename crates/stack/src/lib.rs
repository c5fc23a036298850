//! linked-stack: a generic LIFO stack backed by a singly linked list
//!
//! Push, pop, peek, size, iteration, equality, hashing, cloning, in-place
//! reversal and bulk drain over exclusively owned nodes.
//!
//! Key design principles:
//! - Node: one element plus an owning link to the node below it
//! - Stack: owns the top node and a count that always matches the chain length
//! - Nullable: explicit wrapper for stacks that must hold an absent value
//!
//! # Modules
//!
//! - `error`: `StackError` for empty stacks and exhausted iteration sessions
//! - `stack`: the container and its operations
//! - `iter`: borrowing and owning iterators
//! - `nullable`: the null sentinel wrapper
//! - `serde_impl`: sequence (de)serialization, behind the `serde` feature
//!
//! # Example
//!
//! ```
//! use linked_stack::{Stack, StackError};
//!
//! let mut stack = Stack::new();
//! stack.push(1);
//! stack.push(2);
//! stack.push(3);
//!
//! assert_eq!(stack.to_string(), "Stack: [3, 2, 1]");
//! assert_eq!(stack.peek(), Ok(&3));
//! assert_eq!(stack.top(), Ok(3));
//!
//! stack.reverse();
//! assert_eq!(stack.to_vec(), vec![1, 2]);
//!
//! let mut drained = Vec::new();
//! stack.pop_all(|x| drained.push(x));
//! assert_eq!(drained, vec![1, 2]);
//! assert_eq!(stack.peek(), Err(StackError::EmptyContainer));
//! ```

pub mod error;
pub mod iter;
pub mod nullable;
#[cfg(feature = "serde")]
mod serde_impl;
pub mod stack;

pub use error::StackError;
pub use iter::{IntoIter, Iter};
pub use nullable::Nullable;
pub use stack::Stack;
