//! Nullable element wrapper
//!
//! Rust generics cannot hold an absent value, so a stack that needs one stores
//! `Nullable<T>` elements. The wrapper fixes the rules for the absent value:
//!
//! - Equality: null equals only null
//! - Hash: null hashes like `0u64`
//! - Display/Debug: null renders as `null`
//!
//! ```
//! use linked_stack::{Nullable, Stack};
//!
//! let mut stack = Stack::new();
//! stack.push(Nullable::null());
//! stack.push(Nullable::new(5));
//! assert_eq!(stack.to_string(), "Stack: [5, null]");
//! assert!(stack.contains(&Nullable::null()));
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

/// A stack element that may be the absent (null) value
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Nullable<T>(Option<T>);

impl<T> Nullable<T> {
    /// The absent value
    pub const fn null() -> Self {
        Nullable(None)
    }

    pub const fn new(value: T) -> Self {
        Nullable(Some(value))
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        self.0.is_none()
    }

    pub fn as_option(&self) -> Option<&T> {
        self.0.as_ref()
    }

    pub fn into_option(self) -> Option<T> {
        self.0
    }
}

impl<T> Default for Nullable<T> {
    fn default() -> Self {
        Nullable::null()
    }
}

impl<T> From<Option<T>> for Nullable<T> {
    fn from(value: Option<T>) -> Self {
        Nullable(value)
    }
}

impl<T> From<Nullable<T>> for Option<T> {
    fn from(value: Nullable<T>) -> Self {
        value.0
    }
}

impl<T: Hash> Hash for Nullable<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match &self.0 {
            Some(value) => value.hash(state),
            None => 0u64.hash(state),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Nullable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => value.fmt(f),
            None => f.write_str("null"),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Nullable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => value.fmt(f),
            None => f.write_str("null"),
        }
    }
}
