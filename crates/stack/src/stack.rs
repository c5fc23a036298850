//! Linked Stack Implementation
//!
//! A LIFO container built from exclusively owned, singly linked nodes.
//!
//! ## Layout
//!
//! ```text
//! Stack { head, len = 3 }
//!    │
//!    ▼
//! ┌────────┬──────┐   ┌────────┬──────┐   ┌────────┬──────┐
//! │ elem 3 │ next ├──▶│ elem 2 │ next ├──▶│ elem 1 │ None │
//! └────────┴──────┘   └────────┴──────┘   └────────┴──────┘
//!    top                                     bottom
//!
//! - Push: new node linked in front of head
//! - Pop: head advances to head.next
//! - len always equals the number of nodes reachable from head
//! ```
//!
//! ## Teardown
//!
//! A `Box` chain dropped naively recurses once per node. `clear` and `Drop`
//! unlink nodes one at a time instead, so arbitrarily long stacks release in
//! constant call-stack space.

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

use tracing::{debug, trace};

use crate::error::StackError;
use crate::iter::{IntoIter, Iter};

pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// One link in the chain. Owned by its predecessor, or by the stack for the top node.
pub(crate) struct Node<T> {
    pub(crate) elem: T,
    pub(crate) next: Link<T>,
}

/// Generic LIFO stack backed by a singly linked list.
///
/// Elements are yielded top to bottom everywhere order is observable:
/// iteration, [`to_vec`](Stack::to_vec), `Display`, `Debug`, equality and hashing.
pub struct Stack<T> {
    head: Link<T>,
    len: usize,
}

impl<T> Stack<T> {
    /// Create an empty stack
    pub const fn new() -> Self {
        Stack { head: None, len: 0 }
    }

    /// Build a stack whose top-to-bottom order is the iteration order of `items`.
    ///
    /// Nodes are appended at the tail, so no intermediate reversal is needed.
    pub(crate) fn from_top_down<I: IntoIterator<Item = T>>(items: I) -> Self {
        let mut stack = Stack::new();
        let mut len = 0;
        let mut tail = &mut stack.head;
        for elem in items {
            let node = tail.insert(Box::new(Node { elem, next: None }));
            tail = &mut node.next;
            len += 1;
        }
        stack.len = len;
        stack
    }

    /// Push an item onto the top of the stack
    #[inline]
    pub fn push(&mut self, item: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { elem: item, next }));
        self.len += 1;
    }

    /// Remove and return the top item
    ///
    /// Returns `EmptyContainer` if the stack has no elements.
    pub fn pop(&mut self) -> Result<T, StackError> {
        match self.take_top() {
            Some(elem) => Ok(elem),
            None => {
                debug!("pop on empty stack");
                Err(StackError::EmptyContainer)
            }
        }
    }

    /// Remove and return the top item.
    ///
    /// Same operation as [`pop`](Stack::pop): `top` mutates the stack.
    #[inline]
    pub fn top(&mut self) -> Result<T, StackError> {
        self.pop()
    }

    /// Unlink the head node without logging. Used by the drain paths.
    pub(crate) fn take_top(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let Node { elem, next } = *node;
            self.head = next;
            self.len -= 1;
            elem
        })
    }

    /// Borrow the top item without removing it
    pub fn peek(&self) -> Result<&T, StackError> {
        match self.head.as_deref() {
            Some(node) => Ok(&node.elem),
            None => {
                debug!("peek on empty stack");
                Err(StackError::EmptyContainer)
            }
        }
    }

    /// Mutably borrow the top item without removing it
    pub fn peek_mut(&mut self) -> Result<&mut T, StackError> {
        match self.head.as_deref_mut() {
            Some(node) => Ok(&mut node.elem),
            None => {
                debug!("peek_mut on empty stack");
                Err(StackError::EmptyContainer)
            }
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of elements on the stack
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Alias for [`len`](Stack::len)
    #[inline]
    pub fn size(&self) -> usize {
        self.len
    }

    /// Remove every element, releasing nodes one at a time
    pub fn clear(&mut self) {
        let released = self.len;
        release_chain(self.head.take());
        self.len = 0;
        trace!(released, "stack cleared");
    }

    /// Linear scan from top to bottom for an element equal to `item`
    ///
    /// Use [`Nullable`](crate::Nullable) elements to search for the absent value:
    /// a null query matches only null elements.
    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|elem| elem == item)
    }

    /// Pop every element, applying `action` to each in top-to-bottom order
    ///
    /// The stack is empty afterwards.
    pub fn pop_all<F>(&mut self, mut action: F)
    where
        F: FnMut(T),
    {
        let Ok(()) = self.try_pop_all(|elem| {
            action(elem);
            Ok::<(), std::convert::Infallible>(())
        });
    }

    /// Pop every element through a fallible `action`
    ///
    /// The first error is returned immediately. Elements below the one that
    /// failed stay on the stack; the failing element itself has been consumed.
    pub fn try_pop_all<E, F>(&mut self, mut action: F) -> Result<(), E>
    where
        F: FnMut(T) -> Result<(), E>,
    {
        let mut drained: usize = 0;
        while let Some(elem) = self.take_top() {
            drained += 1;
            if let Err(err) = action(elem) {
                debug!(drained, remaining = self.len, "pop_all action failed");
                return Err(err);
            }
        }
        trace!(drained, "stack drained");
        Ok(())
    }

    /// Copy the elements into a vector, top first
    ///
    /// The stack is left untouched and the vector length equals [`len`](Stack::len).
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut out = Vec::with_capacity(self.len);
        out.extend(self.iter().cloned());
        out
    }

    /// Reverse the stack in place by relinking its nodes
    ///
    /// No nodes are allocated; the old bottom becomes the new top.
    pub fn reverse(&mut self) {
        let mut prev: Link<T> = None;
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
            node.next = prev;
            prev = Some(node);
        }
        self.head = prev;
        trace!(len = self.len, "stack reversed");
    }

    /// Order-sensitive hash: `h = h * 31 + hash(elem)` folded from `h = 1`
    ///
    /// Element hashes come from `DefaultHasher::new()`, so values are stable
    /// within one build of the program but not across Rust releases.
    /// Equal stacks always produce equal hash codes.
    pub fn hash_code(&self) -> u64
    where
        T: Hash,
    {
        self.iter().fold(1u64, |acc, elem| {
            let mut hasher = DefaultHasher::new();
            elem.hash(&mut hasher);
            acc.wrapping_mul(31).wrapping_add(hasher.finish())
        })
    }

    /// Start a new iteration session from the current top
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.head.as_deref(), self.len)
    }
}

fn release_chain<T>(mut link: Link<T>) {
    while let Some(mut node) = link {
        link = node.next.take();
    }
}

impl<T> Drop for Stack<T> {
    fn drop(&mut self) {
        release_chain(self.head.take());
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Stack::new()
    }
}

impl<T: Clone> Clone for Stack<T> {
    /// Fresh nodes in the same top-to-bottom order; element values are cloned.
    fn clone(&self) -> Self {
        Stack::from_top_down(self.iter().cloned())
    }
}

impl<T: PartialEq> PartialEq for Stack<T> {
    fn eq(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Stack<T> {}

impl<T: Hash> Hash for Stack<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len);
        for elem in self.iter() {
            elem.hash(state);
        }
    }
}

impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Stack: [")?;
        for (i, elem) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", elem)?;
        }
        f.write_str("]")
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for Stack<T> {
    /// Pushes in iteration order; the last item ends up on top.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Stack::new();
        stack.extend(iter);
        stack
    }
}

impl<T> From<Vec<T>> for Stack<T> {
    /// The vector is read bottom to top: its last element becomes the top.
    fn from(items: Vec<T>) -> Self {
        items.into_iter().collect()
    }
}

impl<T> IntoIterator for Stack<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

// =============================================================================
// Tests
// =============================================================================
