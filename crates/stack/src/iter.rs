//! Iteration sessions over a [`Stack`]
//!
//! - [`Iter`] borrows the stack and walks the node chain from the top node
//!   captured when the session started. Every call to `Stack::iter` is an
//!   independent session. The borrow keeps the stack immutable while the
//!   session is alive.
//! - [`IntoIter`] owns the stack and pops it top to bottom.

use std::fmt;
use std::iter::FusedIterator;

use crate::error::StackError;
use crate::stack::{Node, Stack};

/// Borrowing iterator, top to bottom
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(top: Option<&'a Node<T>>, len: usize) -> Self {
        Iter {
            next: top,
            remaining: len,
        }
    }

    /// Whether another element remains in this session
    #[inline]
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Advance the session, failing once every element has been yielded
    ///
    /// ```
    /// use linked_stack::{Stack, StackError};
    ///
    /// let mut stack = Stack::new();
    /// stack.push(1);
    /// let mut it = stack.iter();
    /// assert_eq!(it.try_next(), Ok(&1));
    /// assert_eq!(it.try_next(), Err(StackError::IterationExhausted));
    /// ```
    pub fn try_next(&mut self) -> Result<&'a T, StackError> {
        self.next().ok_or(StackError::IterationExhausted)
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            self.remaining -= 1;
            &node.elem
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

// Manual impl: cloning a cursor never needs `T: Clone`
impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            next: self.next,
            remaining: self.remaining,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// Owning iterator that pops the stack, top to bottom
pub struct IntoIter<T> {
    stack: Stack<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(stack: Stack<T>) -> Self {
        IntoIter { stack }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.stack.take_top()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.stack.len();
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.stack).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack_123() -> Stack<i32> {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        stack.push(3);
        stack
    }

    #[test]
    fn test_iter_top_to_bottom() {
        let stack = stack_123();
        let items: Vec<i32> = stack.iter().copied().collect();
        assert_eq!(items, vec![3, 2, 1]);
        // Iterating does not consume anything
        assert_eq!(stack.len(), 3);
    }

    #[test]
    fn test_has_next_and_exhaustion() {
        let mut stack = Stack::new();
        stack.push(1);

        let mut it = stack.iter();
        assert!(it.has_next());
        assert_eq!(it.try_next(), Ok(&1));
        assert!(!it.has_next());
        assert_eq!(it.try_next(), Err(StackError::IterationExhausted));
        // Stays exhausted
        assert_eq!(it.next(), None);
        assert_eq!(it.try_next(), Err(StackError::IterationExhausted));
    }

    #[test]
    fn test_empty_iter() {
        let stack: Stack<i32> = Stack::new();
        let mut it = stack.iter();
        assert!(!it.has_next());
        assert_eq!(it.len(), 0);
        assert_eq!(it.try_next(), Err(StackError::IterationExhausted));
    }

    #[test]
    fn test_independent_sessions() {
        let stack = stack_123();
        let mut first = stack.iter();
        let mut second = stack.iter();

        assert_eq!(first.next(), Some(&3));
        assert_eq!(first.next(), Some(&2));
        assert_eq!(second.next(), Some(&3));
        assert_eq!(first.next(), Some(&1));
        assert_eq!(second.next(), Some(&2));
    }

    #[test]
    fn test_exact_size() {
        let stack = stack_123();
        let mut it = stack.iter();
        assert_eq!(it.len(), 3);
        it.next();
        assert_eq!(it.len(), 2);
    }

    #[test]
    fn test_cloned_cursor() {
        let stack = stack_123();
        let mut it = stack.iter();
        it.next();
        let rest = it.clone();
        assert_eq!(rest.copied().collect::<Vec<_>>(), vec![2, 1]);
        assert_eq!(it.next(), Some(&2));
        assert_eq!(format!("{:?}", it), "[1]");
    }

    #[test]
    fn test_for_loop_over_ref() {
        let stack = stack_123();
        let mut expected = vec![3, 2, 1].into_iter();
        for item in &stack {
            assert_eq!(Some(*item), expected.next());
        }
        assert_eq!(expected.next(), None);
    }

    #[test]
    fn test_into_iter_pops() {
        let stack = stack_123();
        let mut it = stack.into_iter();
        assert_eq!(it.len(), 3);
        assert_eq!(it.next(), Some(3));
        assert_eq!(it.len(), 2);
        assert_eq!(it.collect::<Vec<_>>(), vec![2, 1]);
    }
}
