//! Borrowed forward traversal over a [`DynamicArray`](crate::DynamicArray).

use std::fmt;
use std::iter::FusedIterator;
use std::slice;

/// Forward iterator over the live elements of an array, in index order.
///
/// Created by [`DynamicArray::iter`](crate::DynamicArray::iter). The
/// iterator borrows the array, so any structural mutation while it is alive
/// is rejected at compile time. Calling `iter()` again starts a fresh
/// traversal from index 0.
pub struct Iter<'a, T> {
    inner: slice::Iter<'a, T>,
    /// One-past-the-end index of the traversal.
    end: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(elements: &'a [T]) -> Self {
        Self {
            end: elements.len(),
            inner: elements.iter(),
        }
    }

    /// Index of the element the next call to `next()` will yield.
    ///
    /// Equal to [`end`](Self::end) once the traversal is exhausted.
    pub fn position(&self) -> usize {
        self.end - self.inner.len()
    }

    /// One-past-the-end index: the array length when iteration began.
    pub fn end(&self) -> usize {
        self.end
    }

    /// The elements not yet yielded, from [`position`](Self::position)
    /// up to [`end`](Self::end).
    pub fn as_slice(&self) -> &'a [T] {
        self.inner.as_slice()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            end: self.end,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.as_slice()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_advance_to_end() {
        let data = [4, 5, 6];
        let mut it = Iter::new(&data);
        assert_eq!(it.position(), 0);
        assert_eq!(it.end(), 3);
        assert_eq!(it.next(), Some(&4));
        assert_eq!(it.position(), 1);
        assert_eq!(it.as_slice(), &[5, 6]);
        assert_eq!(it.by_ref().count(), 2);
        assert_eq!(it.position(), it.end());
        assert_eq!(it.next(), None);
    }

    #[test]
    fn empty_view_is_exhausted() {
        let data: [u8; 0] = [];
        let mut it = Iter::new(&data);
        assert_eq!(it.len(), 0);
        assert_eq!(it.position(), 0);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn clone_continues_independently() {
        let data = [1, 2, 3];
        let mut a = Iter::new(&data);
        a.next();
        let b = a.clone();
        assert_eq!(a.collect::<Vec<_>>(), vec![&2, &3]);
        assert_eq!(b.position(), 1);
        assert_eq!(b.len(), 2);
    }
}
