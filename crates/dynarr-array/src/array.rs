//! The growable array type.
//!
//! [`DynamicArray`] keeps its elements in a single contiguous `RawBuffer`
//! and a logical length. Slots `[0, len)` are initialised; slots
//! `[len, capacity)` are allocated but hold no value. Growth follows
//! [`growth::grown_capacity`]: a full buffer is replaced by a larger one,
//! the live elements are moved across, and the old allocation is released.
//! The buffer never shrinks.

#![allow(unsafe_code)]

use std::fmt;
use std::io;
use std::mem;
use std::ops::{Index, IndexMut};
use std::ptr;
use std::slice;

use crate::error::ArrayError;
use crate::growth;
use crate::iter::Iter;
use crate::raw::{self, RawBuffer};

/// A contiguous, growable array with amortised O(1) append.
///
/// The array owns its storage exclusively. [`Clone`] produces a deep copy
/// with the same length, the same capacity and cloned elements; the copy
/// never shares memory with its source.
///
/// # Examples
///
/// ```
/// use dynarr_array::DynamicArray;
///
/// let mut array = DynamicArray::new();
/// array.push(10);
/// array.push(20);
/// array.insert(1, 15).unwrap();
/// assert_eq!(array.as_slice(), &[10, 15, 20]);
/// assert_eq!(array.capacity(), 4);
///
/// assert!(array.get(3).is_err());
/// ```
pub struct DynamicArray<T> {
    buf: RawBuffer<T>,
    len: usize,
}

impl<T> DynamicArray<T> {
    /// Create an empty array. Nothing is allocated until the first insertion.
    pub const fn new() -> Self {
        Self {
            buf: RawBuffer::new(),
            len: 0,
        }
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots currently allocated.
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Append `value` after the last element, growing the buffer if full.
    pub fn push(&mut self, value: T) {
        if self.len == self.capacity() {
            self.grow();
        }
        // SAFETY: after the growth check `len < capacity`, and slot `len`
        // is outside the live prefix, so it holds no value to overwrite.
        unsafe { self.buf.as_mut_ptr().add(self.len).write(value) };
        self.len += 1;
    }

    /// Insert `value` at `index`, shifting `[index, len)` one slot right.
    ///
    /// `index == len` appends. Returns [`ArrayError::OutOfRange`] without
    /// modifying the array if `index > len`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), ArrayError> {
        if index > self.len {
            return Err(ArrayError::OutOfRange {
                index,
                len: self.len,
            });
        }
        if self.len == self.capacity() {
            self.grow();
        }
        // SAFETY: `index <= len < capacity`. The shifted range `[index, len)`
        // is initialised and its destination `[index + 1, len + 1)` is in
        // bounds. `ptr::copy` is an overlapping move, so every displaced
        // element is read before its source slot is overwritten.
        unsafe {
            let slot = self.buf.as_mut_ptr().add(index);
            ptr::copy(slot, slot.add(1), self.len - index);
            slot.write(value);
        }
        self.len += 1;
        Ok(())
    }

    /// Remove and return the last element, or `None` if the array is empty.
    ///
    /// Capacity is unchanged.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: slot `len` was the last initialised slot and has just left
        // the live prefix, so ownership of its value moves to the caller.
        Some(unsafe { self.buf.as_ptr().add(self.len).read() })
    }

    /// Drop every element. Capacity and the allocation are retained.
    pub fn clear(&mut self) {
        let live = ptr::slice_from_raw_parts_mut(self.buf.as_mut_ptr(), self.len);
        // Zero the length first so a panicking element destructor cannot
        // lead to a second drop of the same slots.
        self.len = 0;
        // SAFETY: `live` covers exactly the previously initialised prefix,
        // which is no longer reachable through `self`.
        unsafe { ptr::drop_in_place(live) };
    }

    /// Shared reference to the element at `index`.
    ///
    /// Returns [`ArrayError::OutOfRange`] if `index >= len`.
    pub fn get(&self, index: usize) -> Result<&T, ArrayError> {
        let len = self.len;
        self.as_slice()
            .get(index)
            .ok_or(ArrayError::OutOfRange { index, len })
    }

    /// Mutable reference to the element at `index`.
    ///
    /// Returns [`ArrayError::OutOfRange`] if `index >= len`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, ArrayError> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(ArrayError::OutOfRange { index, len })
    }

    /// The live elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: the pointer is non-null and aligned even when nothing is
        // allocated, and `[0, len)` is initialised.
        unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }

    /// The live elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as for `as_slice`; `&mut self` guarantees uniqueness.
        unsafe { slice::from_raw_parts_mut(self.buf.as_mut_ptr(), self.len) }
    }

    /// Iterate over the elements in index order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.as_slice())
    }

    /// Iterate mutably over the elements in index order.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Move the live elements into a buffer of the next capacity step and
    /// release the old allocation.
    fn grow(&mut self) {
        let new_cap = match growth::grown_capacity(self.capacity()) {
            Some(cap) => cap,
            None => raw::capacity_overflow(),
        };
        let mut fresh = RawBuffer::with_capacity(new_cap);
        // SAFETY: the two buffers are distinct allocations, `fresh` has room
        // for more than `len` values, and the moved-from slots are treated
        // as uninitialised once `fresh` takes over below.
        unsafe { ptr::copy_nonoverlapping(self.buf.as_ptr(), fresh.as_mut_ptr(), self.len) };
        mem::swap(&mut self.buf, &mut fresh);
        // `fresh` now holds the old allocation; dropping it frees the memory
        // without touching the moved elements.
    }
}

impl<T: fmt::Display> DynamicArray<T> {
    /// Write every element followed by a single space, then a newline.
    ///
    /// An empty array writes just the newline.
    pub fn print_elements<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        for element in self {
            write!(out, "{element} ")?;
        }
        writeln!(out)
    }
}

impl<T> Drop for DynamicArray<T> {
    fn drop(&mut self) {
        self.clear();
        // `buf` releases the allocation in its own destructor.
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    /// Deep copy with the source's capacity and its first `len` elements.
    fn clone(&self) -> Self {
        let mut copy = Self {
            buf: RawBuffer::with_capacity(self.capacity()),
            len: 0,
        };
        for element in self {
            let value = element.clone();
            // SAFETY: `copy.len < self.len <= copy.capacity()` and slot
            // `copy.len` is uninitialised. `len` is bumped after each write,
            // so a panicking `clone` drops only the values already copied.
            unsafe { copy.buf.as_mut_ptr().add(copy.len).write(value) };
            copy.len += 1;
        }
        copy
    }

    /// Replace the contents of `self` with a deep copy of `source`.
    ///
    /// The copy is built before the old storage is released, so a panicking
    /// element `clone` leaves `self` untouched.
    fn clone_from(&mut self, source: &Self) {
        *self = source.clone();
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Element-wise equality. Capacity is not compared.
impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

/// Indexing panics with the [`ArrayError::OutOfRange`] message when
/// `index >= len`. Use [`DynamicArray::get`] for a checked lookup.
impl<T> Index<usize> for DynamicArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(element) => element,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<usize> for DynamicArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(element) => element,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> AsRef<[T]> for DynamicArray<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for DynamicArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynamicArray<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> slice::IterMut<'a, T> {
        self.iter_mut()
    }
}
