//! Low-level primitives for array storage.
//!
//! `RawBuffer` owns exactly one heap allocation of `capacity` slots and
//! nothing more. It never reads, writes or drops elements: which slots are
//! initialised is tracked by the owning [`DynamicArray`](crate::DynamicArray).
//! Dropping a `RawBuffer` releases its allocation exactly once.
//!
//! Zero-capacity buffers and buffers of zero-sized `T` own no allocation and
//! use a dangling, well-aligned pointer.

#![allow(unsafe_code)]

use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::mem;
use std::ptr::NonNull;

/// Uninitialised, single-owner storage for `capacity` values of `T`.
pub(crate) struct RawBuffer<T> {
    ptr: NonNull<T>,
    cap: usize,
    /// Owns `T` values for drop-check purposes.
    _marker: PhantomData<T>,
}

// SAFETY: RawBuffer uniquely owns its allocation, so moving it to another
// thread moves the (potential) `T` values with it.
unsafe impl<T: Send> Send for RawBuffer<T> {}
// SAFETY: shared access only hands out `*const T`, usable by `&T` readers.
unsafe impl<T: Sync> Sync for RawBuffer<T> {}

impl<T> RawBuffer<T> {
    /// An empty buffer with no allocation.
    pub(crate) const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
            _marker: PhantomData,
        }
    }

    /// Allocate room for exactly `capacity` values.
    ///
    /// Aborts through [`alloc::handle_alloc_error`] if the allocator fails,
    /// and panics if the byte size of the request overflows.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        if capacity == 0 {
            return Self::new();
        }
        let layout = match Layout::array::<T>(capacity) {
            Ok(layout) => layout,
            Err(_) => capacity_overflow(),
        };
        if layout.size() == 0 {
            return Self {
                ptr: NonNull::dangling(),
                cap: capacity,
                _marker: PhantomData,
            };
        }

        // SAFETY: `layout` has a non-zero size.
        let raw = unsafe { alloc::alloc(layout) };
        let ptr = match NonNull::new(raw.cast::<T>()) {
            Some(ptr) => ptr,
            None => alloc::handle_alloc_error(layout),
        };
        Self {
            ptr,
            cap: capacity,
            _marker: PhantomData,
        }
    }

    /// Number of slots this buffer can hold.
    pub(crate) fn capacity(&self) -> usize {
        self.cap
    }

    /// Pointer to slot 0. Never null, always aligned.
    pub(crate) fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    /// Mutable pointer to slot 0. Never null, always aligned.
    pub(crate) fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Layout of the live allocation, or `None` when nothing was allocated.
    fn allocation(&self) -> Option<Layout> {
        if self.cap == 0 || mem::size_of::<T>() == 0 {
            return None;
        }
        Layout::array::<T>(self.cap).ok()
    }
}

impl<T> Drop for RawBuffer<T> {
    fn drop(&mut self) {
        if let Some(layout) = self.allocation() {
            // SAFETY: `ptr` was returned by `alloc::alloc` with this exact
            // layout in `with_capacity` and has not been freed since.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast::<u8>(), layout) };
        }
    }
}

/// Abort a growth or copy whose capacity cannot be represented.
#[cold]
pub(crate) fn capacity_overflow() -> ! {
    panic!("capacity overflow");
}
