//! Growable, single-owner dynamic array.
//!
//! [`DynamicArray`] stores its elements in one contiguous heap buffer and
//! grows by doubling: the first insertion reserves one slot, each later
//! reallocation doubles the capacity. Storage is never shared and never
//! shrinks; [`clear`](DynamicArray::clear) and [`pop`](DynamicArray::pop)
//! keep the allocation for reuse.
//!
//! # Architecture
//!
//! ```text
//! DynamicArray<T>
//! ├── RawBuffer<T>   (owns the allocation, frees it exactly once)
//! ├── len            (initialised prefix of the buffer)
//! └── Iter<'_, T>    (borrowed view over [0, len))
//! ```
//!
//! # Errors
//!
//! Index-checked operations return [`ArrayError::OutOfRange`] and never
//! modify the array when they fail. Allocation failure aborts and capacity
//! overflow panics; neither is part of the error taxonomy.
//!
//! # Safety
//!
//! This is the only crate in the workspace that contains `unsafe` code,
//! confined to the `raw` and `array` modules.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod array;
pub mod error;
pub mod growth;
pub mod iter;
mod raw;

// Public re-exports for the primary API surface.
pub use array::DynamicArray;
pub use error::ArrayError;
pub use iter::Iter;
