//! dynarr: a generic growable array with a line-oriented command harness.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the dynarr sub-crates. For most users, adding `dynarr` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use dynarr::prelude::*;
//!
//! let mut array = DynamicArray::new();
//! array.push(10);
//! array.push(20);
//! array.insert(1, 15).unwrap();
//! assert_eq!(array.len(), 3);
//! assert_eq!(array.capacity(), 4);
//! assert_eq!(
//!     array.get(3),
//!     Err(ArrayError::OutOfRange { index: 3, len: 3 })
//! );
//!
//! // Deep copies mirror length, capacity and elements.
//! let copy = array.clone();
//! array.clear();
//! assert_eq!(copy.iter().copied().collect::<Vec<_>>(), vec![10, 15, 20]);
//! assert_eq!(array.capacity(), copy.capacity());
//!
//! // The same operations, driven by the text protocol.
//! let mut runner: CommandRunner<i64> = CommandRunner::new(RunnerConfig::default());
//! let mut out = Vec::new();
//! runner.run("2\nprint\nsize\n".as_bytes(), &mut out).unwrap();
//! assert_eq!(out, b"empty\n0\n");
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`array`] | `dynarr-array` | `DynamicArray`, `Iter`, growth policy, `ArrayError` |
//! | [`cmd`] | `dynarr-cmd` | Command parsing, `CommandRunner`, runner config and errors |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// The growable array (`dynarr-array`).
///
/// Most users only need [`array::DynamicArray`] and [`array::ArrayError`],
/// both also available in the [`prelude`].
pub use dynarr_array as array;

/// The command runner (`dynarr-cmd`).
///
/// [`cmd::CommandRunner`] drives an array from any `BufRead`/`Write` pair.
pub use dynarr_cmd as cmd;

/// Common imports for typical dynarr usage.
///
/// ```rust
/// use dynarr::prelude::*;
/// ```
pub mod prelude {
    // Array
    pub use dynarr_array::{ArrayError, DynamicArray, Iter};

    // Runner
    pub use dynarr_cmd::{Command, CommandRunner, RunError, RunStats, RunnerConfig};
}
