//! Line-oriented command runner for [`DynamicArray`](dynarr_array::DynamicArray).
//!
//! The protocol is a command count on the first line followed by that many
//! command lines:
//!
//! | Command | Args | Output |
//! |---------|------|--------|
//! | `push` | value | none |
//! | `print` | none | elements, or the empty marker |
//! | `size` | none | element count |
//! | `get` | index | element at index |
//! | `insert` | index, value | none |
//! | `pop` | none | none |
//! | `iterator` | none | elements, or the empty marker |
//! | `foreach` | none | elements, or the empty marker |
//! | `clear` | none | none |
//!
//! Elements are written each followed by one space, then a newline.
//! [`CommandRunner`] works over any `BufRead`/`Write` pair, so the whole
//! protocol can be exercised without touching stdin or stdout.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod command;
pub mod config;
pub mod error;
pub mod runner;

pub use command::{Command, CommandError};
pub use config::{ConfigError, RunnerConfig};
pub use error::{ExecuteError, RunError};
pub use runner::{CommandRunner, RunStats};
