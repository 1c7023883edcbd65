//! Array-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during checked array operations.
///
/// Every fallible operation validates its arguments before touching the
/// buffer, so an `Err` always means the array is unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// An index fell outside the valid bound for the operation.
    ///
    /// For element access the bound is `index < len`; for insertion it is
    /// `index <= len`.
    OutOfRange {
        /// The requested index.
        index: usize,
        /// The array length at the time of the request.
        len: usize,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, len } => {
                write!(f, "index out of range: index {index}, length {len}")
            }
        }
    }
}

impl Error for ArrayError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_index_and_length() {
        let err = ArrayError::OutOfRange { index: 7, len: 3 };
        assert_eq!(err.to_string(), "index out of range: index 7, length 3");
    }
}
