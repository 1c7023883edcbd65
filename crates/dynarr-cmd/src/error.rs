//! Error types for command execution and whole runs.

use std::error::Error;
use std::fmt;
use std::io;

use dynarr_array::ArrayError;

use crate::command::CommandError;

/// Errors from applying a single command to the array.
#[derive(Debug)]
pub enum ExecuteError {
    /// Writing the response failed.
    Io(io::Error),
    /// The array rejected the operation.
    Array(ArrayError),
}

impl fmt::Display for ExecuteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "write failed: {err}"),
            Self::Array(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ExecuteError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Array(err) => Some(err),
        }
    }
}

impl From<io::Error> for ExecuteError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<ArrayError> for ExecuteError {
    fn from(err: ArrayError) -> Self {
        Self::Array(err)
    }
}

/// Errors that terminate a [`CommandRunner::run`](crate::CommandRunner::run).
///
/// Line numbers are 1-based positions in the input stream, counting the
/// line that holds the command count.
#[derive(Debug)]
pub enum RunError {
    /// Reading input or writing output failed.
    Io(io::Error),
    /// The input ended before a command count was found.
    MissingCount,
    /// The command count is not a non-negative integer.
    InvalidCount {
        /// The offending text.
        text: String,
    },
    /// A command line could not be parsed.
    Command {
        /// Input line number.
        line: usize,
        /// The parse failure.
        source: CommandError,
    },
    /// A command was rejected by the array.
    Array {
        /// Input line number.
        line: usize,
        /// The command word.
        command: &'static str,
        /// The array failure.
        source: ArrayError,
    },
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "i/o error: {err}"),
            Self::MissingCount => write!(f, "input ended before the command count"),
            Self::InvalidCount { text } => write!(f, "invalid command count '{text}'"),
            Self::Command { line, source } => write!(f, "line {line}: {source}"),
            Self::Array {
                line,
                command,
                source,
            } => write!(f, "line {line}: '{command}' failed: {source}"),
        }
    }
}

impl Error for RunError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Command { source, .. } => Some(source),
            Self::Array { source, .. } => Some(source),
            Self::MissingCount | Self::InvalidCount { .. } => None,
        }
    }
}

impl From<io::Error> for RunError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}
