//! Runner configuration and command-line flag parsing.

use std::error::Error;
use std::fmt;

/// Configuration for a [`CommandRunner`](crate::CommandRunner).
///
/// Defaults reproduce the reference protocol exactly: unknown commands are
/// skipped and an empty array prints `empty`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Line written by `print`, `iterator` and `foreach` when the array is
    /// empty. Default: `"empty"`. Must be non-empty and single-line.
    pub empty_marker: String,

    /// Reject unknown command words instead of skipping them.
    ///
    /// Default: `false`.
    pub strict: bool,
}

impl RunnerConfig {
    /// Default empty-array marker.
    pub const DEFAULT_EMPTY_MARKER: &'static str = "empty";

    /// Create a config with default values.
    pub fn new() -> Self {
        Self {
            empty_marker: Self::DEFAULT_EMPTY_MARKER.to_string(),
            strict: false,
        }
    }

    /// Build a config from command-line flags (program name excluded).
    ///
    /// Recognised flags: `--strict` and `--empty-marker <text>`. The result
    /// is validated before it is returned.
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = Self::new();
        let mut args = args.into_iter().map(Into::into);
        while let Some(flag) = args.next() {
            match flag.as_str() {
                "--strict" => config.strict = true,
                "--empty-marker" => {
                    config.empty_marker = args.next().ok_or(ConfigError::MissingValue {
                        flag: "--empty-marker",
                    })?;
                }
                _ => return Err(ConfigError::UnknownFlag { flag }),
            }
        }
        config.validate()?;
        Ok(config)
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.empty_marker.is_empty() {
            return Err(ConfigError::InvalidEmptyMarker {
                reason: "marker must not be empty".to_string(),
            });
        }
        if self.empty_marker.contains(['\n', '\r']) {
            return Err(ConfigError::InvalidEmptyMarker {
                reason: "marker must fit on a single line".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors detected while building a [`RunnerConfig`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A flag that the runner does not recognise.
    UnknownFlag {
        /// The flag as given.
        flag: String,
    },
    /// A flag that takes a value was last on the command line.
    MissingValue {
        /// The flag missing its value.
        flag: &'static str,
    },
    /// The empty-array marker would break the line protocol.
    InvalidEmptyMarker {
        /// Description of the problem.
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownFlag { flag } => write!(f, "unknown flag '{flag}'"),
            Self::MissingValue { flag } => write!(f, "flag '{flag}' requires a value"),
            Self::InvalidEmptyMarker { reason } => write!(f, "invalid empty marker: {reason}"),
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_protocol() {
        let config = RunnerConfig::default();
        assert_eq!(config.empty_marker, "empty");
        assert!(!config.strict);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn no_args_gives_defaults() {
        let config = RunnerConfig::from_args(Vec::<String>::new()).unwrap();
        assert_eq!(config, RunnerConfig::new());
    }

    #[test]
    fn flags_are_applied() {
        let config = RunnerConfig::from_args(["--empty-marker", "(none)", "--strict"]).unwrap();
        assert!(config.strict);
        assert_eq!(config.empty_marker, "(none)");
    }

    #[test]
    fn unknown_flag_rejected() {
        assert_eq!(
            RunnerConfig::from_args(["--verbose"]),
            Err(ConfigError::UnknownFlag {
                flag: "--verbose".into()
            })
        );
    }

    #[test]
    fn dangling_value_flag_rejected() {
        assert_eq!(
            RunnerConfig::from_args(["--empty-marker"]),
            Err(ConfigError::MissingValue {
                flag: "--empty-marker"
            })
        );
    }

    #[test]
    fn multiline_marker_rejected() {
        let result = RunnerConfig::from_args(["--empty-marker", "a\nb"]);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidEmptyMarker { .. })
        ));
        let blank = RunnerConfig {
            empty_marker: String::new(),
            strict: false,
        };
        assert!(blank.validate().is_err());
    }
}
