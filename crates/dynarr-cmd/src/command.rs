//! Command parsing for the line-oriented runner protocol.
//!
//! One input line holds one command word followed by its arguments,
//! separated by whitespace. Arguments beyond those a command takes are
//! ignored; a blank line carries no command.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use smallvec::SmallVec;

/// A parsed runner command.
///
/// # Examples
///
/// ```
/// use dynarr_cmd::Command;
///
/// let cmd = Command::<i64>::parse("insert 1 15").unwrap();
/// assert_eq!(cmd, Some(Command::Insert { index: 1, value: 15 }));
///
/// assert_eq!(Command::<i64>::parse("   ").unwrap(), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command<T> {
    /// `push <value>`: append a value.
    Push(T),
    /// `print`: write all elements, or the empty marker.
    Print,
    /// `size`: write the element count.
    Size,
    /// `get <index>`: write the element at an index.
    Get(usize),
    /// `insert <index> <value>`: insert a value before an index.
    Insert {
        /// Position the value will occupy.
        index: usize,
        /// The value to insert.
        value: T,
    },
    /// `pop`: drop the last element, if any.
    Pop,
    /// `iterator`: write all elements via an explicit iterator.
    Iterate,
    /// `foreach`: write all elements via a `for` loop.
    ForEach,
    /// `clear`: drop all elements, keeping capacity.
    Clear,
}

impl<T> Command<T> {
    /// The command word as it appears on the wire.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Push(_) => "push",
            Self::Print => "print",
            Self::Size => "size",
            Self::Get(_) => "get",
            Self::Insert { .. } => "insert",
            Self::Pop => "pop",
            Self::Iterate => "iterator",
            Self::ForEach => "foreach",
            Self::Clear => "clear",
        }
    }
}

impl<T: FromStr> Command<T> {
    /// Parse one input line.
    ///
    /// Returns `Ok(None)` for a line with no tokens.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let tokens: SmallVec<[&str; 4]> = line.split_whitespace().collect();
        let Some((&word, args)) = tokens.split_first() else {
            return Ok(None);
        };

        let command = match word {
            "push" => Self::Push(value_arg("push", args, 0)?),
            "print" => Self::Print,
            "size" => Self::Size,
            "get" => Self::Get(index_arg("get", args, 0)?),
            "insert" => Self::Insert {
                index: index_arg("insert", args, 0)?,
                value: value_arg("insert", args, 1)?,
            },
            "pop" => Self::Pop,
            "iterator" => Self::Iterate,
            "foreach" => Self::ForEach,
            "clear" => Self::Clear,
            other => {
                return Err(CommandError::Unknown {
                    name: other.to_string(),
                })
            }
        };
        Ok(Some(command))
    }
}

fn raw_arg<'a>(
    command: &'static str,
    argument: &'static str,
    args: &[&'a str],
    position: usize,
) -> Result<&'a str, CommandError> {
    args.get(position)
        .copied()
        .ok_or(CommandError::MissingArgument { command, argument })
}

fn index_arg(command: &'static str, args: &[&str], position: usize) -> Result<usize, CommandError> {
    let text = raw_arg(command, "index", args, position)?;
    text.parse().map_err(|_| CommandError::InvalidArgument {
        command,
        argument: "index",
        text: text.to_string(),
    })
}

fn value_arg<T: FromStr>(
    command: &'static str,
    args: &[&str],
    position: usize,
) -> Result<T, CommandError> {
    let text = raw_arg(command, "value", args, position)?;
    text.parse().map_err(|_| CommandError::InvalidArgument {
        command,
        argument: "value",
        text: text.to_string(),
    })
}

/// Errors from parsing a single command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandError {
    /// The command word is not part of the protocol.
    Unknown {
        /// The unrecognised word.
        name: String,
    },
    /// A required argument is absent.
    MissingArgument {
        /// The command being parsed.
        command: &'static str,
        /// Which argument is missing.
        argument: &'static str,
    },
    /// An argument could not be parsed (including negative indices).
    InvalidArgument {
        /// The command being parsed.
        command: &'static str,
        /// Which argument was malformed.
        argument: &'static str,
        /// The offending token.
        text: String,
    },
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown { name } => write!(f, "unknown command '{name}'"),
            Self::MissingArgument { command, argument } => {
                write!(f, "'{command}' is missing its {argument} argument")
            }
            Self::InvalidArgument {
                command,
                argument,
                text,
            } => {
                write!(f, "'{command}' has an invalid {argument}: '{text}'")
            }
        }
    }
}

impl Error for CommandError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Result<Option<Command<i64>>, CommandError> {
        Command::parse(line)
    }

    #[test]
    fn parses_every_command_word() {
        assert_eq!(parse("push 10").unwrap(), Some(Command::Push(10)));
        assert_eq!(parse("print").unwrap(), Some(Command::Print));
        assert_eq!(parse("size").unwrap(), Some(Command::Size));
        assert_eq!(parse("get 2").unwrap(), Some(Command::Get(2)));
        assert_eq!(
            parse("insert 1 15").unwrap(),
            Some(Command::Insert {
                index: 1,
                value: 15
            })
        );
        assert_eq!(parse("pop").unwrap(), Some(Command::Pop));
        assert_eq!(parse("iterator").unwrap(), Some(Command::Iterate));
        assert_eq!(parse("foreach").unwrap(), Some(Command::ForEach));
        assert_eq!(parse("clear").unwrap(), Some(Command::Clear));
    }

    #[test]
    fn names_match_wire_words() {
        for line in [
            "push 1", "print", "size", "get 0", "insert 0 1", "pop", "iterator", "foreach",
            "clear",
        ] {
            let cmd = parse(line).unwrap().unwrap();
            assert_eq!(cmd.name(), line.split(' ').next().unwrap());
        }
    }

    #[test]
    fn blank_line_has_no_command() {
        assert_eq!(parse("").unwrap(), None);
        assert_eq!(parse(" \t\r\n").unwrap(), None);
    }

    #[test]
    fn surrounding_whitespace_and_extra_tokens_are_ignored() {
        assert_eq!(parse("  push   -7  trailing\r\n").unwrap(), Some(Command::Push(-7)));
        assert_eq!(parse("size now").unwrap(), Some(Command::Size));
    }

    #[test]
    fn unknown_word_is_reported() {
        assert_eq!(
            parse("shuffle 3"),
            Err(CommandError::Unknown {
                name: "shuffle".into()
            })
        );
        // Command words are case sensitive.
        assert!(matches!(parse("PUSH 1"), Err(CommandError::Unknown { .. })));
    }

    #[test]
    fn missing_arguments_are_reported() {
        assert_eq!(
            parse("push"),
            Err(CommandError::MissingArgument {
                command: "push",
                argument: "value"
            })
        );
        assert_eq!(
            parse("insert 3"),
            Err(CommandError::MissingArgument {
                command: "insert",
                argument: "value"
            })
        );
    }

    #[test]
    fn malformed_arguments_are_reported() {
        assert_eq!(
            parse("push ten"),
            Err(CommandError::InvalidArgument {
                command: "push",
                argument: "value",
                text: "ten".into()
            })
        );
        assert_eq!(
            parse("get -1"),
            Err(CommandError::InvalidArgument {
                command: "get",
                argument: "index",
                text: "-1".into()
            })
        );
    }

    #[test]
    fn value_type_drives_value_parsing() {
        let cmd = Command::<String>::parse("push hello").unwrap();
        assert_eq!(cmd, Some(Command::Push("hello".to_string())));
        assert!(Command::<u8>::parse("push 300").is_err());
    }

    #[test]
    fn error_messages_name_the_command() {
        let err = parse("insert x 1").unwrap_err();
        assert_eq!(err.to_string(), "'insert' has an invalid index: 'x'");
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn arbitrary_lines_never_panic(line in ".{0,64}") {
                let _ = parse(&line);
            }

            #[test]
            fn push_accepts_any_i64(value in any::<i64>()) {
                prop_assert_eq!(parse(&format!("push {value}")).unwrap(), Some(Command::Push(value)));
            }
        }
    }
}
