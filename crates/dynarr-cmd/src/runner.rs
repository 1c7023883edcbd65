//! The command loop.
//!
//! A [`CommandRunner`] owns one [`DynamicArray`] and drives it purely
//! through its public operations. Input is a command count followed by that
//! many command lines; each command writes zero or one response line.
//! The runner fails fast: the first parse or array error ends the run, and
//! any output already written stays written.

use std::fmt;
use std::io::{BufRead, Write};
use std::str::FromStr;

use dynarr_array::DynamicArray;
use log::{debug, warn};

use crate::command::{Command, CommandError};
use crate::config::RunnerConfig;
use crate::error::{ExecuteError, RunError};

/// Counters for a completed run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Command count announced on the first input line.
    pub declared: usize,
    /// Commands applied to the array.
    pub executed: usize,
    /// Blank lines and skipped unknown commands.
    pub skipped: usize,
}

impl RunStats {
    /// Returns `true` if input ended before every declared line was read.
    pub fn truncated(&self) -> bool {
        self.executed + self.skipped < self.declared
    }
}

/// Applies protocol commands to an owned [`DynamicArray`].
///
/// # Examples
///
/// ```
/// use dynarr_cmd::{CommandRunner, RunnerConfig};
///
/// let input = "6\npush 10\npush 20\ninsert 1 15\nprint\npop\nsize\n";
/// let mut out = Vec::new();
/// let mut runner: CommandRunner<i64> = CommandRunner::new(RunnerConfig::default());
/// runner.run(input.as_bytes(), &mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "10 15 20 \n2\n");
/// ```
pub struct CommandRunner<T> {
    array: DynamicArray<T>,
    config: RunnerConfig,
}

impl<T> CommandRunner<T> {
    /// Create a runner over a fresh, empty array.
    pub fn new(config: RunnerConfig) -> Self {
        Self {
            array: DynamicArray::new(),
            config,
        }
    }

    /// The array as the commands so far have left it.
    pub fn array(&self) -> &DynamicArray<T> {
        &self.array
    }

    /// The active configuration.
    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Consume the runner, returning the array.
    pub fn into_array(self) -> DynamicArray<T> {
        self.array
    }
}

impl<T: FromStr + fmt::Display> CommandRunner<T> {
    /// Read a command count and then up to that many command lines from
    /// `input`, writing responses to `out`.
    ///
    /// Blank lines count toward the total. If `input` ends early the run
    /// stops cleanly and [`RunStats::truncated`] reports it.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        out: &mut W,
    ) -> Result<RunStats, RunError> {
        let mut buf = String::new();
        let mut line_no = 0;

        // The count may be preceded by blank lines.
        let declared = loop {
            buf.clear();
            if input.read_line(&mut buf)? == 0 {
                return Err(RunError::MissingCount);
            }
            line_no += 1;
            let text = buf.trim();
            if !text.is_empty() {
                break text.parse::<usize>().map_err(|_| RunError::InvalidCount {
                    text: text.to_string(),
                })?;
            }
        };

        let mut stats = RunStats {
            declared,
            ..RunStats::default()
        };
        for _ in 0..declared {
            buf.clear();
            if input.read_line(&mut buf)? == 0 {
                warn!(
                    "input ended after {} of {} command lines",
                    stats.executed + stats.skipped,
                    declared
                );
                break;
            }
            line_no += 1;

            let command = match Command::<T>::parse(&buf) {
                Ok(Some(command)) => command,
                Ok(None) => {
                    stats.skipped += 1;
                    continue;
                }
                Err(CommandError::Unknown { name }) if !self.config.strict => {
                    warn!("line {line_no}: skipping unknown command '{name}'");
                    stats.skipped += 1;
                    continue;
                }
                Err(source) => {
                    return Err(RunError::Command {
                        line: line_no,
                        source,
                    })
                }
            };

            let name = command.name();
            debug!("line {line_no}: {name}");
            self.execute(command, out).map_err(|err| match err {
                ExecuteError::Io(err) => RunError::Io(err),
                ExecuteError::Array(source) => RunError::Array {
                    line: line_no,
                    command: name,
                    source,
                },
            })?;
            stats.executed += 1;
        }
        Ok(stats)
    }

    /// Apply one command, writing its response (if any) to `out`.
    ///
    /// Array errors are returned before the array is modified.
    pub fn execute<W: Write>(
        &mut self,
        command: Command<T>,
        out: &mut W,
    ) -> Result<(), ExecuteError> {
        match command {
            Command::Push(value) => self.array.push(value),
            Command::Print => {
                if self.array.is_empty() {
                    self.write_empty(out)?;
                } else {
                    self.array.print_elements(out)?;
                }
            }
            Command::Size => writeln!(out, "{}", self.array.len())?,
            Command::Get(index) => writeln!(out, "{}", self.array.get(index)?)?,
            Command::Insert { index, value } => self.array.insert(index, value)?,
            Command::Pop => {
                self.array.pop();
            }
            Command::Iterate => {
                if self.array.is_empty() {
                    self.write_empty(out)?;
                } else {
                    let mut cursor = self.array.iter();
                    while cursor.position() < cursor.end() {
                        if let Some(element) = cursor.next() {
                            write!(out, "{element} ")?;
                        }
                    }
                    writeln!(out)?;
                }
            }
            Command::ForEach => {
                if self.array.is_empty() {
                    self.write_empty(out)?;
                } else {
                    for element in &self.array {
                        write!(out, "{element} ")?;
                    }
                    writeln!(out)?;
                }
            }
            Command::Clear => self.array.clear(),
        }
        Ok(())
    }

    fn write_empty<W: Write>(&self, out: &mut W) -> Result<(), ExecuteError> {
        writeln!(out, "{}", self.config.empty_marker)?;
        Ok(())
    }
}

impl<T> Default for CommandRunner<T> {
    fn default() -> Self {
        Self::new(RunnerConfig::default())
    }
}
