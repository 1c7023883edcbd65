//! `dynarr`: run protocol commands from stdin against an `i64` array.
//!
//! Usage: `dynarr [--strict] [--empty-marker <text>] < commands.txt`

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use dynarr_cmd::{CommandRunner, RunnerConfig};

fn main() -> ExitCode {
    let config = match RunnerConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("dynarr: {err}");
            eprintln!("usage: dynarr [--strict] [--empty-marker <text>]");
            return ExitCode::from(2);
        }
    };

    let stdin = io::stdin();
    let mut out = BufWriter::new(io::stdout().lock());
    let mut runner: CommandRunner<i64> = CommandRunner::new(config);

    let result = runner.run(stdin.lock(), &mut out);
    // Responses written before a failure must still reach stdout.
    let flushed = out.flush();

    if let Err(err) = result {
        eprintln!("dynarr: {err}");
        return ExitCode::FAILURE;
    }
    if let Err(err) = flushed {
        eprintln!("dynarr: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
