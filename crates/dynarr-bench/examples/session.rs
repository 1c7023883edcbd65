//! Generated runner session example.
//!
//! Demonstrates: build a script → run it → inspect the array the commands
//! left behind.

use dynarr_bench::command_script;
use dynarr_cmd::{CommandRunner, RunnerConfig};

fn main() {
    println!("=== dynarr runner session ===\n");

    for (n, seed) in [(20, 1), (1_000, 2), (100_000, 3)] {
        let script = command_script(n, seed);
        let mut runner: CommandRunner<u64> = CommandRunner::new(RunnerConfig::default());
        let mut out = Vec::new();
        let stats = runner.run(script.as_bytes(), &mut out).unwrap();
        let array = runner.array();
        println!(
            "  {:>7} commands: executed={:>7}, len={:>6}, capacity={:>6}, output={:>9} bytes",
            n,
            stats.executed,
            array.len(),
            array.capacity(),
            out.len(),
        );
    }
}
