//! Integration test: end-to-end protocol scenarios.
//!
//! Each scenario feeds a complete input stream through a fresh
//! `CommandRunner<i64>` and checks the exact response bytes.

use dynarr_array::ArrayError;
use dynarr_cmd::{CommandRunner, RunError, RunnerConfig};

fn run(input: &str) -> (String, Result<dynarr_cmd::RunStats, RunError>) {
    let mut runner: CommandRunner<i64> = CommandRunner::new(RunnerConfig::default());
    let mut out = Vec::new();
    let result = runner.run(input.as_bytes(), &mut out);
    (String::from_utf8(out).unwrap(), result)
}

#[test]
fn push_insert_pop_scenario() {
    let (out, result) = run("6\npush 10\npush 20\ninsert 1 15\nprint\npop\nsize\n");
    assert!(result.is_ok());
    assert_eq!(out, "10 15 20 \n2\n");
}

#[test]
fn fresh_array_scenario() {
    let (out, result) = run("2\nprint\nsize\n");
    assert!(result.is_ok());
    assert_eq!(out, "empty\n0\n");
}

#[test]
fn get_past_end_is_a_failure_not_a_value() {
    let (out, result) = run("3\npush 1\npush 2\nget 2\n");
    assert!(out.is_empty());
    let err = result.unwrap_err();
    assert!(matches!(
        err,
        RunError::Array {
            source: ArrayError::OutOfRange { index: 2, len: 2 },
            ..
        }
    ));
}

#[test]
fn mixed_session() {
    let input = "\
14
push 3
push 1
insert 0 4
insert 3 1
insert 2 5
iterator
get 2
pop
foreach
size
clear
size
print
push -9
";
    let (out, result) = run(input);
    assert_eq!(out, "4 3 5 1 1 \n5\n4 3 5 1 \n4\n0\nempty\n");
    assert_eq!(result.unwrap().executed, 14);
}

#[test]
fn windows_line_endings() {
    let (out, result) = run("3\r\npush 7\r\nget 0\r\nsize\r\n");
    assert!(result.is_ok());
    assert_eq!(out, "7\n1\n");
}

#[test]
fn many_pushes_survive_growth() {
    let mut input = String::from("1001\n");
    for v in 0..1000 {
        input.push_str(&format!("push {v}\n"));
    }
    input.push_str("size\n");
    let mut runner: CommandRunner<i64> = CommandRunner::default();
    let mut out = Vec::new();
    runner.run(input.as_bytes(), &mut out).unwrap();
    assert_eq!(out, b"1000\n");
    assert_eq!(runner.array().capacity(), 1024);
    assert!(runner.array().iter().copied().eq(0..1000));
}
