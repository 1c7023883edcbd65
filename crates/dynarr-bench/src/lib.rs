//! Benchmark workloads for the dynarr workspace.
//!
//! Provides deterministic, seed-driven inputs for benchmarks and examples:
//!
//! - [`insert_positions`]: valid random insertion indices for a growing array
//! - [`command_script`]: a well-formed runner input stream
//! - [`filled`]: an array of `0..n`

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::fmt::Write;

use dynarr_array::DynamicArray;
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Build an array holding `0..n` in order.
pub fn filled(n: usize) -> DynamicArray<u64> {
    (0..n as u64).collect()
}

/// Insertion indices for `n` inserts into an initially empty array.
///
/// The `i`-th index lies in `0..=i`, so applying them in order never
/// fails.
pub fn insert_positions(n: usize, seed: u64) -> Vec<usize> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|len| (rng.next_u64() % (len as u64 + 1)) as usize)
        .collect()
}

/// A runner input of `n` commands that never fails.
///
/// Mix: roughly half pushes, the rest inserts, gets, sizes, pops and
/// prints. Indices are always in range for the array state at that point.
pub fn command_script(n: usize, seed: u64) -> String {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut len = 0u64;
    let mut script = String::with_capacity(n * 12);
    // Writing to a String cannot fail.
    let _ = writeln!(script, "{n}");
    for _ in 0..n {
        let roll = rng.next_u64() % 10;
        let value = rng.next_u64() % 1000;
        match roll {
            0..=4 => {
                let _ = writeln!(script, "push {value}");
                len += 1;
            }
            5 | 6 => {
                let index = rng.next_u64() % (len + 1);
                let _ = writeln!(script, "insert {index} {value}");
                len += 1;
            }
            7 if len > 0 => {
                let index = rng.next_u64() % len;
                let _ = writeln!(script, "get {index}");
            }
            8 => {
                script.push_str("pop\n");
                len = len.saturating_sub(1);
            }
            9 => script.push_str("print\n"),
            _ => script.push_str("size\n"),
        }
    }
    script
}
