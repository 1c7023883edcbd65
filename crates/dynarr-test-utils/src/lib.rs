//! Test utilities and instrumented element types for dynarr development.
//!
//! [`DropTracker`] hands out [`Tracked`] values that record every clone and
//! every drop in shared counters, so tests can assert that a container
//! drops each element exactly once and leaks nothing, including when a
//! clone panics halfway through a copy.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Debug)]
struct Counters {
    created: AtomicUsize,
    cloned: AtomicUsize,
    dropped: AtomicUsize,
    /// Clones allowed before `Tracked::clone` panics. `usize::MAX` = unlimited.
    clone_budget: AtomicUsize,
}

/// Shared bookkeeping for a family of [`Tracked`] values.
#[derive(Clone, Debug)]
pub struct DropTracker {
    counters: Arc<Counters>,
}

impl DropTracker {
    pub fn new() -> Self {
        Self {
            counters: Arc::new(Counters {
                created: AtomicUsize::new(0),
                cloned: AtomicUsize::new(0),
                dropped: AtomicUsize::new(0),
                clone_budget: AtomicUsize::new(usize::MAX),
            }),
        }
    }

    /// Create a new tracked value.
    pub fn item(&self, value: u32) -> Tracked {
        self.counters.created.fetch_add(1, Ordering::Relaxed);
        Tracked {
            value,
            counters: Arc::clone(&self.counters),
        }
    }

    /// Make the clone after the next `n` successful clones panic.
    pub fn panic_after_clones(&self, n: usize) {
        let already = self.counters.cloned.load(Ordering::Relaxed);
        self.counters
            .clone_budget
            .store(already.saturating_add(n), Ordering::Relaxed);
    }

    /// Values created, by [`item`](Self::item) or by cloning.
    pub fn created(&self) -> usize {
        self.counters.created.load(Ordering::Relaxed)
    }

    /// Successful clones so far.
    pub fn clones(&self) -> usize {
        self.counters.cloned.load(Ordering::Relaxed)
    }

    /// Values dropped so far.
    pub fn drops(&self) -> usize {
        self.counters.dropped.load(Ordering::Relaxed)
    }

    /// Values created and not yet dropped.
    pub fn live(&self) -> usize {
        self.created() - self.drops()
    }
}

impl Default for DropTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// An element that reports its clones and drops to a [`DropTracker`].
#[derive(Debug)]
pub struct Tracked {
    pub value: u32,
    counters: Arc<Counters>,
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        let done = self.counters.cloned.load(Ordering::Relaxed);
        if done >= self.counters.clone_budget.load(Ordering::Relaxed) {
            panic!("clone budget exhausted after {done} clones");
        }
        self.counters.cloned.fetch_add(1, Ordering::Relaxed);
        self.counters.created.fetch_add(1, Ordering::Relaxed);
        Self {
            value: self.value,
            counters: Arc::clone(&self.counters),
        }
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.counters.dropped.fetch_add(1, Ordering::Relaxed);
    }
}
