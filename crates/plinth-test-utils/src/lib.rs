//! Ownership-accounting fixtures for plinth container tests.
//!
//! [`DropLedger`] hands out [`Tracked`] values and counts how many of them
//! have been dropped, so tests can prove that a container releases every
//! element exactly once — no double frees, no leaks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Issues [`Tracked`] values and tallies their drops.
///
/// Clones of a `Tracked` value report to the same ledger, so the tally
/// counts value destructions, not identities.
#[derive(Clone, Default)]
pub struct DropLedger {
    drops: Arc<AtomicUsize>,
}

impl DropLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a tracked value carrying `id`.
    pub fn tracked(&self, id: u32) -> Tracked {
        Tracked {
            id,
            drops: Arc::clone(&self.drops),
        }
    }

    /// Total drops observed so far across all values from this ledger.
    pub fn drops(&self) -> usize {
        self.drops.load(Ordering::Relaxed)
    }
}

/// A value whose destruction is tallied by its [`DropLedger`].
#[derive(Debug)]
pub struct Tracked {
    pub id: u32,
    drops: Arc<AtomicUsize>,
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            drops: Arc::clone(&self.drops),
        }
    }
}

/// The default value is untracked: it reports to a private counter no
/// ledger observes. Containers that default-initialise their slots can
/// hold `Tracked` without skewing the tally.
impl Default for Tracked {
    fn default() -> Self {
        Self {
            id: u32::MAX,
            drops: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.drops.fetch_add(1, Ordering::Relaxed);
    }
}
