//! Operation counters.

use std::sync::atomic::{AtomicU64, Ordering};

/// Cumulative operation counters, scoped to one cache instance so separate
/// instances (e.g. in tests) do not share state.
#[derive(Debug, Default)]
pub struct Counters {
    /// Writes observed by Put, accepted or not.
    pub puts: AtomicU64,
    /// Coordinator-level get calls. Pure CacheStore lookups are not counted.
    pub gets: AtomicU64,
    /// Actual storage loads performed on confirmed misses.
    pub loads: AtomicU64,
    /// Explicit removals.
    pub removes: AtomicU64,
    /// Entries purged by the expiry sweeper.
    pub expires: AtomicU64,
}

/// Point-in-time view of the counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub puts: u64,
    pub gets: u64,
    pub loads: u64,
    pub removes: u64,
    pub expires: u64,
}

impl Counters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            puts: self.puts.load(Ordering::Relaxed),
            gets: self.gets.load(Ordering::Relaxed),
            loads: self.loads.load(Ordering::Relaxed),
            removes: self.removes.load(Ordering::Relaxed),
            expires: self.expires.load(Ordering::Relaxed),
        }
    }
}
