//! Fixed-size pool of per-key load locks.

use tokio::sync::Mutex;
use xxhash_rust::xxh3::xxh3_64;

/// Pool of async mutexes selected by key hash.
///
/// Bounds the memory of the per-key lock registry: two distinct keys may hash
/// to the same mutex and contend falsely, which only costs latency on the
/// miss path, never correctness. Pool size must be a power of two so
/// selection is a mask.
pub struct LockPool {
    locks: Vec<Mutex<()>>,
    mask: u64,
}

impl LockPool {
    pub fn new(shards: usize) -> Self {
        debug_assert!(shards.is_power_of_two());
        let mut locks = Vec::with_capacity(shards);
        for _ in 0..shards {
            locks.push(Mutex::new(()));
        }
        Self {
            locks,
            mask: (shards - 1) as u64,
        }
    }

    /// Lock guarding loads for the given file id.
    pub fn lock_for(&self, file_id: &str) -> &Mutex<()> {
        let idx = (xxh3_64(file_id.as_bytes()) & self.mask) as usize;
        &self.locks[idx]
    }
}
