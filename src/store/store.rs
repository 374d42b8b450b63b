//! In-memory concurrent storage for release entries.

use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Instant;

use dashmap::mapref::entry::Entry as MapEntry;
use dashmap::DashMap;

use crate::config::CacheConfig;
use crate::model::{file_id, ConfigFileRelease, Entry};
use crate::workers::Counters;

/// CacheStore owns the file-id→Entry map and the overwrite rules.
///
/// The map is internally sharded, so Get/Put/Remove on unrelated keys never
/// serialize against each other.
pub struct CacheStore {
    cfg: CacheConfig,
    files: DashMap<String, Entry>,
    counters: Arc<Counters>,
}

impl CacheStore {
    pub fn new(cfg: CacheConfig, counters: Arc<Counters>) -> Self {
        Self {
            cfg,
            files: DashMap::new(),
            counters,
        }
    }

    /// Inserts or idempotently refreshes the entry for the record's key.
    ///
    /// The new record wins iff no entry exists, the stored entry is a negative
    /// placeholder, or the record's version is strictly greater than the
    /// stored one. Equal or lower versions are silently ignored, which makes
    /// out-of-order and duplicate writes safe. Accepted writes are stamped
    /// with a fresh jittered expiry; rejected writes leave the stored entry
    /// and its expiry untouched.
    pub fn put(&self, release: &ConfigFileRelease) {
        self.counters.puts.fetch_add(1, Ordering::Relaxed);

        match self.files.entry(release.file_id()) {
            MapEntry::Occupied(mut occupied) => {
                let stored = occupied.get();
                if stored.empty || release.version > stored.version {
                    occupied.insert(Entry::positive(release, self.cfg.next_expire_at()));
                }
            }
            MapEntry::Vacant(vacant) => {
                vacant.insert(Entry::positive(release, self.cfg.next_expire_at()));
            }
        }
    }

    /// Pure lookup. Never triggers a load and is not counted in the get
    /// metric, it is the internal-call path.
    pub fn get(&self, namespace: &str, group: &str, file_name: &str) -> Option<Entry> {
        self.get_by_id(&file_id(namespace, group, file_name))
    }

    /// Lookup by a prebuilt file id.
    pub fn get_by_id(&self, id: &str) -> Option<Entry> {
        self.files.get(id).map(|e| e.clone())
    }

    /// Stores an entry produced by a coordinated load, replacing whatever is
    /// there. Only called under the per-key load lock after a confirmed miss.
    pub(crate) fn insert(&self, id: String, entry: Entry) {
        self.files.insert(id, entry);
    }

    /// Unconditionally deletes the entry for a key. No-op when absent.
    pub fn remove(&self, namespace: &str, group: &str, file_name: &str) {
        self.counters.removes.fetch_add(1, Ordering::Relaxed);
        self.files.remove(&file_id(namespace, group, file_name));
    }

    /// Purges every entry whose expiry has passed. Returns the number of
    /// purged entries and adds it to the expire counter.
    pub(crate) fn sweep_expired(&self, now: Instant) -> u64 {
        let mut purged: u64 = 0;
        self.files.retain(|_, entry| {
            if entry.is_expired(now) {
                purged += 1;
                false
            } else {
                true
            }
        });
        if purged > 0 {
            self.counters.expires.fetch_add(purged, Ordering::Relaxed);
        }
        purged
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
