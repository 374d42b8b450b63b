//! File cache facade.

use std::sync::Arc;

use anyhow::Result;
use tokio_util::sync::CancellationToken;

use crate::config::CacheConfig;
use crate::error::CacheError;
use crate::loader::{LoadCoordinator, ReleaseStore};
use crate::model::{ConfigFileRelease, Entry};
use crate::store::CacheStore;
use crate::workers::{Counters, ExpirySweeper, StatsReporter, StatsSnapshot};

/// FileCache is a read-through, write-coalescing cache for config-file
/// release records keyed by (namespace, group, file_name).
///
/// Writers call [`put`](Self::put), readers call
/// [`get_or_load`](Self::get_or_load) (or [`get`](Self::get) for pure
/// lookups). Two background tasks, the expiry sweeper and the stats reporter,
/// run until [`close`](Self::close) or drop.
pub struct FileCache {
    store: Arc<CacheStore>,
    coordinator: LoadCoordinator,
    counters: Arc<Counters>,
    shutdown_token: CancellationToken,
}

impl FileCache {
    /// Creates a cache over the given backing store and starts its
    /// maintenance tasks. Must be called within a tokio runtime.
    pub fn new(cfg: CacheConfig, storage: Arc<dyn ReleaseStore>) -> Result<Arc<Self>> {
        cfg.validate()?;

        let shutdown_token = CancellationToken::new();
        let counters = Arc::new(Counters::new());
        let store = Arc::new(CacheStore::new(cfg.clone(), counters.clone()));
        let coordinator =
            LoadCoordinator::new(cfg.clone(), store.clone(), storage, counters.clone());

        ExpirySweeper::new(shutdown_token.clone(), store.clone(), cfg.sweep_interval).spawn();
        StatsReporter::new(shutdown_token.clone(), counters.clone(), cfg.stats_interval).spawn();

        Ok(Arc::new(Self {
            store,
            coordinator,
            counters,
            shutdown_token,
        }))
    }

    /// Writes a release record, subject to the version overwrite rule.
    pub fn put(&self, release: &ConfigFileRelease) {
        self.store.put(release);
    }

    /// Pure cache lookup, never loads.
    pub fn get(&self, namespace: &str, group: &str, file_name: &str) -> Option<Entry> {
        self.store.get(namespace, group, file_name)
    }

    /// Cached entry for the key, loaded from storage on a confirmed miss.
    pub async fn get_or_load(
        &self,
        namespace: &str,
        group: &str,
        file_name: &str,
    ) -> Result<Entry, CacheError> {
        self.coordinator
            .get_or_load(namespace, group, file_name)
            .await
    }

    /// Deletes the entry for the key, if any.
    pub fn remove(&self, namespace: &str, group: &str, file_name: &str) {
        self.store.remove(namespace, group, file_name);
    }

    /// Cumulative operation counters since the cache was created.
    pub fn stats(&self) -> StatsSnapshot {
        self.counters.snapshot()
    }

    /// Number of live entries, negative placeholders included.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Stops the background tasks. Idempotent; also happens on drop.
    pub fn close(&self) {
        self.shutdown_token.cancel();
    }
}

impl Drop for FileCache {
    fn drop(&mut self) {
        self.shutdown_token.cancel();
    }
}
