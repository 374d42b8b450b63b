//! Load coordination with stampede protection.

use std::sync::atomic::Ordering;
use std::sync::Arc;

use tracing::error;

use crate::config::CacheConfig;
use crate::error::CacheError;
use crate::loader::{LockPool, ReleaseStore};
use crate::model::{file_id, Entry};
use crate::store::CacheStore;
use crate::workers::Counters;

/// LoadCoordinator serializes cache-miss loads per key.
///
/// For a given key at most one storage call is in flight at any time;
/// concurrent callers either hit the cache or wait on the key's lock and then
/// observe the winner's result. Callers on different keys never block each
/// other beyond pool-shard collisions.
pub struct LoadCoordinator {
    cfg: CacheConfig,
    store: Arc<CacheStore>,
    storage: Arc<dyn ReleaseStore>,
    locks: LockPool,
    counters: Arc<Counters>,
}

impl LoadCoordinator {
    pub fn new(
        cfg: CacheConfig,
        store: Arc<CacheStore>,
        storage: Arc<dyn ReleaseStore>,
        counters: Arc<Counters>,
    ) -> Self {
        let locks = LockPool::new(cfg.load_lock_shards);
        Self {
            cfg,
            store,
            storage,
            locks,
            counters,
        }
    }

    /// Returns the cached entry, loading it from storage on a confirmed miss.
    ///
    /// An absent record is cached and returned as a negative entry, not an
    /// error. A storage error is propagated with the identity attached and
    /// leaves the cache untouched, so the next caller retries the load.
    pub async fn get_or_load(
        &self,
        namespace: &str,
        group: &str,
        file_name: &str,
    ) -> Result<Entry, CacheError> {
        self.counters.gets.fetch_add(1, Ordering::Relaxed);

        let id = file_id(namespace, group, file_name);
        if let Some(entry) = self.store.get_by_id(&id) {
            return Ok(entry);
        }

        let _guard = self.locks.lock_for(&id).lock().await;

        // Double check: a waiter may find the load already done by whoever
        // held the lock first.
        if let Some(entry) = self.store.get_by_id(&id) {
            return Ok(entry);
        }

        self.counters.loads.fetch_add(1, Ordering::Relaxed);

        match self.storage.get_release(namespace, group, file_name).await {
            Err(err) => {
                error!(
                    namespace = %namespace,
                    group = %group,
                    file_name = %file_name,
                    error = %err,
                    "load config file release failed"
                );
                Err(CacheError::Load {
                    namespace: namespace.to_string(),
                    group: group.to_string(),
                    file_name: file_name.to_string(),
                    source: err,
                })
            }
            Ok(Some(release)) => {
                let entry = Entry::positive(&release, self.cfg.next_expire_at());
                self.store.insert(id, entry.clone());
                Ok(entry)
            }
            Ok(None) => {
                // Cache the absence so a hot non-existent key cannot keep
                // punching through to storage.
                let entry = Entry::negative(self.cfg.next_expire_at());
                self.store.insert(id, entry.clone());
                Ok(entry)
            }
        }
    }
}
