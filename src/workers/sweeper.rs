//! Periodic purge of expired entries.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::store::CacheStore;

/// ExpirySweeper walks the store on a fixed tick and drops every entry whose
/// expiry has passed. It runs until the cache's shutdown token is cancelled.
pub struct ExpirySweeper {
    shutdown_token: CancellationToken,
    store: Arc<CacheStore>,
    every: Duration,
}

impl ExpirySweeper {
    pub fn new(shutdown_token: CancellationToken, store: Arc<CacheStore>, every: Duration) -> Self {
        Self {
            shutdown_token,
            store,
            every,
        }
    }

    pub fn spawn(self) -> JoinHandle<()> {
        tokio::task::spawn(self.run())
    }

    async fn run(self) {
        let mut ticker = tokio::time::interval(self.every);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        // Skip the immediate first tick, sweep only after a full interval.
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = self.shutdown_token.cancelled() => {
                    return;
                }
                _ = ticker.tick() => {
                    let purged = self.store.sweep_expired(Instant::now());
                    if purged > 0 {
                        info!(count = purged, "cleared expired file cache entries");
                    }
                }
            }
        }
    }
}
