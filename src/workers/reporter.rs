//! Periodic cache status log.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::workers::Counters;

/// StatsReporter logs the cumulative operation counters on a fixed tick.
/// Pure observability, it never touches cache state.
pub struct StatsReporter {
    shutdown_token: CancellationToken,
    counters: Arc<Counters>,
    every: Duration,
}

impl StatsReporter {
    pub fn new(
        shutdown_token: CancellationToken,
        counters: Arc<Counters>,
        every: Duration,
    ) -> Self {
        Self {
            shutdown_token,
            counters,
            every,
        }
    }

    pub fn spawn(self) -> JoinHandle<()> {
        tokio::task::spawn(self.run())
    }

    async fn run(self) {
        let mut ticker = tokio::time::interval(self.every);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = self.shutdown_token.cancelled() => {
                    return;
                }
                _ = ticker.tick() => {
                    let stats = self.counters.snapshot();
                    info!(
                        puts = stats.puts,
                        gets = stats.gets,
                        loads = stats.loads,
                        removes = stats.removes,
                        expires = stats.expires,
                        "file cache status"
                    );
                }
            }
        }
    }
}
