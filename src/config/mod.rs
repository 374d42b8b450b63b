// Configuration for the release cache.

use std::time::{Duration, Instant};

use anyhow::{ensure, Context, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Base time-to-live applied to every accepted write.
pub const DEFAULT_BASE_TTL: Duration = Duration::from_secs(60 * 60);
/// Upper bound (exclusive) of the random jitter added on top of the base TTL.
pub const DEFAULT_TTL_JITTER: Duration = Duration::from_secs(10 * 60);
/// Cadence of the expiry sweeper and the stats reporter.
pub const DEFAULT_TICK: Duration = Duration::from_secs(60);
/// Size of the per-key load lock pool. Must be a power of two.
pub const DEFAULT_LOAD_LOCK_SHARDS: usize = 256;

/// Cache tuning knobs. All durations accept humantime strings in YAML
/// ("1h", "10m", "30s").
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Fixed part of the expiry window stamped on accepted writes.
    #[serde(with = "humantime_serde")]
    pub base_ttl: Duration,
    /// Random part of the expiry window, uniform in [0, ttl_jitter).
    /// Staggers mass expiry of entries written at the same time.
    #[serde(with = "humantime_serde")]
    pub ttl_jitter: Duration,
    /// How often the sweeper scans for expired entries.
    #[serde(with = "humantime_serde")]
    pub sweep_interval: Duration,
    /// How often cumulative operation counters are logged.
    #[serde(with = "humantime_serde")]
    pub stats_interval: Duration,
    /// Number of mutexes in the load lock pool, power of two.
    pub load_lock_shards: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            base_ttl: DEFAULT_BASE_TTL,
            ttl_jitter: DEFAULT_TTL_JITTER,
            sweep_interval: DEFAULT_TICK,
            stats_interval: DEFAULT_TICK,
            load_lock_shards: DEFAULT_LOAD_LOCK_SHARDS,
        }
    }
}

impl CacheConfig {
    /// Parses a config from a YAML document and validates it.
    pub fn from_yaml_str(raw: &str) -> Result<Self> {
        let cfg: Self = serde_yaml::from_str(raw).context("failed to parse cache config yaml")?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Validates invariants the cache relies on.
    pub fn validate(&self) -> Result<()> {
        ensure!(!self.base_ttl.is_zero(), "base_ttl must be positive");
        ensure!(
            !self.sweep_interval.is_zero(),
            "sweep_interval must be positive"
        );
        ensure!(
            !self.stats_interval.is_zero(),
            "stats_interval must be positive"
        );
        ensure!(
            self.load_lock_shards.is_power_of_two(),
            "load_lock_shards must be a power of two, got {}",
            self.load_lock_shards
        );
        Ok(())
    }

    /// Computes the expiry point for an entry written now: base TTL plus a
    /// uniformly random jitter in [0, ttl_jitter).
    pub fn next_expire_at(&self) -> Instant {
        let jitter = if self.ttl_jitter.is_zero() {
            Duration::ZERO
        } else {
            let nanos = rand::thread_rng().gen_range(0..self.ttl_jitter.as_nanos() as u64);
            Duration::from_nanos(nanos)
        };
        Instant::now() + self.base_ttl + jitter
    }
}
