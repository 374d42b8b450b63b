//! Cache entry model.

use std::time::Instant;

use bytes::Bytes;

use super::release::ConfigFileRelease;

/// Entry is an immutable snapshot of a config-file release.
///
/// Entries are never mutated in place: any change replaces the stored entry
/// wholesale. Cloning is cheap, the payload is a [`Bytes`] handle.
#[derive(Debug, Clone)]
pub struct Entry {
    pub content: Bytes,
    pub checksum: String,
    pub version: u64,
    /// Absolute point after which the entry is stale and subject to sweeping.
    pub expire_at: Instant,
    /// Marks a negative entry recording "no record exists for this key".
    /// Distinct from a real entry with empty content.
    pub empty: bool,
}

impl Entry {
    /// Builds a positive entry from a release record.
    pub fn positive(release: &ConfigFileRelease, expire_at: Instant) -> Self {
        Self {
            content: release.content.clone(),
            checksum: release.checksum.clone(),
            version: release.version,
            expire_at,
            empty: false,
        }
    }

    /// Builds a negative placeholder shielding the store from repeated
    /// lookups of a non-existent key.
    pub fn negative(expire_at: Instant) -> Self {
        Self {
            content: Bytes::new(),
            checksum: String::new(),
            version: 0,
            expire_at,
            empty: true,
        }
    }

    /// Whether the entry is past its expiry point.
    pub fn is_expired(&self, now: Instant) -> bool {
        now > self.expire_at
    }
}
