#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    use bytes::Bytes;

    use crate::config::CacheConfig;
    use crate::model::{ConfigFileRelease, Entry};
    use crate::store::CacheStore;
    use crate::workers::Counters;

    fn setup() -> (CacheStore, Arc<Counters>) {
        let counters = Arc::new(Counters::new());
        (
            CacheStore::new(CacheConfig::default(), counters.clone()),
            counters,
        )
    }

    fn release(version: u64, content: &str) -> ConfigFileRelease {
        ConfigFileRelease {
            namespace: "ns".to_string(),
            group: "grp".to_string(),
            file_name: "app.yaml".to_string(),
            content: Bytes::from(content.to_string()),
            checksum: format!("sum-{version}"),
            version,
        }
    }

    #[test]
    fn test_put_then_get() {
        let (store, counters) = setup();
        store.put(&release(1, "a"));

        let entry = store.get("ns", "grp", "app.yaml").expect("entry stored");
        assert_eq!(entry.content, Bytes::from_static(b"a"));
        assert_eq!(entry.version, 1);
        assert!(!entry.empty);
        assert_eq!(counters.puts.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_get_miss_returns_none() {
        let (store, _) = setup();
        assert!(store.get("ns", "grp", "missing.yaml").is_none());
    }

    #[test]
    fn test_put_equal_version_is_ignored() {
        let (store, _) = setup();
        store.put(&release(1, "a"));
        store.put(&release(1, "b"));

        let entry = store.get("ns", "grp", "app.yaml").unwrap();
        assert_eq!(entry.content, Bytes::from_static(b"a"));
    }

    #[test]
    fn test_put_lower_version_is_ignored() {
        let (store, _) = setup();
        store.put(&release(5, "v5"));
        store.put(&release(4, "v4"));

        let entry = store.get("ns", "grp", "app.yaml").unwrap();
        assert_eq!(entry.version, 5);
        assert_eq!(entry.content, Bytes::from_static(b"v5"));
    }

    #[test]
    fn test_put_higher_version_wins() {
        let (store, _) = setup();
        store.put(&release(1, "a"));
        store.put(&release(2, "b"));

        let entry = store.get("ns", "grp", "app.yaml").unwrap();
        assert_eq!(entry.version, 2);
        assert_eq!(entry.content, Bytes::from_static(b"b"));
    }

    #[test]
    fn test_rejected_put_keeps_existing_expiry() {
        let (store, _) = setup();
        store.put(&release(2, "a"));
        let before = store.get("ns", "grp", "app.yaml").unwrap().expire_at;

        store.put(&release(1, "stale"));
        let after = store.get("ns", "grp", "app.yaml").unwrap().expire_at;
        assert_eq!(before, after);
    }

    #[test]
    fn test_put_overrides_negative_entry_regardless_of_version() {
        let (store, _) = setup();
        let id = release(0, "").file_id();
        store.insert(id, Entry::negative(Instant::now() + Duration::from_secs(60)));

        // Version 0 would lose against any positive entry, but negative
        // placeholders always yield.
        store.put(&release(0, "x"));

        let entry = store.get("ns", "grp", "app.yaml").unwrap();
        assert!(!entry.empty);
        assert_eq!(entry.content, Bytes::from_static(b"x"));
    }

    #[test]
    fn test_remove_then_get_misses() {
        let (store, counters) = setup();
        store.put(&release(1, "a"));
        store.remove("ns", "grp", "app.yaml");

        assert!(store.get("ns", "grp", "app.yaml").is_none());
        assert_eq!(counters.removes.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_remove_absent_key_is_noop() {
        let (store, _) = setup();
        store.remove("ns", "grp", "never-there.yaml");
        assert!(store.is_empty());
    }

    #[test]
    fn test_sweep_purges_only_expired_entries() {
        let (store, counters) = setup();
        let now = Instant::now();

        store.insert(
            "ns+grp+stale.yaml".to_string(),
            Entry::negative(now - Duration::from_secs(1)),
        );
        store.insert(
            "ns+grp+live.yaml".to_string(),
            Entry::negative(now + Duration::from_secs(3600)),
        );

        let purged = store.sweep_expired(now);
        assert_eq!(purged, 1);
        assert_eq!(store.len(), 1);
        assert!(store.get_by_id("ns+grp+stale.yaml").is_none());
        assert!(store.get_by_id("ns+grp+live.yaml").is_some());
        assert_eq!(counters.expires.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_sweep_with_nothing_expired_counts_nothing() {
        let (store, counters) = setup();
        store.put(&release(1, "a"));

        assert_eq!(store.sweep_expired(Instant::now()), 0);
        assert_eq!(counters.expires.load(Ordering::Relaxed), 0);
        assert_eq!(store.len(), 1);
    }
}
