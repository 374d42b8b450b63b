// Shared test support code.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::sync::Once;

use bytes::Bytes;
use tokio::sync::Mutex;

use crate::loader::ReleaseStore;
use crate::model::ConfigFileRelease;

static INIT_LOGS: Once = Once::new();

/// Installs a test subscriber once per process. RUST_LOG controls verbosity.
pub fn init_logs() {
    INIT_LOGS.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .try_init();
    });
}

/// Builds a release record for the default test identity.
pub fn release(file_name: &str, version: u64, content: &str) -> ConfigFileRelease {
    ConfigFileRelease {
        namespace: "ns".to_string(),
        group: "grp".to_string(),
        file_name: file_name.to_string(),
        content: Bytes::from(content.to_string()),
        checksum: format!("sum-{version}"),
        version,
    }
}

/// Backing store fake whose contents can be swapped mid-test.
pub struct FakeStore {
    calls: AtomicU64,
    current: Mutex<Option<ConfigFileRelease>>,
}

impl FakeStore {
    pub fn empty() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicU64::new(0),
            current: Mutex::new(None),
        })
    }

    pub fn with(release: ConfigFileRelease) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicU64::new(0),
            current: Mutex::new(Some(release)),
        })
    }

    pub async fn set(&self, release: Option<ConfigFileRelease>) {
        *self.current.lock().await = release;
    }

    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl ReleaseStore for FakeStore {
    async fn get_release(
        &self,
        _namespace: &str,
        _group: &str,
        file_name: &str,
    ) -> Result<Option<ConfigFileRelease>, anyhow::Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let current = self.current.lock().await;
        Ok(current
            .as_ref()
            .filter(|rel| rel.file_name == file_name)
            .cloned())
    }
}
