//! Backing store contract.

use crate::model::ConfigFileRelease;

/// The persistent store the cache reads through to.
///
/// `Ok(None)` means the key does not exist, which is a valid outcome and is
/// cached as a negative entry. Errors are propagated to the caller and never
/// cached. Deadlines and retries are the implementation's business, the
/// cache adds none of its own.
#[async_trait::async_trait]
pub trait ReleaseStore: Send + Sync {
    async fn get_release(
        &self,
        namespace: &str,
        group: &str,
        file_name: &str,
    ) -> Result<Option<ConfigFileRelease>, anyhow::Error>;
}
