//! Error definitions.

use thiserror::Error;

/// Errors surfaced by the cache. The only failure source is the backing
/// store; everything else the cache does is infallible. "Key not found" is
/// not an error, it is a successful negative entry.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("load config file release failed: namespace={namespace} group={group} file_name={file_name}: {source}")]
    Load {
        namespace: String,
        group: String,
        file_name: String,
        #[source]
        source: anyhow::Error,
    },
}
