//! Config-file release record.

use bytes::Bytes;

/// A released configuration file as returned by the backing store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFileRelease {
    pub namespace: String,
    pub group: String,
    pub file_name: String,
    /// Raw file payload.
    pub content: Bytes,
    /// Hex digest of the content, assigned by the owner of the record.
    pub checksum: String,
    /// Owner-assigned release version. Higher versions supersede lower ones.
    pub version: u64,
}

impl ConfigFileRelease {
    /// Map key for this record's identity.
    pub fn file_id(&self) -> String {
        super::key::file_id(&self.namespace, &self.group, &self.file_name)
    }
}
