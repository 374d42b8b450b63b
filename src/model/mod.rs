//! Record and cache entry models.

pub mod entry;
pub mod key;
pub mod release;


pub use entry::Entry;
pub use key::{file_id, FILE_ID_SEPARATOR};
pub use release::ConfigFileRelease;
