pub mod cache;
pub mod config;
pub mod error;
pub mod loader;
pub mod model;
pub mod store;
pub mod workers;

#[cfg(test)]
mod tests;

pub use cache::FileCache;
pub use config::CacheConfig;
pub use error::CacheError;
pub use loader::ReleaseStore;
pub use model::{ConfigFileRelease, Entry};
pub use workers::StatsSnapshot;
