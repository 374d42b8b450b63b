//! Concurrent key→entry cache storage.

pub mod store;

#[cfg(test)]
mod store_test;

pub use store::CacheStore;
