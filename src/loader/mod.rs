//! Coordinated loading from the backing store on cache miss.

pub mod backend;
pub mod coordinator;
pub mod lock_pool;


pub use backend::ReleaseStore;
pub use coordinator::LoadCoordinator;
pub use lock_pool::LockPool;
