// Background maintenance tasks for the cache.

pub mod counters;
pub mod reporter;
pub mod sweeper;


pub use counters::{Counters, StatsSnapshot};
pub use reporter::StatsReporter;
pub use sweeper::ExpirySweeper;
