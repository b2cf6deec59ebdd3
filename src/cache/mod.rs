//! Cache Module
//!
//! Provides an in-memory response cache whose entries expire on a fixed reap tick.

mod entry;
mod expiring;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use expiring::Cache;
pub use store::CacheStore;
