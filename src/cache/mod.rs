//! Cache Module
//!
//! In-memory response cache with time-based expiry.

mod entry;
mod response_cache;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::CacheEntry;
pub use response_cache::ResponseCache;
pub use store::CacheStore;
