//! Bounded, deduplicated query history.
//!
//! The cache is an in-memory MRU list shared by every query session in the
//! process (one instance, injected by reference). Persistence snapshots the
//! cache to a versioned JSON file in the data directory so history survives
//! across runs; a missing or corrupt file degrades to an empty cache.

pub mod cache;
pub mod persistence;

pub use cache::{HistoryCache, MAX_HISTORY_SIZE};
pub use persistence::{history_path, load_history, save_history};
