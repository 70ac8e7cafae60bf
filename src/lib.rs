//! Wordbook - interactive dictionary lookup with a bounded query history
//!
//! This library implements the pieces behind the `wordbook` binary:
//!
//! - A deduplicated, bounded, most-recently-used history of past queries,
//!   shared across sessions and persisted between runs
//! - Query normalization (trimming, blank rejection, word extraction from
//!   multi-word selections)
//! - A per-UI-instance query session that correlates asynchronous lookup
//!   responses against the current query, so stale responses and responses
//!   for destroyed sessions are silently dropped
//! - A pluggable async lookup client, with a JSON dictionary-file
//!   implementation built in
//!
//! # Example
//!
//! ```no_run
//! use std::sync::{Arc, Mutex};
//!
//! use wordbook::history::HistoryCache;
//! use wordbook::lookup::DictFileClient;
//! use wordbook::query::QuerySession;
//!
//! # fn demo() -> anyhow::Result<()> {
//! let runtime = tokio::runtime::Runtime::new()?;
//! let history = Arc::new(Mutex::new(HistoryCache::new()));
//! let client = Arc::new(DictFileClient::from_path("dict.json".as_ref())?);
//!
//! let session = QuerySession::new(Arc::clone(&history), client, runtime.handle().clone());
//! session.submit("hello");
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod clipboard;
pub mod history;
pub mod lookup;
pub mod models;
pub mod query;
pub mod tui;
pub mod utils;

// Re-export commonly used types
pub use history::{HistoryCache, MAX_HISTORY_SIZE};
pub use lookup::{DictFileClient, LookupClient, LookupError};
pub use models::{LookupResult, WebExplain};
pub use query::{QuerySession, SessionState};
