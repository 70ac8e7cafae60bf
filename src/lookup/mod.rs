//! Lookup client abstraction.
//!
//! The lookup protocol is deliberately opaque: a client takes a query
//! string and eventually produces either a structured [`LookupResult`] or
//! a [`LookupError`]. At most one response per `search` call is assumed.
//! [`DictFileClient`] is the built-in implementation backed by a local
//! JSON dictionary file.

pub mod dict_file;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::LookupResult;

pub use dict_file::DictFileClient;

/// Error produced by a failed lookup.
///
/// These never propagate past the session settle boundary; they are
/// converted to a user-visible message instead.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("no dictionary entry for \"{0}\"")]
    NotFound(String),
    #[error("lookup service error: {0}")]
    Service(String),
}

/// Asynchronous lookup service.
///
/// Implementations must be shareable across tasks; sessions hold clients
/// behind `Arc<dyn LookupClient>`.
#[async_trait]
pub trait LookupClient: Send + Sync {
    /// Look up `query`, resolving to a structured result or an error.
    ///
    /// The returned result echoes the query string it was produced for.
    async fn search(&self, query: &str) -> Result<LookupResult, LookupError>;
}
