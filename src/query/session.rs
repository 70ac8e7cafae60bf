//! Per-UI-instance query session and async response correlation.
//!
//! A session tracks the single authoritative query for one UI instance.
//! Submitting a query promotes it into the shared history, marks the
//! session Querying, and spawns the lookup as a tokio task. The task holds
//! only a [`Weak`] handle to the session state, so:
//!
//! - dropping the session (closing its UI) never blocks on a pending
//!   lookup, and a late response becomes a clean no-op,
//! - a response is applied only when its echoed query string still equals
//!   the session's current query; anything else is silently discarded.
//!
//! String-equality correlation is sufficient because at most one query is
//! current per session at a time: a newer submission always overwrites
//! `current_query` before its response can arrive. Resubmitting the exact
//! same string while a prior identical request is pending means both
//! responses match on arrival and the last one wins, which is an
//! idempotent overwrite of the same content.
//!
//! There is no cancellation or timeout primitive: superseding the current
//! query and weak-handle upgrade failure together make stale and orphaned
//! responses unobservable. A lookup that never resolves leaves the session
//! Querying.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use tokio::runtime::Handle;

use crate::history::HistoryCache;
use crate::lookup::{LookupClient, LookupError};
use crate::models::LookupResult;
use crate::query::normalizer::normalize;

/// Observable session state, reified as one enum so that illegal
/// combinations (e.g. a querying indicator alongside a settled result)
/// are unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// No query in flight and nothing settled yet
    Idle,
    /// A lookup has been dispatched for the current query
    Querying,
    /// The response for the current query arrived successfully
    Success(LookupResult),
    /// The lookup for the current query failed; holds the display message
    Failed(String),
}

#[derive(Debug)]
struct SessionInner {
    current_query: Option<String>,
    state: SessionState,
}

/// One query session, owned by its UI instance.
///
/// Cloning is deliberately not provided: the UI owns the session, and the
/// only other references to its state are the weak handles held by pending
/// lookup tasks.
pub struct QuerySession {
    inner: Arc<Mutex<SessionInner>>,
    history: Arc<Mutex<HistoryCache>>,
    client: Arc<dyn LookupClient>,
    handle: Handle,
}

impl QuerySession {
    pub fn new(
        history: Arc<Mutex<HistoryCache>>,
        client: Arc<dyn LookupClient>,
        handle: Handle,
    ) -> Self {
        Self {
            inner: Arc::new(Mutex::new(SessionInner {
                current_query: None,
                state: SessionState::Idle,
            })),
            history,
            client,
            handle,
        }
    }

    /// Submit raw input as a new query.
    ///
    /// Blank input is rejected without touching history, the current query,
    /// or the lookup client. Otherwise the trimmed query is promoted into
    /// history, becomes the session's current query, the state moves to
    /// Querying (clearing any displayed result), and the lookup is
    /// dispatched. Returns whether a lookup was issued.
    pub fn submit(&self, raw: &str) -> bool {
        let Some(query) = normalize(raw) else {
            return false;
        };

        lock(&self.history).promote(&query);

        {
            let mut inner = lock(&self.inner);
            inner.current_query = Some(query.clone());
            inner.state = SessionState::Querying;
        }

        let weak = Arc::downgrade(&self.inner);
        let client = Arc::clone(&self.client);
        self.handle.spawn(async move {
            let outcome = client.search(&query).await;
            settle(&weak, &query, outcome);
        });

        true
    }

    /// Snapshot of the current state
    pub fn state(&self) -> SessionState {
        lock(&self.inner).state.clone()
    }

    /// The query currently considered authoritative, if any
    pub fn current_query(&self) -> Option<String> {
        lock(&self.inner).current_query.clone()
    }

    /// Clear the current query and return to Idle.
    ///
    /// Any in-flight response fails the correlation check on arrival.
    pub fn reset(&self) {
        let mut inner = lock(&self.inner);
        inner.current_query = None;
        inner.state = SessionState::Idle;
    }
}

/// Apply a lookup outcome to the session the response belongs to, if that
/// session still exists and still considers `query` current.
fn settle(
    weak: &Weak<Mutex<SessionInner>>,
    query: &str,
    outcome: Result<LookupResult, LookupError>,
) {
    // Session dropped while the lookup was pending: no-op, no panic
    let Some(inner) = weak.upgrade() else {
        return;
    };

    let mut inner = lock(&inner);
    match &inner.current_query {
        Some(current) if current == query => {}
        // Stale response: a newer query superseded this one, or the
        // session was reset. Dropped without any observable effect.
        _ => return,
    }

    inner.state = match outcome {
        Ok(result) => SessionState::Success(result),
        Err(err) => SessionState::Failed(err.to_string()),
    };
}

// A poisoned lock only means a panic elsewhere; the state itself is a
// plain value, so keep going with it.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
