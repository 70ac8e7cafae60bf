//! Query normalization and session correlation.
//!
//! This is the core of the tool:
//!
//! - [`normalizer`] turns raw typed or selected text into a canonical query
//!   token (or nothing, when the input is blank)
//! - [`session`] tracks the single authoritative query per UI instance and
//!   guarantees that only the response matching the *current* query is ever
//!   applied, however late or out of order responses arrive

pub mod normalizer;
pub mod session;

pub use normalizer::{normalize, word_at};
pub use session::{QuerySession, SessionState};
