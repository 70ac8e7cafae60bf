//! Data models for dictionary lookup results.
//!
//! [`LookupResult`] is the structured document a lookup produces: header
//! information (the echoed query and an optional phonetic spelling), plain
//! translations, sense explanations, and web-derived phrase entries.

pub mod result;

pub use result::{LookupResult, WebExplain};
