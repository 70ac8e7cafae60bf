//! Dictionary-file lookup client.
//!
//! Serves lookups from a JSON file mapping lowercase headwords to entries:
//!
//! ```json
//! {
//!   "hello": {
//!     "phonetic": "həˈləʊ",
//!     "translations": ["你好"],
//!     "explains": ["int. 你好；喂"],
//!     "web": [{"key": "hello world", "values": ["世界你好"]}]
//!   }
//! }
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{LookupClient, LookupError};
use crate::models::{LookupResult, WebExplain};

/// One headword entry in the dictionary file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictEntry {
    #[serde(default)]
    pub phonetic: Option<String>,
    #[serde(default)]
    pub translations: Vec<String>,
    #[serde(default)]
    pub explains: Vec<String>,
    #[serde(default)]
    pub web: Vec<WebExplain>,
}

/// Lookup client backed by an in-memory dictionary loaded from disk
pub struct DictFileClient {
    entries: HashMap<String, DictEntry>,
}

impl DictFileClient {
    /// Load a dictionary from a JSON file
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read dictionary file {}", path.display()))?;
        let entries: HashMap<String, DictEntry> =
            serde_json::from_str(&json).context("Failed to parse dictionary JSON")?;
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl LookupClient for DictFileClient {
    async fn search(&self, query: &str) -> Result<LookupResult, LookupError> {
        let entry = self
            .entries
            .get(&query.to_lowercase())
            .ok_or_else(|| LookupError::NotFound(query.to_string()))?;

        Ok(LookupResult {
            query: query.to_string(),
            phonetic: entry.phonetic.clone(),
            translations: entry.translations.clone(),
            explains: entry.explains.clone(),
            web: entry.web.clone(),
        })
    }
}
