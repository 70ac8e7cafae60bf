//! History persistence: load/save with atomic writes

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::cache::HistoryCache;
use crate::utils::get_data_dir;

/// History schema version for invalidation on format changes
pub const HISTORY_VERSION: u32 = 1;

const HISTORY_FILENAME: &str = "history.json";

/// On-disk envelope for saved history
#[derive(Debug, Clone, Serialize, Deserialize)]
struct HistoryFile {
    version: u32,
    saved_at: DateTime<Utc>,
    entries: Vec<String>,
}

/// Path to the history file inside the data directory (created if missing)
pub fn history_path() -> Result<PathBuf> {
    let data_dir = get_data_dir()?;
    if !data_dir.exists() {
        fs::create_dir_all(&data_dir).context("Failed to create data directory")?;
    }
    Ok(data_dir.join(HISTORY_FILENAME))
}

/// Load saved history, returning an empty cache when there is nothing usable.
///
/// A missing file is normal (first run). A corrupt or version-mismatched
/// file is reported on stderr and treated the same way rather than failing
/// startup.
pub fn load_history() -> Result<HistoryCache> {
    let path = history_path()?;
    if !path.exists() {
        return Ok(HistoryCache::new());
    }

    let json = fs::read_to_string(&path).context("Failed to read history file")?;
    let file: HistoryFile = match serde_json::from_str(&json) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Warning: ignoring corrupt history file ({})", err);
            return Ok(HistoryCache::new());
        }
    };

    if file.version != HISTORY_VERSION {
        eprintln!(
            "History version mismatch (expected {}, found {}), starting fresh",
            HISTORY_VERSION, file.version
        );
        return Ok(HistoryCache::new());
    }

    Ok(HistoryCache::from_entries(file.entries))
}

/// Save history atomically (temp file + rename)
pub fn save_history(cache: &HistoryCache) -> Result<()> {
    let path = history_path()?;
    let temp = path.with_extension("json.tmp");

    let file = HistoryFile {
        version: HISTORY_VERSION,
        saved_at: Utc::now(),
        entries: cache.iter().map(|e| e.to_string()).collect(),
    };
    let json = serde_json::to_string_pretty(&file).context("Failed to serialize history")?;

    fs::write(&temp, json).context("Failed to write history temp file")?;
    fs::rename(&temp, &path).context("Failed to rename history temp file")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::env;
    use std::sync::{Mutex, MutexGuard};

    use super::*;

    // WORDBOOK_DATA_DIR is process-global; serialize tests that set it
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn set_data_dir(dir: &std::path::Path) -> MutexGuard<'static, ()> {
        let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        // SAFETY: guarded by ENV_LOCK, no concurrent reader in these tests
        unsafe {
            env::set_var("WORDBOOK_DATA_DIR", dir);
        }
        guard
    }

    #[test]
    fn test_save_then_load_preserves_order() {
        let temp = tempfile::TempDir::new().unwrap();
        let _guard = set_data_dir(temp.path());

        let mut cache = HistoryCache::new();
        cache.promote("alpha");
        cache.promote("beta");
        save_history(&cache).unwrap();

        let loaded = load_history().unwrap();
        let entries: Vec<&str> = loaded.iter().collect();
        assert_eq!(entries, vec!["beta", "alpha"]);
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp = tempfile::TempDir::new().unwrap();
        let _guard = set_data_dir(temp.path());

        let loaded = load_history().unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_load_corrupt_file_is_empty() {
        let temp = tempfile::TempDir::new().unwrap();
        let _guard = set_data_dir(temp.path());

        fs::write(temp.path().join(HISTORY_FILENAME), "not json").unwrap();
        let loaded = load_history().unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_load_version_mismatch_is_empty() {
        let temp = tempfile::TempDir::new().unwrap();
        let _guard = set_data_dir(temp.path());

        let stale = serde_json::json!({
            "version": 999,
            "saved_at": Utc::now(),
            "entries": ["old"],
        });
        fs::write(temp.path().join(HISTORY_FILENAME), stale.to_string()).unwrap();

        let loaded = load_history().unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let temp = tempfile::TempDir::new().unwrap();
        let _guard = set_data_dir(temp.path());

        let mut cache = HistoryCache::new();
        cache.promote("word");
        save_history(&cache).unwrap();

        let leftovers: Vec<_> = fs::read_dir(temp.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().is_some_and(|ext| ext == "tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }
}
