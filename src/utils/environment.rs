use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Get the wordbook data directory.
///
/// Honors the `WORDBOOK_DATA_DIR` override (used by tests and scripting),
/// falling back to the platform data directory.
pub fn get_data_dir() -> Result<PathBuf> {
    if let Ok(dir) = env::var("WORDBOOK_DATA_DIR") {
        return Ok(PathBuf::from(dir));
    }

    let base = dirs::data_dir().context("Failed to resolve platform data directory")?;
    Ok(base.join("wordbook"))
}
