//! Clipboard integration: seed a query from selected text, copy results out.

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Maximum text size we will copy (1MB); results are small, anything bigger
/// indicates a bug upstream
const MAX_COPY_SIZE: usize = 1024 * 1024;

/// Maximum clipboard text considered for query seeding; longer content is
/// clearly not a word selection
const MAX_SEED_SIZE: usize = 4096;

/// Trait for clipboard operations (allows mocking in tests)
trait ClipboardProvider {
    fn get_text(&mut self) -> Result<String>;
    fn set_text(&mut self, text: &str) -> Result<()>;
}

struct SystemClipboard {
    clipboard: Clipboard,
}

impl SystemClipboard {
    fn new() -> Result<Self> {
        let clipboard = Clipboard::new().context("Failed to initialize clipboard")?;
        Ok(Self { clipboard })
    }
}

impl ClipboardProvider for SystemClipboard {
    fn get_text(&mut self) -> Result<String> {
        self.clipboard.get_text().context("Failed to read clipboard contents")
    }

    fn set_text(&mut self, text: &str) -> Result<()> {
        self.clipboard.set_text(text).context("Failed to set clipboard contents")?;
        Ok(())
    }
}

fn validate_copy_text(text: &str) -> Result<()> {
    if text.is_empty() {
        anyhow::bail!("Cannot copy empty text to clipboard");
    }
    if text.len() > MAX_COPY_SIZE {
        anyhow::bail!("Text too large for clipboard ({} bytes, max {})", text.len(), MAX_COPY_SIZE);
    }
    Ok(())
}

fn seed_with_provider(provider: &mut dyn ClipboardProvider) -> Option<String> {
    let text = provider.get_text().ok()?;
    if text.len() > MAX_SEED_SIZE {
        return None;
    }
    // No caret exists for clipboard text; anchor at the start, so a
    // multi-word selection yields its first word
    crate::query::word_at(&text, 0)
}

fn copy_with_provider(text: &str, provider: &mut dyn ClipboardProvider) -> Result<()> {
    validate_copy_text(text)?;
    provider.set_text(text)?;
    Ok(())
}

/// Read the clipboard and extract a single seed word from it.
///
/// Returns None when the clipboard is unavailable, empty, blank, or holds
/// something too large to be a word selection. Never fails: seeding is
/// best-effort.
pub fn clipboard_seed_word() -> Option<String> {
    let mut provider = SystemClipboard::new().ok()?;
    seed_with_provider(&mut provider)
}

/// Copy text to the system clipboard.
///
/// # Errors
/// Returns error if the text is empty or oversized, or the system
/// clipboard is unavailable (e.g. headless environment).
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    // Validate first, before initializing clipboard (better error messages in CI)
    validate_copy_text(text)?;
    let mut provider = SystemClipboard::new()?;
    copy_with_provider(text, &mut provider)
}
