use std::collections::VecDeque;

/// Maximum number of entries kept in the query history
pub const MAX_HISTORY_SIZE: usize = 20;

/// Ordered, deduplicated, bounded query history (most recent first).
///
/// One instance is shared by every query session in the process; callers
/// wrap it in `Arc<Mutex<_>>` so promote-then-evict happens under a single
/// lock acquisition.
#[derive(Debug, Clone, Default)]
pub struct HistoryCache {
    entries: VecDeque<String>,
}

impl HistoryCache {
    pub fn new() -> Self {
        Self { entries: VecDeque::new() }
    }

    /// Restore a cache from previously saved entries.
    ///
    /// Entries are given most-recent-first. Blanks and duplicates are
    /// dropped and anything beyond the capacity is ignored, so a cache
    /// built from an untrusted file still satisfies the invariants.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cache = Self::new();
        for entry in entries {
            let trimmed = entry.as_ref().trim();
            if trimmed.is_empty() || cache.entries.iter().any(|e| e == trimmed) {
                continue;
            }
            if cache.entries.len() == MAX_HISTORY_SIZE {
                break;
            }
            cache.entries.push_back(trimmed.to_string());
        }
        cache
    }

    /// Insert `entry` at the front, removing any existing equal entry first.
    ///
    /// Blank input is a no-op. If the insertion pushes the cache over
    /// capacity, the single oldest entry is evicted (the cache is never
    /// more than one over capacity before an insertion). Returns whether
    /// the cache changed.
    pub fn promote(&mut self, entry: &str) -> bool {
        let trimmed = entry.trim();
        if trimmed.is_empty() {
            return false;
        }

        if let Some(pos) = self.entries.iter().position(|e| e == trimmed) {
            self.entries.remove(pos);
        }
        self.entries.push_front(trimmed.to_string());

        if self.entries.len() > MAX_HISTORY_SIZE {
            self.entries.pop_back();
        }

        true
    }

    /// Entry at `index` (0 = most recent), or None if out of range
    pub fn entry_at(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|s| s.as_str())
    }

    /// Iterate entries most-recent-first
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
