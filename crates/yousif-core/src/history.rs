use yousif_types::SearchHistoryItem;

pub const DEFAULT_HISTORY_LIMIT: usize = 10;

/// Recently searched words, most recent first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHistory {
    items: Vec<SearchHistoryItem>,
    limit: usize,
}

impl SearchHistory {
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }

    pub fn with_limit(limit: usize) -> Self {
        Self {
            items: Vec::new(),
            limit: limit.max(1),
        }
    }

    /// Rebuild from persisted items, re-applying dedup and the bound
    pub fn from_items(items: Vec<SearchHistoryItem>, limit: usize) -> Self {
        let mut history = Self::with_limit(limit);
        for item in items {
            let seen = history
                .items
                .iter()
                .any(|h| h.word.to_lowercase() == item.word.to_lowercase());
            if !seen && history.items.len() < history.limit {
                history.items.push(item);
            }
        }
        history
    }

    /// Insert or promote `word` to the front
    pub fn record(&mut self, word: &str, timestamp: i64) {
        let lowered = word.to_lowercase();
        self.items.retain(|h| h.word.to_lowercase() != lowered);
        self.items.insert(
            0,
            SearchHistoryItem {
                word: word.to_string(),
                timestamp,
            },
        );
        self.items.truncate(self.limit);
    }

    pub fn items(&self) -> &[SearchHistoryItem] {
        &self.items
    }

    /// 1-based, matching what the UI shows
    pub fn nth(&self, n: usize) -> Option<&SearchHistoryItem> {
        n.checked_sub(1).and_then(|i| self.items.get(i))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for SearchHistory {
    fn default() -> Self {
        Self::new()
    }
}
