use std::sync::Arc;

use yousif_types::{SearchHistoryItem, Theme};

use crate::error::StoreError;
use crate::history::SearchHistory;
use crate::store::KeyValueStore;

pub const HISTORY_KEY: &str = "yousif_history";
pub const THEME_KEY: &str = "yousif_theme";

/// Theme and search history persistence.
///
/// Every operation fails soft: read errors fall back to defaults and write
/// errors are logged, none of them reach the caller.
#[derive(Clone)]
pub struct PreferenceStore {
    store: Arc<dyn KeyValueStore>,
    history_limit: usize,
}

impl PreferenceStore {
    pub fn new(store: Arc<dyn KeyValueStore>, history_limit: usize) -> Self {
        Self {
            store,
            history_limit,
        }
    }

    pub fn load_history(&self) -> SearchHistory {
        match self.read_history() {
            Ok(history) => history,
            Err(e) => {
                tracing::error!("Failed to load history: {}", e);
                SearchHistory::with_limit(self.history_limit)
            }
        }
    }

    fn read_history(&self) -> Result<SearchHistory, StoreError> {
        let Some(raw) = self.store.get(HISTORY_KEY)? else {
            return Ok(SearchHistory::with_limit(self.history_limit));
        };

        let items: Vec<SearchHistoryItem> = serde_json::from_str(&raw)?;
        tracing::debug!("Loaded {} history items", items.len());
        Ok(SearchHistory::from_items(items, self.history_limit))
    }

    pub fn save_history(&self, history: &SearchHistory) {
        let result = serde_json::to_string(history.items())
            .map_err(StoreError::from)
            .and_then(|json| self.store.set(HISTORY_KEY, &json));

        if let Err(e) = result {
            tracing::error!("Failed to save history: {}", e);
        }
    }

    /// Explicitly stored theme, if any
    pub fn stored_theme(&self) -> Option<Theme> {
        match self.store.get(THEME_KEY) {
            Ok(value) => value.as_deref().and_then(Theme::from_token),
            Err(e) => {
                tracing::error!("Failed to load theme: {}", e);
                None
            }
        }
    }

    /// Stored value wins, then the system preference, light otherwise
    pub fn load_theme(&self, system_prefers_dark: bool) -> Theme {
        resolve_theme(self.stored_theme(), system_prefers_dark)
    }

    pub fn save_theme(&self, theme: Theme) {
        if let Err(e) = self.store.set(THEME_KEY, theme.as_token()) {
            tracing::error!("Failed to save theme: {}", e);
        }
    }
}

pub fn resolve_theme(stored: Option<Theme>, system_prefers_dark: bool) -> Theme {
    stored.unwrap_or(Theme::from_dark(system_prefers_dark))
}

/// Terminal colour-scheme hint, `COLORFGBG="15;0"` means light text on dark
pub fn system_prefers_dark() -> bool {
    std::env::var("COLORFGBG")
        .ok()
        .as_deref()
        .and_then(prefers_dark_from_colorfgbg)
        .unwrap_or(false)
}

pub fn prefers_dark_from_colorfgbg(value: &str) -> Option<bool> {
    let background: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    // 0-6 and 8 are the dark entries of the 16 colour palette
    Some(background <= 6 || background == 8)
}
