use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Learning content for one searched word
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordDefinition {
    pub word: String,
    pub simple_english_meaning: String,
    /// Urdu explanation written in English letters
    pub roman_explanation: String,
    /// 2-3 related meanings in Urdu script
    pub urdu_meanings: Vec<String>,
    pub sentences: Vec<String>,
    /// Lowercased sentence word -> short meaning, drives the tooltips
    pub sentence_words_dictionary: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_word: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_correction: Option<bool>,
}

impl WordDefinition {
    /// Suggested spelling when the model corrected the query
    pub fn correction(&self) -> Option<&str> {
        if self.is_correction != Some(true) {
            return None;
        }

        self.suggested_word
            .as_deref()
            .map(str::trim)
            .filter(|w| !w.is_empty())
    }

    pub fn meaning_of(&self, key: &str) -> Option<&str> {
        self.sentence_words_dictionary.get(key).map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHistoryItem {
    pub word: String,
    /// Epoch milliseconds
    pub timestamp: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark(dark: bool) -> Self {
        if dark { Theme::Dark } else { Theme::Light }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Persisted token
    pub fn as_token(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

/// Events flowing into the app loop
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// A line typed into the search box and submitted
    Submit(String),
    /// Search for an explicit word, bypassing the input box
    SearchWord(String),
    /// Search the n-th (1-based) recently explored word
    SearchHistory(usize),
    /// Search the n-th (1-based) interactive sentence word
    LookWord(usize),
    HoverWord(usize),
    LeaveWord,
    NewSearch,
    ClearQuery,
    ToggleTheme,
    ShowHistory,
    ConnectivityChanged(bool),
    FetchAsset(String),
    Quit,
}

/// Sentence word a tooltip is anchored to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipTarget {
    pub sentence: usize,
    pub token: usize,
    pub text: String,
    pub meaning: String,
}

/// Events flowing from the app loop to the terminal UI
#[derive(Debug, Clone)]
pub enum UiEvent {
    Home {
        history: Vec<SearchHistoryItem>,
    },
    Loading {
        query: String,
    },
    ShowDefinition(WordDefinition),
    ShowError(String),
    ShowHistory(Vec<SearchHistoryItem>),
    QueryChanged(String),
    ShowTooltip(TooltipTarget),
    HideTooltip,
    ScrollToTop,
    FocusInput,
    ThemeChanged(Theme),
    Connectivity(bool),
    Status(String),
    Shutdown,
}
