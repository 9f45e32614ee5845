use yousif_core::SearchHistory;
use yousif_core::preprocess::normalize_query;
use yousif_gemini::FetchError;
use yousif_types::WordDefinition;

pub const OFFLINE_MESSAGE: &str =
    "You appear to be offline. Please connect to the internet to search for new words.";
pub const NOT_FOUND_MESSAGE: &str = "I couldn't find this word. Check the spelling maybe?";

#[derive(Debug, Clone, PartialEq)]
pub enum SearchState {
    Idle,
    Loading { query: String },
    Success(WordDefinition),
    Error(String),
}

/// Identifies one submitted search, only the newest one may land
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub generation: u64,
    pub term: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing to search for
    Ignored,
    Offline,
    Started(SearchTicket),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishOutcome {
    /// Superseded by a newer search or a reset, dropped
    Stale,
    Succeeded,
    Failed,
}

/// Loading/error/result state of the search screen
pub struct SearchController {
    state: SearchState,
    query: String,
    history: SearchHistory,
    generation: u64,
}

impl SearchController {
    pub fn new(history: SearchHistory) -> Self {
        Self {
            state: SearchState::Idle,
            query: String::new(),
            history,
            generation: 0,
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn history(&self) -> &SearchHistory {
        &self.history
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, SearchState::Loading { .. })
    }

    pub fn current_definition(&self) -> Option<&WordDefinition> {
        match &self.state {
            SearchState::Success(definition) => Some(definition),
            _ => None,
        }
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    /// Start a search for `word`, or for the input box when `None`
    pub fn submit(&mut self, word: Option<&str>, online: bool) -> SubmitOutcome {
        let term = normalize_query(word.unwrap_or(&self.query));
        if term.is_empty() {
            return SubmitOutcome::Ignored;
        }

        self.generation += 1;

        if !online {
            self.state = SearchState::Error(OFFLINE_MESSAGE.to_string());
            return SubmitOutcome::Offline;
        }

        self.query = term.clone();
        self.state = SearchState::Loading {
            query: term.clone(),
        };

        SubmitOutcome::Started(SearchTicket {
            generation: self.generation,
            term,
        })
    }

    pub fn finish(
        &mut self,
        ticket: &SearchTicket,
        result: Result<WordDefinition, FetchError>,
        now_ms: i64,
    ) -> FinishOutcome {
        if ticket.generation != self.generation || !self.is_loading() {
            tracing::debug!(
                "Dropping stale result for '{}' (generation {}, current {})",
                ticket.term,
                ticket.generation,
                self.generation
            );
            return FinishOutcome::Stale;
        }

        match result {
            Ok(definition) => {
                self.history.record(&definition.word, now_ms);
                self.state = SearchState::Success(definition);
                FinishOutcome::Succeeded
            }
            Err(e) => {
                tracing::error!("Search for '{}' failed: {}", ticket.term, e);
                self.state = SearchState::Error(user_message(&e));
                FinishOutcome::Failed
            }
        }
    }

    /// Back to the empty search screen, in-flight results are dropped
    pub fn reset(&mut self) {
        self.generation += 1;
        self.state = SearchState::Idle;
        self.query.clear();
    }
}

/// What the user sees for a failed fetch, never the raw error
pub fn user_message(error: &FetchError) -> String {
    match error {
        FetchError::ConnectionFailed { .. } => error.to_string(),
        _ => NOT_FOUND_MESSAGE.to_string(),
    }
}
