mod ui_tests;

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use yousif_gemini::{DefinitionProvider, FetchError, ProviderMetadata};
use yousif_types::WordDefinition;

pub(crate) fn definition_for(word: &str) -> WordDefinition {
    WordDefinition {
        word: word.to_string(),
        simple_english_meaning: "found everywhere".to_string(),
        roman_explanation: "...".to_string(),
        urdu_meanings: vec!["ہر جگہ موجود".to_string()],
        sentences: vec![format!("It is {word} in cities.")],
        sentence_words_dictionary: HashMap::from([
            (word.to_lowercase(), "har jagah".to_string()),
            ("cities".to_string(), "shehar".to_string()),
        ]),
        suggested_word: None,
        is_correction: None,
    }
}

/// Answers every term with a definition, optionally after a per-term delay
#[derive(Default)]
pub(crate) struct FakeProvider {
    pub delays: HashMap<String, Duration>,
    pub failing: bool,
    calls: AtomicUsize,
    terms: Mutex<Vec<String>>,
}

impl FakeProvider {
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn with_delays(delays: &[(&str, u64)]) -> Self {
        Self {
            delays: delays
                .iter()
                .map(|(t, ms)| (t.to_string(), Duration::from_millis(*ms)))
                .collect(),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn terms(&self) -> Vec<String> {
        self.terms.lock().unwrap().clone()
    }
}

#[async_trait]
impl DefinitionProvider for FakeProvider {
    async fn define(&self, term: &str) -> Result<WordDefinition, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.terms.lock().unwrap().push(term.to_string());

        if let Some(delay) = self.delays.get(term) {
            tokio::time::sleep(*delay).await;
        }
        if self.failing {
            return Err(FetchError::EmptyResponse);
        }
        Ok(definition_for(term))
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Fake".to_string(),
            model: "test".to_string(),
            requires_api_key: false,
        }
    }
}
