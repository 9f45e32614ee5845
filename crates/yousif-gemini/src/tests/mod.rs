
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::time::Instant;
use yousif_types::WordDefinition;

use crate::{DefinitionProvider, FetchError, ProviderMetadata};

pub(crate) fn ubiquitous() -> WordDefinition {
    WordDefinition {
        word: "ubiquitous".to_string(),
        simple_english_meaning: "found everywhere".to_string(),
        roman_explanation: "...".to_string(),
        urdu_meanings: vec!["ہر جگہ موجود".to_string()],
        sentences: vec!["It is ubiquitous in cities.".to_string()],
        sentence_words_dictionary: HashMap::from([(
            "ubiquitous".to_string(),
            "har jagah".to_string(),
        )]),
        suggested_word: None,
        is_correction: None,
    }
}

/// Replays scripted outcomes and records when each attempt happened
pub(crate) struct ScriptedProvider {
    script: Mutex<VecDeque<Result<WordDefinition, FetchError>>>,
    pub calls: Mutex<Vec<Instant>>,
}

impl ScriptedProvider {
    pub fn new(script: Vec<Result<WordDefinition, FetchError>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_times(&self) -> Vec<Instant> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DefinitionProvider for ScriptedProvider {
    async fn define(&self, _term: &str) -> Result<WordDefinition, FetchError> {
        self.calls.lock().unwrap().push(Instant::now());
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(FetchError::EmptyResponse))
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Scripted".to_string(),
            model: "test".to_string(),
            requires_api_key: false,
        }
    }
}
