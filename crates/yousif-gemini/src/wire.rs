//! Gemini `generateContent` request and response shapes.
//!
//! The response schema cannot describe a map, so the tooltip dictionary
//! travels as a list of key/value pairs and is turned into a map here.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use yousif_types::WordDefinition;

use crate::FetchError;

pub fn prompt_for(term: &str) -> String {
    format!("Explain the word: \"{term}\" for a teenager.")
}

/// Output schema in Gemini's OpenAPI subset
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "word": { "type": "STRING" },
            "urduMeanings": { "type": "ARRAY", "items": { "type": "STRING" } },
            "romanExplanation": { "type": "STRING" },
            "simpleEnglishMeaning": { "type": "STRING" },
            "sentences": { "type": "ARRAY", "items": { "type": "STRING" } },
            "sentenceWordsDictionary": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "key": { "type": "STRING" },
                        "value": { "type": "STRING" }
                    },
                    "required": ["key", "value"]
                }
            },
            "isCorrection": { "type": "BOOLEAN" },
            "suggestedWord": { "type": "STRING" }
        },
        "required": [
            "word",
            "urduMeanings",
            "romanExplanation",
            "simpleEnglishMeaning",
            "sentences",
            "sentenceWordsDictionary"
        ]
    })
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub system_instruction: Content,
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    pub fn for_term(term: &str, system_instruction: &str) -> Self {
        Self {
            system_instruction: Content {
                role: None,
                parts: vec![Part::text(system_instruction)],
            },
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part::text(&prompt_for(term))],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: response_schema(),
            },
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Part {
    fn text(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
    pub response_schema: Value,
}

#[derive(Debug, Deserialize, Default)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize, Default)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

impl GenerateContentResponse {
    /// Text of the first candidate, `None` when blank
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();

        (!text.trim().is_empty()).then_some(text)
    }
}

#[derive(Debug, Deserialize)]
pub struct DictionaryPair {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub value: String,
}

/// Model output before the pair list is folded into a map
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDefinition {
    pub word: String,
    pub simple_english_meaning: String,
    pub roman_explanation: String,
    pub urdu_meanings: Vec<String>,
    pub sentences: Vec<String>,
    #[serde(default)]
    pub sentence_words_dictionary: Vec<DictionaryPair>,
    #[serde(default)]
    pub suggested_word: Option<String>,
    #[serde(default)]
    pub is_correction: Option<bool>,
}

impl RawDefinition {
    pub fn into_definition(self) -> WordDefinition {
        let mut dictionary = HashMap::with_capacity(self.sentence_words_dictionary.len());
        for pair in self.sentence_words_dictionary {
            if pair.key.is_empty() || pair.value.is_empty() {
                continue;
            }
            dictionary.insert(pair.key.to_lowercase(), pair.value);
        }

        WordDefinition {
            word: self.word,
            simple_english_meaning: self.simple_english_meaning,
            roman_explanation: self.roman_explanation,
            urdu_meanings: self.urdu_meanings,
            sentences: self.sentences,
            sentence_words_dictionary: dictionary,
            suggested_word: self.suggested_word,
            is_correction: self.is_correction,
        }
    }
}

/// Model text to a normalized definition
pub fn parse_definition(text: &str) -> Result<WordDefinition, FetchError> {
    if text.trim().is_empty() {
        return Err(FetchError::EmptyResponse);
    }
    let raw: RawDefinition = serde_json::from_str(text)?;
    Ok(raw.into_definition())
}
