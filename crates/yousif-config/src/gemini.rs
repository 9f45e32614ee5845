use serde::{Deserialize, Serialize};

pub const DEFAULT_SYSTEM_INSTRUCTION: &str = r#"
You are Yousif, an English-Urdu learning architect for Pakistani students aged 11-18.
Your task is to provide word meanings in the simplest way possible.

CORE REQUIREMENTS:
1. UI LANGUAGE: All labels must be in English.
2. URDU MEANINGS (Urdu Script): Provide 2 to 3 related meanings in proper Urdu script (Nastaliq).
3. ROMAN EXPLANATION (Roman Urdu): Explain the word using Urdu language written in English alphabets. Use a friendly, conversational tone.
   Example for "Studied": "Studied ka matlab hai jab aap ne kisi cheez ke baray mein parha ho ya usay ghaur se seekha ho."
4. ENGLISH DEFINITION: Provide a very simple English definition that a 12-year-old would easily understand. No complex academic words.
5. SENTENCES: Provide 3 very short, daily-use English sentences.
6. TOOLTIP DICTIONARY: Map difficult words used in your sentences to short Roman Urdu meanings.

RESPONSE FORMAT: Strict JSON.
"#;

fn default_model() -> String {
    "gemini-3-flash-preview".to_string()
}

fn default_api_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_system_instruction() -> String {
    DEFAULT_SYSTEM_INSTRUCTION.trim().to_string()
}

fn default_max_attempts() -> u32 {
    3
}

fn default_backoff_ms() -> u64 {
    1000
}

fn default_timeout_seconds() -> u64 {
    30
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct GeminiConfig {
    /// Never written back to a profile file
    #[serde(default, skip_serializing)]
    pub api_key: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_system_instruction")]
    pub system_instruction: String,
    /// Total attempts per search, first one included
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Delay unit, attempt n waits n times this before retrying
    #[serde(default = "default_backoff_ms")]
    pub backoff_ms: u64,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl GeminiConfig {
    pub(crate) fn apply_env(&mut self, lookup: &impl Fn(&str) -> Option<String>) {
        if let Some(key) = crate::api_key_from(lookup) {
            self.api_key = key;
        }
        if let Some(model) = lookup("GEMINI_MODEL") {
            self.model = model;
        }
        if let Some(url) = lookup("GEMINI_API_URL") {
            self.api_url = url;
        }
        if let Some(attempts) = crate::parsed(lookup, "FETCH_MAX_ATTEMPTS") {
            self.max_attempts = attempts;
        }
        if let Some(backoff) = crate::parsed(lookup, "FETCH_BACKOFF_MS") {
            self.backoff_ms = backoff;
        }
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            api_url: default_api_url(),
            system_instruction: default_system_instruction(),
            max_attempts: default_max_attempts(),
            backoff_ms: default_backoff_ms(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}
