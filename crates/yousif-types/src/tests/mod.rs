use std::collections::HashMap;

use crate::{Theme, WordDefinition};

fn definition() -> WordDefinition {
    WordDefinition {
        word: "ubiquitous".to_string(),
        simple_english_meaning: "found everywhere".to_string(),
        roman_explanation: "Har jagah milne wali cheez.".to_string(),
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

#[test]
fn test_definition_uses_camel_case_fields() {
    let json = serde_json::to_value(definition()).unwrap();

    assert_eq!(json["simpleEnglishMeaning"], "found everywhere");
    assert_eq!(json["sentenceWordsDictionary"]["ubiquitous"], "har jagah");
    assert!(json.get("suggestedWord").is_none());
    assert!(json.get("isCorrection").is_none());
}

#[test]
fn test_correction_requires_flag_and_word() {
    let mut def = definition();
    def.suggested_word = Some("ubiquitous".to_string());
    assert_eq!(def.correction(), None);

    def.is_correction = Some(true);
    assert_eq!(def.correction(), Some("ubiquitous"));

    def.suggested_word = Some("   ".to_string());
    assert_eq!(def.correction(), None);
}

#[test]
fn test_theme_tokens() {
    assert_eq!(Theme::from_token("dark"), Some(Theme::Dark));
    assert_eq!(Theme::from_token("light"), Some(Theme::Light));
    assert_eq!(Theme::from_token("sepia"), None);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert_eq!(Theme::from_token(Theme::Dark.as_token()), Some(Theme::Dark));
}
