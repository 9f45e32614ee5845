use std::collections::HashMap;

use yousif_types::WordDefinition;

use crate::preprocess::normalize_query;
use crate::render::{
    Rect, TokenStyle, TooltipState, interactive_tokens, lookup_key, split_preserving_whitespace,
    token_at, tokenize_sentence,
};

fn ubiquitous() -> WordDefinition {
    WordDefinition {
        word: "ubiquitous".to_string(),
        simple_english_meaning: "found everywhere".to_string(),
        roman_explanation: "...".to_string(),
        urdu_meanings: vec!["ہر جگہ موجود".to_string()],
        sentences: vec!["It is ubiquitous in cities.".to_string()],
        sentence_words_dictionary: HashMap::from([
            ("ubiquitous".to_string(), "har jagah".to_string()),
            ("cities".to_string(), "shehar".to_string()),
        ]),
        suggested_word: None,
        is_correction: None,
    }
}

#[test]
fn test_split_keeps_whitespace_runs() {
    let sentence = "  Phones are  everywhere,\tnow. ";
    let parts = split_preserving_whitespace(sentence);

    assert_eq!(parts.concat(), sentence);
    assert_eq!(
        parts,
        vec!["  ", "Phones", " ", "are", "  ", "everywhere,", "\t", "now.", " "]
    );
    assert!(split_preserving_whitespace("").is_empty());
}

#[test]
fn test_lookup_key_strips_punctuation_only() {
    assert_eq!(lookup_key("(Cities.)"), "cities");
    assert_eq!(lookup_key("Don't!"), "don't");
    assert_eq!(lookup_key("well-known;"), "well-known");
}

#[test]
fn test_target_word_is_emphasised_and_interactive() {
    let def = ubiquitous();
    let tokens = tokenize_sentence(&def.sentences[0], &def);

    let target = tokens.iter().find(|t| t.text == "ubiquitous").unwrap();
    assert!(target.is_target);
    assert_eq!(target.style(), TokenStyle::Emphasis);
    assert_eq!(target.meaning.as_deref(), Some("har jagah"));
    assert_eq!(target.click_query(), Some("ubiquitous"));

    let cities = tokens.iter().find(|t| t.text == "cities.").unwrap();
    assert_eq!(cities.style(), TokenStyle::Interactive);
    assert_eq!(cities.click_query(), Some("cities"));

    let it = tokens.iter().find(|t| t.text == "It").unwrap();
    assert_eq!(it.style(), TokenStyle::Plain);
    assert_eq!(it.click_query(), None);

    let rebuilt: String = tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(rebuilt, def.sentences[0]);
}

#[test]
fn test_target_match_ignores_case() {
    let mut def = ubiquitous();
    def.sentences = vec!["Ubiquitous!".to_string()];
    let tokens = tokenize_sentence(&def.sentences[0], &def);

    assert!(tokens[0].is_target);
}

#[test]
fn test_hover_shows_meaning_above_token() {
    let def = ubiquitous();
    let tokens = tokenize_sentence(&def.sentences[0], &def);
    let target = tokens.iter().find(|t| t.is_target).unwrap();
    let mut tooltips = TooltipState::new();

    let rect = Rect {
        left: 100.0,
        top: 50.0,
        width: 40.0,
        height: 20.0,
    };
    let tooltip = tooltips.hover(target, rect).unwrap();

    assert_eq!(tooltip.meaning, "har jagah");
    assert_eq!(tooltip.position(), (120.0, 38.0));

    tooltips.leave();
    assert!(tooltips.current().is_none());
}

#[test]
fn test_hover_on_plain_word_shows_nothing() {
    let def = ubiquitous();
    let tokens = tokenize_sentence(&def.sentences[0], &def);
    let mut tooltips = TooltipState::new();
    let rect = Rect {
        left: 0.0,
        top: 0.0,
        width: 2.0,
        height: 1.0,
    };

    assert!(tooltips.hover(&tokens[0], rect).is_none());
    assert!(tooltips.current().is_none());
}

#[test]
fn test_interactive_tokens_in_reading_order() {
    let mut def = ubiquitous();
    def.sentences.push("Cities are busy.".to_string());

    let targets = interactive_tokens(&def);

    let words: Vec<_> = targets.iter().map(|t| (t.sentence, t.text.as_str())).collect();
    assert_eq!(words, vec![(0, "ubiquitous"), (0, "cities."), (1, "Cities")]);
    assert_eq!(targets[2].meaning, "shehar");
}

#[test]
fn test_clicking_a_target_searches_its_lookup_key() {
    let def = ubiquitous();
    let targets = interactive_tokens(&def);

    let cities = token_at(&def, &targets[1]).unwrap();
    assert_eq!(cities.text, "cities.");
    assert_eq!(cities.click_query(), Some("cities"));

    let mut out_of_range = targets[0].clone();
    out_of_range.sentence = 5;
    assert!(token_at(&def, &out_of_range).is_none());
}

#[test]
fn test_normalize_query() {
    assert_eq!(normalize_query("  hello   world \n"), "hello world");
    assert_eq!(normalize_query("   "), "");
    // NFKC folds the fullwidth form
    assert_eq!(normalize_query("ｗｏｒｄ"), "word");
}
