//! Sentence tokenization and tooltip resolution for the word card.
//!
//! Sentences are split into word and whitespace tokens so the card can be
//! rebuilt byte for byte. Punctuation is stripped only to build the lookup
//! key, the displayed text keeps it.

use yousif_types::{TooltipTarget, WordDefinition};

/// Characters ignored when matching a token against the dictionary
pub const LOOKUP_STRIP_CHARS: &[char] = &['.', ',', '!', '?', ';', ':', '(', ')'];

/// Vertical gap between a tooltip and the word it points at
pub const TOOLTIP_OFFSET: f32 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenStyle {
    /// The searched word itself
    Emphasis,
    /// Has a tooltip meaning, clickable
    Interactive,
    Plain,
    Whitespace,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceToken {
    pub text: String,
    pub lookup_key: String,
    pub is_target: bool,
    pub meaning: Option<String>,
}

impl SentenceToken {
    pub fn is_whitespace(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn style(&self) -> TokenStyle {
        if self.is_whitespace() {
            TokenStyle::Whitespace
        } else if self.is_target {
            TokenStyle::Emphasis
        } else if self.meaning.is_some() {
            TokenStyle::Interactive
        } else {
            TokenStyle::Plain
        }
    }

    pub fn is_interactive(&self) -> bool {
        !self.is_whitespace() && self.meaning.is_some()
    }

    /// Word to search for when the token is clicked
    pub fn click_query(&self) -> Option<&str> {
        self.is_interactive().then_some(self.lookup_key.as_str())
    }
}

pub fn lookup_key(word: &str) -> String {
    word.to_lowercase()
        .chars()
        .filter(|c| !LOOKUP_STRIP_CHARS.contains(c))
        .collect()
}

/// Split on whitespace, keeping the whitespace runs as their own tokens
pub fn split_preserving_whitespace(sentence: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut in_space: Option<bool> = None;

    for (idx, c) in sentence.char_indices() {
        let space = c.is_whitespace();
        match in_space {
            Some(prev) if prev != space => {
                parts.push(&sentence[start..idx]);
                start = idx;
            }
            _ => {}
        }
        in_space = Some(space);
    }

    if start < sentence.len() {
        parts.push(&sentence[start..]);
    }
    parts
}

pub fn tokenize_sentence(sentence: &str, definition: &WordDefinition) -> Vec<SentenceToken> {
    let target = definition.word.to_lowercase();

    split_preserving_whitespace(sentence)
        .into_iter()
        .map(|part| {
            let key = lookup_key(part);
            let is_word = !part.trim().is_empty();
            SentenceToken {
                text: part.to_string(),
                is_target: is_word && key == target,
                meaning: if is_word {
                    definition.meaning_of(&key).map(str::to_string)
                } else {
                    None
                },
                lookup_key: key,
            }
        })
        .collect()
}

/// Every sentence of the card, tokenized
pub fn render_sentences(definition: &WordDefinition) -> Vec<Vec<SentenceToken>> {
    definition
        .sentences
        .iter()
        .map(|s| tokenize_sentence(s, definition))
        .collect()
}

/// Hoverable words in reading order, addressed 1-based by the terminal
pub fn interactive_tokens(definition: &WordDefinition) -> Vec<TooltipTarget> {
    render_sentences(definition)
        .into_iter()
        .enumerate()
        .flat_map(|(sentence, tokens)| {
            tokens
                .into_iter()
                .enumerate()
                .filter_map(move |(token, t)| {
                    let meaning = t.meaning.clone().filter(|_| t.is_interactive())?;
                    Some(TooltipTarget {
                        sentence,
                        token,
                        text: t.text,
                        meaning,
                    })
                })
        })
        .collect()
}

/// Token a hover target points at
pub fn token_at(definition: &WordDefinition, target: &TooltipTarget) -> Option<SentenceToken> {
    let sentence = definition.sentences.get(target.sentence)?;
    tokenize_sentence(sentence, definition)
        .into_iter()
        .nth(target.token)
}

/// On-screen bounding box of a rendered token
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub text: String,
    pub meaning: String,
    pub anchor: Rect,
}

impl Tooltip {
    /// Bottom-centre point of the tooltip: centred over the token, lifted above it
    pub fn position(&self) -> (f32, f32) {
        (
            self.anchor.left + self.anchor.width / 2.0,
            self.anchor.top - TOOLTIP_OFFSET,
        )
    }
}

/// Transient tooltip shown while a dictionary word is hovered
#[derive(Debug, Default)]
pub struct TooltipState {
    current: Option<Tooltip>,
}

impl TooltipState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows the meaning of `token`, words without one leave the state untouched
    pub fn hover(&mut self, token: &SentenceToken, rect: Rect) -> Option<&Tooltip> {
        let meaning = token.meaning.as_ref().filter(|_| !token.is_whitespace())?;
        self.current = Some(Tooltip {
            text: token.text.clone(),
            meaning: meaning.clone(),
            anchor: rect,
        });
        self.current.as_ref()
    }

    pub fn leave(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Tooltip> {
        self.current.as_ref()
    }
}
