use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    // Default query cleanup
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        // Unicode normalization (NFKC)
        let text: String = text.nfkc().collect();

        // Collapse inner whitespace and newlines
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

pub struct QueryPreprocessor;
impl Preprocessor for QueryPreprocessor {}

pub fn normalize_query(text: &str) -> String {
    QueryPreprocessor.process(text)
}
