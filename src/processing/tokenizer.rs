//! Keyword tokenization for resume screening

use regex::Regex;

/// Delimiters between tokens: whitespace, comma, semicolon, colon, period
/// or parenthesis. Runs collapse into a single split point.
///
/// Whitespace is the ECMAScript set rather than regex's Unicode `\s`: the
/// byte-order mark U+FEFF separates words, NEXT LINE U+0085 does not.
const DELIMITER_PATTERN: &str =
    r"[\t\n\x0B\x0C\r \u{A0}\u{1680}\u{2000}-\u{200A}\u{2028}\u{2029}\u{202F}\u{205F}\u{3000}\u{FEFF},;:.()]+";

/// Splits free text into lower-cased keywords.
///
/// A keyword is a token whose length (in characters) is strictly greater
/// than `min_length`. Order and duplicates are preserved.
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    delimiter_regex: Regex,
    min_length: usize,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new(4)
    }
}

impl KeywordExtractor {
    pub fn new(min_length: usize) -> Self {
        let delimiter_regex = Regex::new(DELIMITER_PATTERN).expect("Invalid delimiter regex");

        Self {
            delimiter_regex,
            min_length,
        }
    }

    /// Lower-case and split, dropping the empty pieces left by leading or
    /// trailing delimiters.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();

        self.delimiter_regex
            .split(&lowered)
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Tokens longer than the minimum keyword length.
    pub fn extract(&self, text: &str) -> Vec<String> {
        self.tokenize(text)
            .into_iter()
            .filter(|token| self.is_keyword(token))
            .collect()
    }

    pub fn is_keyword(&self, token: &str) -> bool {
        token.chars().count() > self.min_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_collapses_delimiter_runs() {
        let extractor = KeywordExtractor::default();
        let tokens = extractor.tokenize("  Rust,  (Tokio); serde:axum.. ");
        assert_eq!(tokens, vec!["rust", "tokio", "serde", "axum"]);
    }

    #[test]
    fn test_extract_keeps_only_long_tokens() {
        let extractor = KeywordExtractor::default();
        let keywords = extractor.extract("Looking for a react developer with typescript and graphql experience");
        assert_eq!(
            keywords,
            vec!["looking", "react", "developer", "typescript", "graphql", "experience"]
        );
    }

    #[test]
    fn test_four_letter_tokens_are_dropped() {
        let extractor = KeywordExtractor::default();
        assert!(extractor.extract("java rust golang").contains(&"golang".to_string()));
        assert!(!extractor.is_keyword("java"));
        assert!(extractor.is_keyword("kafka"));
    }

    #[test]
    fn test_duplicates_are_preserved() {
        let extractor = KeywordExtractor::default();
        let keywords = extractor.extract("python python PYTHON");
        assert_eq!(keywords.len(), 3);
    }

    #[test]
    fn test_hyphen_and_slash_do_not_split() {
        let extractor = KeywordExtractor::default();
        assert_eq!(extractor.extract("full-stack ci/cd"), vec!["full-stack"]);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let extractor = KeywordExtractor::default();
        // four characters, eight bytes
        assert!(!extractor.is_keyword("éééé"));
        assert!(extractor.is_keyword("résumé"));
    }

    #[test]
    fn test_byte_order_mark_separates_words() {
        let extractor = KeywordExtractor::default();
        assert_eq!(extractor.tokenize("\u{FEFF}React\u{FEFF}graphql"), vec!["react", "graphql"]);
    }

    #[test]
    fn test_next_line_does_not_separate_words() {
        let extractor = KeywordExtractor::default();
        assert_eq!(extractor.tokenize("react\u{85}graphql"), vec!["react\u{85}graphql"]);
    }

    #[test]
    fn test_unicode_spaces_separate_words() {
        let extractor = KeywordExtractor::default();
        let text = "react\u{A0}graphql\u{2003}docker\u{3000}kafka\x0Bredis";
        assert_eq!(extractor.tokenize(text), vec!["react", "graphql", "docker", "kafka", "redis"]);
    }

    #[test]
    fn test_empty_input() {
        let extractor = KeywordExtractor::default();
        assert!(extractor.tokenize("").is_empty());
        assert!(extractor.extract(" ,;:.() ").is_empty());
    }
}
