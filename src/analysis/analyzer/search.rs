//! The analyzer shared by indexing and querying.
//!
//! # Pipeline
//!
//! 1. PunctuationCharFilter (drop everything but letters, digits, whitespace)
//! 2. TransliterationCharFilter (table chosen by the configuration)
//! 3. WhitespaceTokenizer
//! 4. LowercaseFilter
//! 5. LengthFilter (at least two characters)
//! 6. StopFilter (default list plus configured words)
//! 7. UniqueFilter
//!
//! [`SearchAnalyzer::to_stemmed_words`] continues with a StemFilter and a
//! second UniqueFilter, because distinct words can share a stem.
//!
//! # Examples
//!
//! ```
//! use hunt::analysis::analyzer::SearchAnalyzer;
//! use hunt::config::SearchConfig;
//!
//! let analyzer = SearchAnalyzer::new(&SearchConfig::default());
//!
//! assert_eq!(analyzer.normalize(Some("how was your day")), vec!["day"]);
//! assert_eq!(
//!     analyzer.to_stemmed_words(Some("I just Caught you kissing.")).as_slice(),
//!     ["just", "caught", "kiss"]
//! );
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use crate::analysis::char_filter::{PunctuationCharFilter, TransliterationCharFilter};
use crate::analysis::term_set::TermSet;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::stem::{PorterStemmer, StemFilter, Stemmer};
use crate::analysis::token_filter::{LengthFilter, LowercaseFilter, StopFilter, UniqueFilter};
use crate::analysis::tokenizer::WhitespaceTokenizer;
use crate::config::{SearchConfig, TransliterationOption};
use crate::error::Result;

/// Normalizes and stems text the same way for indexing and for querying.
///
/// The stopword set and transliteration table are fixed when the analyzer is
/// built, so every call sees one consistent configuration. Build a new
/// analyzer to pick up a new [`SearchConfig`].
#[derive(Clone, Debug)]
pub struct SearchAnalyzer {
    normalizer: PipelineAnalyzer,
    stemming: PipelineAnalyzer,
    stemmer: PorterStemmer,
    transliteration: TransliterationOption,
    stop_words: usize,
}

impl SearchAnalyzer {
    /// Build the analyzer for a configuration.
    pub fn new(config: &SearchConfig) -> Self {
        let transliteration = config.transliteration_option();

        let folding = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_char_filter(Arc::new(PunctuationCharFilter::new()))
            .add_char_filter(Arc::new(TransliterationCharFilter::new(transliteration)))
            .add_filter(Arc::new(LowercaseFilter::new()));

        // Configured words go through the same folding as the text they should
        // match, so "Don't" ignores "dont" and "Börse" ignores "borse".
        let additional = config
            .additional_words_to_ignore()
            .iter()
            .flat_map(|word| tokens_or_empty(folding.analyze(word)))
            .map(|token| token.text);
        let stop_filter = StopFilter::new().with_additional_words(additional);
        let stop_words = stop_filter.len();

        let normalizer = folding
            .add_filter(Arc::new(LengthFilter::new()))
            .add_filter(Arc::new(stop_filter))
            .add_filter(Arc::new(UniqueFilter::new()))
            .with_name("search_normalizer");

        let stemmer = PorterStemmer::new();
        let stemming = normalizer
            .clone()
            .add_filter(Arc::new(StemFilter::with_stemmer(Box::new(stemmer))))
            .add_filter(Arc::new(UniqueFilter::new()))
            .with_name("search_stemming");

        log::debug!(
            "built search analyzer: transliteration={transliteration}, stop words={stop_words}"
        );

        SearchAnalyzer {
            normalizer,
            stemming,
            stemmer,
            transliteration,
            stop_words,
        }
    }

    /// Turn raw text into lowercase ASCII words, dropping short words,
    /// stop words and repeats. Absent or blank input gives no words.
    pub fn normalize(&self, text: Option<&str>) -> Vec<String> {
        match text {
            Some(text) if !text.trim().is_empty() => tokens_or_empty(self.normalizer.analyze(text))
                .map(|token| token.text)
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Like [`normalize`](Self::normalize) for raw bytes; invalid UTF-8
    /// sequences are dropped.
    pub fn normalize_bytes(&self, bytes: &[u8]) -> Vec<String> {
        self.normalize(Some(&String::from_utf8_lossy(bytes)))
    }

    /// Stem a single word.
    pub fn stem(&self, word: &str) -> String {
        self.stemmer.stem(word)
    }

    /// Normalize then stem, keeping the first occurrence of each stem.
    pub fn to_stemmed_words(&self, text: Option<&str>) -> TermSet {
        match text {
            Some(text) if !text.trim().is_empty() => tokens_or_empty(self.stemming.analyze(text))
                .map(|token| token.text)
                .collect(),
            _ => TermSet::new(),
        }
    }

    pub fn transliteration_option(&self) -> TransliterationOption {
        self.transliteration
    }

    /// Size of the effective stopword list.
    pub fn stop_word_count(&self) -> usize {
        self.stop_words
    }
}

impl Default for SearchAnalyzer {
    fn default() -> Self {
        Self::new(&SearchConfig::default())
    }
}

impl Analyzer for SearchAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.stemming.analyze(text)
    }

    fn name(&self) -> &str {
        "search"
    }
}

/// The built-in filters cannot fail; an error here would be a bug in a stage,
/// and losing the words is preferable to failing a write.
fn tokens_or_empty(result: Result<TokenStream>) -> TokenStream {
    result.unwrap_or_else(|e| {
        log::warn!("text analysis failed, dropping input: {e}");
        Box::new(std::iter::empty())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(analyzer: &SearchAnalyzer, text: &str) -> Vec<String> {
        analyzer.normalize(Some(text))
    }

    #[test]
    fn test_does_not_fail_with_nil() {
        let analyzer = SearchAnalyzer::default();
        assert!(analyzer.normalize(None).is_empty());
        assert!(analyzer.normalize(Some("")).is_empty());
        assert!(analyzer.to_stemmed_words(None).is_empty());
    }

    #[test]
    fn test_converts_string_to_words() {
        let analyzer = SearchAnalyzer::default();
        assert_eq!(words(&analyzer, "first sentence"), ["first", "sentence"]);
        assert_eq!(words(&analyzer, "first    sentence"), ["first", "sentence"]);
        assert_eq!(words(&analyzer, "woot!"), ["woot"]);
        assert_eq!(words(&analyzer, "first sentence & second"), ["first", "sentence", "second"]);
        assert_eq!(words(&analyzer, "Sweet First Sentence"), ["sweet", "first", "sentence"]);
    }

    #[test]
    fn test_removes_short_ignored_and_repeated_words() {
        let analyzer = SearchAnalyzer::default();
        assert_eq!(words(&analyzer, "a tv show"), ["tv", "show"]);
        assert_eq!(words(&analyzer, "how was your day"), ["day"]);
        assert_eq!(words(&analyzer, "didn't you see that"), ["see"]);
        assert_eq!(words(&analyzer, "boom boom"), ["boom"]);
    }

    #[test]
    fn test_only_punctuation() {
        let analyzer = SearchAnalyzer::default();
        assert!(words(&analyzer, " ?! -- ... ").is_empty());
    }

    #[test]
    fn test_transliterates_unicode_words() {
        let analyzer = SearchAnalyzer::default();
        assert_eq!(
            words(&analyzer, "łąkę źródło łódź Börse äußert"),
            ["lake", "zrodlo", "lodz", "borse", "aussert"]
        );
    }

    #[test]
    fn test_transliterates_cyrillic_with_option() {
        let config =
            SearchConfig::new().with_transliteration_option(TransliterationOption::Cyrillic);
        let analyzer = SearchAnalyzer::new(&config);

        assert_eq!(words(&analyzer, "Карта сайта"), ["karta", "sajta"]);
        assert!(words(&SearchAnalyzer::default(), "Карта сайта").is_empty());
    }

    #[test]
    fn test_german_option() {
        let config = SearchConfig::new().with_transliteration_option(TransliterationOption::German);
        let analyzer = SearchAnalyzer::new(&config);

        assert_eq!(words(&analyzer, "Börse äußert"), ["boerse", "aeussert"]);
        assert_eq!(analyzer.transliteration_option(), TransliterationOption::German);
    }

    #[test]
    fn test_additional_words_are_folded() {
        let config =
            SearchConfig::new().with_additional_words_to_ignore(["Bang", "Don't", "Börse"]);
        let analyzer = SearchAnalyzer::new(&config);

        assert_eq!(words(&analyzer, "bang dont borse mongo"), ["mongo"]);
        assert_eq!(
            analyzer.stop_word_count(),
            SearchAnalyzer::default().stop_word_count() + 2 // "dont" is already listed
        );
    }

    #[test]
    fn test_invalid_utf8_is_dropped() {
        let analyzer = SearchAnalyzer::default();
        assert_eq!(analyzer.normalize_bytes(b"mon\xffgo db\xfe!"), ["mongo", "db"]);
    }

    #[test]
    fn test_stem() {
        let analyzer = SearchAnalyzer::default();
        assert_eq!(analyzer.stem("kissing"), "kiss");
        assert_eq!(analyzer.stem("hello"), "hello");
        assert_eq!(analyzer.stem("barfing"), "barf");
    }

    #[test]
    fn test_to_stemmed_words() {
        let analyzer = SearchAnalyzer::default();
        assert_eq!(
            analyzer.to_stemmed_words(Some("I just Caught you kissing.")).as_slice(),
            ["just", "caught", "kiss"]
        );
    }

    #[test]
    fn test_stems_are_deduplicated() {
        let analyzer = SearchAnalyzer::default();
        assert_eq!(
            analyzer.to_stemmed_words(Some("kiss kissing kisses")).as_slice(),
            ["kiss"]
        );
    }

    #[test]
    fn test_analyzer_trait_yields_stems() {
        let analyzer = SearchAnalyzer::default();
        let tokens: Vec<String> = analyzer
            .analyze("MongoDB is awesome!")
            .unwrap()
            .map(|t| t.text)
            .collect();
        assert_eq!(tokens, ["mongodb", "awesom"]);
        assert_eq!(Analyzer::name(&analyzer), "search");
    }
}
