//! Stemming token filter and stemmer implementations.

use super::Filter;
use crate::analysis::token::{IntoTokenStream, TokenStream};
use crate::error::Result;

/// Trait for stemming algorithms.
pub trait Stemmer: Send + Sync {
    /// Stem a word to its root form. Never fails.
    fn stem(&self, word: &str) -> String;

    /// Get the name of this stemmer.
    fn name(&self) -> &'static str;
}

pub mod porter;

pub use porter::PorterStemmer;

/// Filter that applies stemming to tokens.
pub struct StemFilter {
    /// The stemmer to use.
    stemmer: Box<dyn Stemmer>,
}

impl std::fmt::Debug for StemFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StemFilter")
            .field("stemmer", &self.stemmer.name())
            .finish()
    }
}

impl StemFilter {
    /// Create a new stem filter with the Porter stemmer.
    pub fn new() -> Self {
        StemFilter {
            stemmer: Box::new(PorterStemmer::new()),
        }
    }

    /// Create a stem filter with a custom stemmer.
    pub fn with_stemmer(stemmer: Box<dyn Stemmer>) -> Self {
        StemFilter { stemmer }
    }

    /// The stemmer used by this filter.
    pub fn stemmer(&self) -> &dyn Stemmer {
        self.stemmer.as_ref()
    }
}

impl Default for StemFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StemFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let stemmed = tokens
            .map(|token| {
                let stem = self.stemmer.stem(&token.text);
                token.with_text(stem)
            })
            .collect::<Vec<_>>();

        Ok(stemmed.into_token_stream())
    }

    fn name(&self) -> &'static str {
        "stem"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    struct ChopStemmer;

    impl Stemmer for ChopStemmer {
        fn stem(&self, word: &str) -> String {
            word.chars().take(3).collect()
        }

        fn name(&self) -> &'static str {
            "chop"
        }
    }

    #[test]
    fn test_stem_filter() {
        let filter = StemFilter::new();
        let tokens = vec![
            Token::new("kissing", 0),
            Token::new("barfing", 1),
            Token::new("hello", 2),
        ];

        let result: Vec<Token> = filter.filter(tokens.into_token_stream()).unwrap().collect();

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].text, "kiss");
        assert_eq!(result[1].text, "barf");
        assert_eq!(result[2].text, "hello");
        assert_eq!(result[2].position, 2);
    }

    #[test]
    fn test_custom_stemmer() {
        let filter = StemFilter::with_stemmer(Box::new(ChopStemmer));
        let tokens = vec![Token::new("mongodb", 0)];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result[0].text, "mon");
        assert_eq!(filter.stemmer().name(), "chop");
        assert_eq!(format!("{filter:?}"), "StemFilter { stemmer: \"chop\" }");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(StemFilter::new().name(), "stem");
    }
}
