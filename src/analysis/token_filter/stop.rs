//! Stop filter implementation.
//!
//! This module provides a filter that removes common words (stop words) that
//! carry no search intent. The base list is fixed; callers extend it with
//! their own words.
//!
//! # Examples
//!
//! ```
//! use hunt::analysis::token_filter::Filter;
//! use hunt::analysis::token_filter::stop::StopFilter;
//! use hunt::analysis::token::Token;
//!
//! let filter = StopFilter::new();
//! let tokens = vec![
//!     Token::new("how", 0),
//!     Token::new("was", 1),
//!     Token::new("your", 2),
//!     Token::new("day", 3),
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result.len(), 1);
//! assert_eq!(result[0].text, "day");
//! ```

use std::sync::{Arc, LazyLock};

use ahash::AHashSet;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Default English stop words.
///
/// Stored the way they look after punctuation stripping, so contractions
/// appear without their apostrophe (`didnt`, `youre`). Contractions whose
/// stripped form is a different word (`he'll`, `she'd`, `we'll`, ...) are
/// left out.
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "arent", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "cant", "cannot", "could", "couldnt", "did", "didnt", "do", "does", "doesnt",
    "doing", "dont", "down", "during", "each", "few", "for", "from", "further", "had", "hadnt",
    "has", "hasnt", "have", "havent", "having", "he", "hed", "hes", "her", "here", "heres",
    "hers", "herself", "him", "himself", "his", "how", "hows", "if", "im", "in", "into", "is",
    "isnt", "it", "its", "itself", "ive", "lets", "me", "more", "most", "mustnt", "my", "myself",
    "no", "nor", "not", "of", "off", "on", "once", "only", "or", "other", "ought", "our", "ours",
    "ourselves", "out", "over", "own", "same", "shant", "she", "shes", "should", "shouldnt",
    "so", "some", "such", "than", "that", "thats", "the", "their", "theirs", "them",
    "themselves", "then", "there", "theres", "these", "they", "theyd", "theyll", "theyre",
    "theyve", "this", "those", "through", "to", "too", "under", "until", "up", "very", "was",
    "wasnt", "we", "weve", "were", "werent", "what", "whats", "when", "whens", "where",
    "wheres", "which", "while", "who", "whos", "whom", "why", "whys", "with", "wont", "would",
    "wouldnt", "you", "youd", "youll", "youre", "youve", "your", "yours", "yourself",
    "yourselves",
];

/// Default stop words as a set.
pub static DEFAULT_STOP_WORDS_SET: LazyLock<AHashSet<String>> = LazyLock::new(|| {
    DEFAULT_STOP_WORDS
        .iter()
        .map(|&s| s.to_string())
        .collect()
});

/// A filter that removes stop words from the token stream.
///
/// Matching is exact, so the filter belongs after lowercasing.
#[derive(Clone, Debug)]
pub struct StopFilter {
    /// The set of stop words to remove
    stop_words: Arc<AHashSet<String>>,
}

impl StopFilter {
    /// Create a new stop filter with the default stop words.
    ///
    /// # Examples
    ///
    /// ```
    /// use hunt::analysis::token_filter::stop::StopFilter;
    ///
    /// let filter = StopFilter::new();
    /// assert!(filter.is_stop_word("didnt"));
    /// assert!(!filter.is_stop_word("mongodb"));
    /// ```
    pub fn new() -> Self {
        Self::with_stop_words(DEFAULT_STOP_WORDS_SET.clone())
    }

    /// Create a new stop filter with custom stop words.
    pub fn with_stop_words(stop_words: AHashSet<String>) -> Self {
        StopFilter {
            stop_words: Arc::new(stop_words),
        }
    }

    /// Create a new stop filter from a list of stop words, without the defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use hunt::analysis::token_filter::stop::StopFilter;
    ///
    /// let filter = StopFilter::from_words(vec!["foo", "bar", "baz"]);
    /// assert_eq!(filter.len(), 3);
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words = words.into_iter().map(|s| s.into()).collect();
        Self::with_stop_words(stop_words)
    }

    /// Extend the stop words with additional ones.
    ///
    /// # Examples
    ///
    /// ```
    /// use hunt::analysis::token_filter::stop::StopFilter;
    ///
    /// let filter = StopFilter::new().with_additional_words(["bang"]);
    /// assert!(filter.is_stop_word("bang"));
    /// assert!(filter.is_stop_word("the"));
    /// ```
    pub fn with_additional_words<I, S>(self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut stop_words = Arc::unwrap_or_clone(self.stop_words);
        stop_words.extend(words.into_iter().map(Into::into));
        Self::with_stop_words(stop_words)
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let stop_words = Arc::clone(&self.stop_words);
        Ok(Box::new(
            tokens.filter(move |token: &Token| !stop_words.contains(&token.text)),
        ))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}
