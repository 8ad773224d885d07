//! Char filter implementations for text normalization.
//!
//! Char filters rewrite the raw text before it reaches the tokenizer.
//!
//! # Available Filters
//!
//! - [`PunctuationCharFilter`] - Removes everything but letters, digits and whitespace
//! - [`TransliterationCharFilter`] - Maps non-ASCII letters to ASCII spellings
//!
//! # Examples
//!
//! ```
//! use hunt::analysis::char_filter::{CharFilter, PunctuationCharFilter};
//!
//! let filter = PunctuationCharFilter::new();
//! assert_eq!(filter.filter("didn't!"), "didnt");
//! ```

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod punctuation;
pub mod transliterate;

pub use punctuation::PunctuationCharFilter;
pub use transliterate::TransliterationCharFilter;
