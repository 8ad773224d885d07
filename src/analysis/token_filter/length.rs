//! Length filter implementation.

use super::Filter;
use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Words shorter than this carry no search value ("a", "I", stray digits).
pub const DEFAULT_MIN_LENGTH: usize = 2;

/// A filter that drops tokens shorter than a minimum number of characters.
#[derive(Clone, Debug)]
pub struct LengthFilter {
    min: usize,
}

impl LengthFilter {
    /// Create a length filter with the default minimum of two characters.
    pub fn new() -> Self {
        Self::with_min(DEFAULT_MIN_LENGTH)
    }

    /// Create a length filter with a custom minimum.
    pub fn with_min(min: usize) -> Self {
        LengthFilter { min }
    }

    pub fn min(&self) -> usize {
        self.min
    }
}

impl Default for LengthFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for LengthFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let min = self.min;
        Ok(Box::new(tokens.filter(move |token| token.char_len() >= min)))
    }

    fn name(&self) -> &'static str {
        "length"
    }
}
