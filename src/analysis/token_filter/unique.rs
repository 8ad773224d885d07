//! Unique filter implementation.
//!
//! # Examples
//!
//! ```
//! use hunt::analysis::token_filter::Filter;
//! use hunt::analysis::token_filter::unique::UniqueFilter;
//! use hunt::analysis::token::Token;
//!
//! let filter = UniqueFilter::new();
//! let tokens = vec![Token::new("boom", 0), Token::new("boom", 1)];
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();
//!
//! assert_eq!(result.len(), 1);
//! assert_eq!(result[0].position, 0);
//! ```

use ahash::AHashSet;

use super::Filter;
use crate::analysis::token::TokenStream;
use crate::error::Result;

/// A filter that drops repeated tokens, keeping the first occurrence.
#[derive(Clone, Debug, Default)]
pub struct UniqueFilter;

impl UniqueFilter {
    pub fn new() -> Self {
        UniqueFilter
    }
}

impl Filter for UniqueFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let mut seen = AHashSet::new();
        Ok(Box::new(
            tokens.filter(move |token| seen.insert(token.text.clone())),
        ))
    }

    fn name(&self) -> &'static str {
        "unique"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_unique_filter_is_stable() {
        let filter = UniqueFilter::new();
        let tokens = vec![
            Token::new("mongo", 0),
            Token::new("nosql", 1),
            Token::new("mongo", 2),
            Token::new("db", 3),
            Token::new("nosql", 4),
        ];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();
        let texts: Vec<&str> = result.iter().map(|t| t.text.as_str()).collect();

        assert_eq!(texts, vec!["mongo", "nosql", "db"]);
        assert_eq!(result[2].position, 3);
    }
}
