//! Whitespace tokenizer implementation.

use super::Tokenizer;

use crate::analysis::token::{IntoTokenStream, Token, TokenStream};
use crate::error::Result;

/// A tokenizer that splits text on runs of whitespace.
///
/// Leading and trailing whitespace is ignored and no empty tokens are
/// produced.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let base = text.as_ptr() as usize;
        let tokens: Vec<Token> = text
            .split_whitespace()
            .enumerate()
            .map(|(position, word)| {
                // `word` borrows from `text`, so the pointer difference is its byte offset.
                let start_offset = word.as_ptr() as usize - base;
                Token::with_offsets(word, position, start_offset, start_offset + word.len())
            })
            .collect();

        Ok(tokens.into_token_stream())
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_tokenizer() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("hello  world\ttest").unwrap().collect();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[1].text, "world");
        assert_eq!(tokens[2].text, "test");
    }

    #[test]
    fn test_offsets_and_positions() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("  boom   boom ").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!((tokens[0].start_offset, tokens[0].end_offset), (2, 6));
        assert_eq!((tokens[1].start_offset, tokens[1].end_offset), (9, 13));
        assert_eq!(tokens[1].position, 1);
    }

    #[test]
    fn test_blank_input() {
        let tokenizer = WhitespaceTokenizer::new();
        assert_eq!(tokenizer.tokenize("").unwrap().count(), 0);
        assert_eq!(tokenizer.tokenize(" \n\t ").unwrap().count(), 0);
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(WhitespaceTokenizer::new().name(), "whitespace");
    }
}
