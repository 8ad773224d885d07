//! Text analysis module for Hunt.
//!
//! This module provides the normalization and stemming pipeline shared by
//! indexing and querying: char filters, tokenization, token filters and the
//! analyzers that chain them.

pub mod analyzer;
pub mod char_filter;
pub mod term_set;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::*;
pub use term_set::TermSet;
pub use token::*;
pub use token_filter::*;
pub use tokenizer::*;
