//! Indexing module for Hunt.
//!
//! Turns the searchable fields of a [`Document`](crate::document::Document)
//! into a stemmed term list and stores it on the document.

pub mod indexer;

pub use indexer::*;
