//! Search module for Hunt.
//!
//! [`Searches`] ties a schema, an analyzer and a configuration together into
//! the index and query operations of one searchable record type.

pub mod searches;

pub use searches::*;
