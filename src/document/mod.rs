//! Document module.
//!
//! Documents stand in for the host's stored records: a bag of named field
//! values that the indexer reads and writes the search terms into.

#[allow(clippy::module_inception)]
pub mod document;
pub mod field_value;

// Re-export commonly used types
pub use document::{Document, DocumentBuilder};
pub use field_value::FieldValue;
