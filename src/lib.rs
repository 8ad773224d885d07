//! # Hunt
//!
//! Word-based full-text search for document records.
//!
//! Hunt keeps a list of stemmed terms next to each record and turns search
//! text into a "field holds any of these terms" filter. Indexing and querying
//! share one analysis pipeline, so a query term matches exactly when the same
//! word was indexed.
//!
//! ## Features
//!
//! - Punctuation stripping and ASCII transliteration (Latin, plus optional
//!   Cyrillic or German tables)
//! - English stopwords, extendable through configuration
//! - Porter stemming
//! - Predicates that evaluate in memory or render as a JSON store filter
//!
//! ```
//! use hunt::prelude::*;
//!
//! let searches = Searches::new(SearchSchema::new(["title"]), &SearchConfig::default());
//!
//! let mut doc = Document::builder().add_text("title", "MongoDB is awesome!").build();
//! searches.index(&mut doc);
//!
//! let query = searches.search(Some("awesomeness"));
//! assert!(query.matches(&doc));
//! ```

pub mod analysis;
pub mod config;
pub mod document;
pub mod error;
pub mod index;
pub mod query;
pub mod schema;
pub mod search;

pub mod prelude {
    pub use crate::analysis::{SearchAnalyzer, TermSet};
    pub use crate::config::{IndexDirection, IndexSpec, SearchConfig, TransliterationOption};
    pub use crate::document::{Document, DocumentBuilder, FieldValue};
    pub use crate::error::{HuntError, Result};
    pub use crate::index::{Indexer, build_index, concat_search_values};
    pub use crate::query::{Predicate, QueryBuilder, build_query};
    pub use crate::schema::SearchSchema;
    pub use crate::search::Searches;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
