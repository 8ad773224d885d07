//! Indexing and querying for one record type.

use std::sync::Arc;

use crate::analysis::analyzer::SearchAnalyzer;
use crate::analysis::term_set::TermSet;
use crate::config::{IndexSpec, SearchConfig};
use crate::document::{Document, FieldValue};
use crate::index::Indexer;
use crate::query::{Predicate, QueryBuilder};
use crate::schema::SearchSchema;

/// Full-text search over one record type.
///
/// The configuration is read once, when this value is built. Documents
/// indexed and queries built afterwards all use the same stopwords and
/// transliteration.
///
/// # Examples
///
/// ```
/// use hunt::config::SearchConfig;
/// use hunt::document::Document;
/// use hunt::schema::SearchSchema;
/// use hunt::search::Searches;
///
/// let searches = Searches::new(SearchSchema::new(["title"]), &SearchConfig::default());
///
/// let mut doc = Document::builder().add_text("title", "Kissing in the rain").build();
/// searches.index(&mut doc);
///
/// assert!(searches.search(Some("kisses")).matches(&doc));
/// assert!(!searches.search(Some("sunshine")).matches(&doc));
/// assert!(!searches.search(None).matches(&doc));
/// ```
#[derive(Clone, Debug)]
pub struct Searches {
    indexer: Indexer,
    queries: QueryBuilder,
    index_spec: Option<IndexSpec>,
}

impl Searches {
    pub fn new(schema: SearchSchema, config: &SearchConfig) -> Self {
        let analyzer = Arc::new(SearchAnalyzer::new(config));
        let queries = QueryBuilder::new(schema.index_path(), Arc::clone(&analyzer));

        log::debug!(
            "searches over {:?} stored at {}",
            schema.fields(),
            schema.index_path()
        );

        Searches {
            indexer: Indexer::new(schema, analyzer),
            queries,
            index_spec: config.searches_index_name().cloned(),
        }
    }

    pub fn schema(&self) -> &SearchSchema {
        self.indexer.schema()
    }

    pub fn analyzer(&self) -> &SearchAnalyzer {
        self.indexer.analyzer()
    }

    /// Path of the stored terms, e.g. `searches.default`.
    pub fn index_path(&self) -> String {
        self.schema().index_path()
    }

    /// Store index to declare for the term field: the configured one, or a
    /// single-field index on [`index_path`](Self::index_path).
    pub fn index_spec(&self) -> IndexSpec {
        self.index_spec
            .clone()
            .unwrap_or_else(|| IndexSpec::Field(self.index_path()))
    }

    /// Terms for arbitrary values, analyzed like document fields.
    pub fn build_index(&self, values: &[FieldValue]) -> TermSet {
        crate::index::build_index(self.analyzer(), values)
    }

    /// The joined searchable text of `doc`.
    pub fn concatted_search_values(&self, doc: &Document) -> String {
        self.indexer.concatted_search_values(doc)
    }

    /// Recompute and store the terms of `doc`. Call on every create and
    /// update so the index follows the source fields.
    pub fn index(&self, doc: &mut Document) -> TermSet {
        self.indexer.index_document(doc)
    }

    /// Predicate for documents matching any stem of `text`.
    pub fn search(&self, text: Option<&str>) -> Predicate {
        self.queries.build(text)
    }

    /// [`search`](Self::search) narrowed by an existing predicate.
    pub fn search_within(&self, scope: Predicate, text: Option<&str>) -> Predicate {
        self.queries.build_within(scope, text)
    }
}
