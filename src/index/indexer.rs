//! Term index construction.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use hunt::analysis::analyzer::SearchAnalyzer;
//! use hunt::document::{Document, FieldValue};
//! use hunt::index::Indexer;
//! use hunt::schema::SearchSchema;
//!
//! let indexer = Indexer::new(SearchSchema::new(["title"]), Arc::new(SearchAnalyzer::default()));
//! let mut doc = Document::builder().add_text("title", "MongoDB is awesome!").build();
//!
//! indexer.index_document(&mut doc);
//! assert_eq!(
//!     doc.get_field("searches.default"),
//!     Some(&FieldValue::from(vec!["mongodb", "awesom"]))
//! );
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::SearchAnalyzer;
use crate::analysis::term_set::TermSet;
use crate::document::{Document, FieldValue};
use crate::schema::SearchSchema;

/// Join the searchable text of `values` with single spaces.
///
/// Text values contribute themselves and lists contribute each element.
/// Anything else contributes nothing and leaves no gap behind.
pub fn concat_search_values(values: &[FieldValue]) -> String {
    values
        .iter()
        .flat_map(FieldValue::search_text)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Stemmed, deduplicated terms for a set of field values.
pub fn build_index(analyzer: &SearchAnalyzer, values: &[FieldValue]) -> TermSet {
    let text = concat_search_values(values);
    analyzer.to_stemmed_words(Some(&text))
}

/// Writes the term index of a schema onto documents.
#[derive(Clone, Debug)]
pub struct Indexer {
    schema: SearchSchema,
    analyzer: Arc<SearchAnalyzer>,
}

impl Indexer {
    pub fn new(schema: SearchSchema, analyzer: Arc<SearchAnalyzer>) -> Self {
        Indexer { schema, analyzer }
    }

    pub fn schema(&self) -> &SearchSchema {
        &self.schema
    }

    pub fn analyzer(&self) -> &SearchAnalyzer {
        &self.analyzer
    }

    /// Values of the searchable fields in declaration order. Missing fields
    /// read as [`FieldValue::Null`].
    pub fn search_values(&self, doc: &Document) -> Vec<FieldValue> {
        self.schema
            .fields()
            .iter()
            .map(|field| doc.get_field(field).cloned().unwrap_or(FieldValue::Null))
            .collect()
    }

    /// The text that gets analyzed for `doc`.
    pub fn concatted_search_values(&self, doc: &Document) -> String {
        concat_search_values(&self.search_values(doc))
    }

    /// Terms for `doc` without touching it.
    pub fn terms_for(&self, doc: &Document) -> TermSet {
        build_index(&self.analyzer, &self.search_values(doc))
    }

    /// Recompute the terms of `doc` and store them at the schema's index
    /// path, replacing whatever was there. Returns the stored terms.
    pub fn index_document(&self, doc: &mut Document) -> TermSet {
        let terms = self.terms_for(doc);
        let path = self.schema.index_path();

        log::debug!("indexing {} terms at {path}", terms.len());

        doc.add_field(path, FieldValue::List(terms.clone().into_vec()));
        terms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indexer(fields: &[&str]) -> Indexer {
        Indexer::new(
            SearchSchema::new(fields.iter().copied()),
            Arc::new(SearchAnalyzer::default()),
        )
    }

    #[test]
    fn test_concat_search_values() {
        let values = vec![
            FieldValue::from("first sentence"),
            FieldValue::Null,
            FieldValue::from(vec!["tag one", "tag two"]),
            FieldValue::Integer(7),
        ];
        assert_eq!(concat_search_values(&values), "first sentence tag one tag two");
        assert_eq!(concat_search_values(&[]), "");
        assert_eq!(concat_search_values(&[FieldValue::Null]), "");
    }

    #[test]
    fn test_build_index() {
        let analyzer = SearchAnalyzer::default();
        let terms = build_index(&analyzer, &[FieldValue::from("I just Caught you kissing.")]);
        assert_eq!(terms.as_slice(), ["just", "caught", "kiss"]);

        assert!(build_index(&analyzer, &[FieldValue::Null]).is_empty());
    }

    #[test]
    fn test_index_document_multiple_fields() {
        let indexer = indexer(&["title", "body"]);
        let mut doc = Document::builder()
            .add_text("title", "Hunting season")
            .add_text("body", "Seasons change")
            .build();

        let terms = indexer.index_document(&mut doc);

        assert_eq!(terms.as_slice(), ["hunt", "season", "chang"]);
        assert_eq!(
            doc.get_field("searches.default").and_then(FieldValue::as_list),
            Some(terms.as_slice())
        );
        // Source fields are untouched.
        assert_eq!(doc.get_field("title"), Some(&FieldValue::from("Hunting season")));
    }

    #[test]
    fn test_missing_fields_index_nothing() {
        let indexer = indexer(&["title"]);
        let mut doc = Document::new();

        assert!(indexer.index_document(&mut doc).is_empty());
        assert_eq!(doc.get_field("searches.default"), Some(&FieldValue::List(vec![])));
    }

    #[test]
    fn test_reindex_replaces_terms() {
        let indexer = indexer(&["title"]);
        let mut doc = Document::builder().add_text("title", "mongodb").build();
        indexer.index_document(&mut doc);

        doc.add_field("title", FieldValue::from("postgres"));
        indexer.index_document(&mut doc);

        assert_eq!(
            doc.get_field("searches.default"),
            Some(&FieldValue::from(vec!["postgr"]))
        );
    }

    #[test]
    fn test_custom_index_name() {
        let schema = SearchSchema::new(["title"]).with_index_name("titles").unwrap();
        let indexer = Indexer::new(schema, Arc::new(SearchAnalyzer::default()));
        let mut doc = Document::builder().add_text("title", "mongodb").build();

        indexer.index_document(&mut doc);

        assert!(doc.has_field("searches.titles"));
        assert!(!doc.has_field("searches.default"));
    }
}
