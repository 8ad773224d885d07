//! Build term predicates from search text.

use std::sync::Arc;

use crate::analysis::analyzer::SearchAnalyzer;
use crate::query::predicate::Predicate;

/// Predicate matching documents whose `field` holds any stem of `text`.
///
/// Text runs through the same analysis as indexing. When nothing survives
/// (absent, blank or all stop words) the predicate has no terms and matches
/// nothing.
///
/// # Examples
///
/// ```
/// use hunt::analysis::analyzer::SearchAnalyzer;
/// use hunt::query::build_query;
///
/// let analyzer = SearchAnalyzer::default();
/// let predicate = build_query(&analyzer, "searches.default", Some("MongoDB is awesome!"));
/// assert_eq!(
///     predicate.to_json().to_string(),
///     r#"{"searches.default":{"$in":["mongodb","awesom"]}}"#
/// );
/// ```
pub fn build_query(analyzer: &SearchAnalyzer, field: &str, text: Option<&str>) -> Predicate {
    let terms = analyzer.to_stemmed_words(text);
    if terms.is_empty() {
        log::debug!("no search terms for {field}, query matches nothing");
    }
    Predicate::AnyOf {
        field: field.to_string(),
        terms,
    }
}

/// Builds term predicates against one index field.
#[derive(Clone, Debug)]
pub struct QueryBuilder {
    field: String,
    analyzer: Arc<SearchAnalyzer>,
}

impl QueryBuilder {
    pub fn new<S: Into<String>>(field: S, analyzer: Arc<SearchAnalyzer>) -> Self {
        QueryBuilder {
            field: field.into(),
            analyzer,
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn build(&self, text: Option<&str>) -> Predicate {
        build_query(&self.analyzer, &self.field, text)
    }

    /// Narrow an existing predicate with a text search.
    pub fn build_within(&self, scope: Predicate, text: Option<&str>) -> Predicate {
        scope.and(self.build(text))
    }
}
