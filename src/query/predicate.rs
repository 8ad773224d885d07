//! Filter predicates over documents.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::analysis::term_set::TermSet;
use crate::document::{Document, FieldValue};

/// A condition on document fields.
///
/// # Examples
///
/// ```
/// use hunt::document::Document;
/// use hunt::query::Predicate;
///
/// let predicate = Predicate::any_of("searches.default", ["mongodb", "awesom"]);
/// assert_eq!(
///     predicate.to_json().to_string(),
///     r#"{"searches.default":{"$in":["mongodb","awesom"]}}"#
/// );
///
/// let doc = Document::builder()
///     .add_list("searches.default", ["awesom", "stuff"])
///     .build();
/// assert!(predicate.matches(&doc));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Predicate {
    /// The field holds at least one of the terms. No terms matches nothing.
    AnyOf { field: String, terms: TermSet },
    /// The field equals a value. A missing field equals [`FieldValue::Null`].
    Equals { field: String, value: FieldValue },
    /// Every inner predicate holds. An empty conjunction matches every
    /// document and renders as `{}`, which a document store reads the same
    /// way.
    And(Vec<Predicate>),
}

impl Predicate {
    pub fn any_of<F, I, S>(field: F, terms: I) -> Self
    where
        F: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Predicate::AnyOf {
            field: field.into(),
            terms: terms.into_iter().collect(),
        }
    }

    pub fn equals<F: Into<String>, V: Into<FieldValue>>(field: F, value: V) -> Self {
        Predicate::Equals {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Conjunction of `self` and `other`. Nested conjunctions are flattened.
    pub fn and(self, other: Predicate) -> Self {
        let mut parts = match self {
            Predicate::And(parts) => parts,
            single => vec![single],
        };
        match other {
            Predicate::And(more) => parts.extend(more),
            single => parts.push(single),
        }
        Predicate::And(parts)
    }

    /// Evaluate against a document.
    pub fn matches(&self, doc: &Document) -> bool {
        match self {
            Predicate::AnyOf { field, terms } => doc
                .get_field(field)
                .is_some_and(|value| terms.iter().any(|term| value.contains_term(term))),
            Predicate::Equals { field, value } => {
                doc.get_field(field).unwrap_or(&FieldValue::Null) == value
            }
            Predicate::And(parts) => parts.iter().all(|part| part.matches(doc)),
        }
    }

    /// Whether no document can satisfy this predicate.
    pub fn matches_nothing(&self) -> bool {
        match self {
            Predicate::AnyOf { terms, .. } => terms.is_empty(),
            Predicate::Equals { .. } => false,
            Predicate::And(parts) => parts.iter().any(Predicate::matches_nothing),
        }
    }

    /// The search terms of the first term condition, if any.
    pub fn terms(&self) -> Option<&TermSet> {
        match self {
            Predicate::AnyOf { terms, .. } => Some(terms),
            Predicate::Equals { .. } => None,
            Predicate::And(parts) => parts.iter().find_map(Predicate::terms),
        }
    }

    /// Render as a document-store filter.
    ///
    /// Conjunctions over distinct fields merge into one object; when two
    /// parts constrain the same field they are kept apart under `$and`.
    pub fn to_json(&self) -> Value {
        match self {
            Predicate::AnyOf { field, terms } => {
                let mut condition = Map::new();
                condition.insert("$in".to_string(), Value::from(terms.as_slice().to_vec()));
                single_field(field, Value::Object(condition))
            }
            Predicate::Equals { field, value } => single_field(field, value.to_json()),
            Predicate::And(parts) => {
                let rendered: Vec<Value> = parts.iter().map(Predicate::to_json).collect();
                merge_disjoint(&rendered).unwrap_or_else(|| {
                    let mut object = Map::new();
                    object.insert("$and".to_string(), Value::Array(rendered));
                    Value::Object(object)
                })
            }
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json())
    }
}

fn single_field(field: &str, condition: Value) -> Value {
    let mut object = Map::new();
    object.insert(field.to_string(), condition);
    Value::Object(object)
}

fn merge_disjoint(parts: &[Value]) -> Option<Value> {
    let mut merged = Map::new();
    for part in parts {
        for (key, value) in part.as_object()? {
            if merged.insert(key.clone(), value.clone()).is_some() {
                return None;
            }
        }
    }
    Some(Value::Object(merged))
}
