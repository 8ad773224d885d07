//! Field value types for documents.
//!
//! # Supported Types
//!
//! - **Text** - String data, searchable
//! - **List** - A list of strings such as tags, searchable element by element
//! - **Integer** - 64-bit signed integers
//! - **Boolean** - true/false values
//! - **Null** - Explicit null values
//!
//! ```
//! use hunt::document::field_value::FieldValue;
//!
//! let tags = FieldValue::from(vec!["mongo", "nosql"]);
//! assert_eq!(tags.search_text().collect::<Vec<_>>(), ["mongo", "nosql"]);
//! assert_eq!(FieldValue::Integer(42).search_text().count(), 0);
//! ```

use serde::{Deserialize, Serialize};

/// Represents a value for a field in a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldValue {
    /// Text value
    Text(String),
    /// List of strings
    List(Vec<String>),
    /// Integer value
    Integer(i64),
    /// Boolean value
    Boolean(bool),
    /// Null value
    Null,
}

impl FieldValue {
    /// Convert to text if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the elements if this is a list value.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Convert to integer if this is an integer value.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Convert to boolean if this is a boolean value.
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            FieldValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// The pieces of text this value contributes to a search index.
    ///
    /// Text yields itself, a list yields each element in order, and every
    /// other variant yields nothing.
    pub fn search_text(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        match self {
            FieldValue::Text(s) => Box::new(std::iter::once(s.as_str())),
            FieldValue::List(items) => Box::new(items.iter().map(String::as_str)),
            _ => Box::new(std::iter::empty()),
        }
    }

    /// Whether a stored value holds `term`: a list element equal to it, or a
    /// text equal to it.
    pub fn contains_term(&self, term: &str) -> bool {
        match self {
            FieldValue::List(items) => items.iter().any(|item| item == term),
            FieldValue::Text(s) => s == term,
            _ => false,
        }
    }

    /// JSON form used when rendering store filters.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            FieldValue::Text(s) => serde_json::Value::from(s.as_str()),
            FieldValue::List(items) => serde_json::Value::from(items.clone()),
            FieldValue::Integer(i) => serde_json::Value::from(*i),
            FieldValue::Boolean(b) => serde_json::Value::from(*b),
            FieldValue::Null => serde_json::Value::Null,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl<S: Into<String>> From<Vec<S>> for FieldValue {
    fn from(items: Vec<S>) -> Self {
        FieldValue::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Boolean(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Null, Into::into)
    }
}
