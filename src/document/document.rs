//! Document structure.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::document::field_value::FieldValue;

/// A record as seen by the indexer and by in-memory predicate evaluation.
///
/// Field names are flat strings; the indexed terms live under a dotted name
/// such as `searches.default`, the way a document store addresses a sub-field.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// The field values for this document
    fields: HashMap<String, FieldValue>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Document {
            fields: HashMap::new(),
        }
    }

    /// Add or replace a field value.
    pub fn add_field<S: Into<String>>(&mut self, name: S, value: FieldValue) {
        self.fields.insert(name.into(), value);
    }

    /// Get a field value from the document.
    pub fn get_field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Check if the document has a field.
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Remove a field from the document.
    pub fn remove_field(&mut self, name: &str) -> Option<FieldValue> {
        self.fields.remove(name)
    }

    /// Get all field names.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.keys().map(|s| s.as_str()).collect()
    }

    /// Get all field values.
    pub fn fields(&self) -> &HashMap<String, FieldValue> {
        &self.fields
    }

    /// Get the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the document is empty.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Create a builder for constructing documents.
    pub fn builder() -> DocumentBuilder {
        DocumentBuilder::new()
    }
}

/// A builder for constructing documents in a fluent manner.
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    document: Document,
}

impl DocumentBuilder {
    /// Create a new document builder.
    pub fn new() -> Self {
        DocumentBuilder {
            document: Document::new(),
        }
    }

    /// Add a text field to the document.
    pub fn add_text<S: Into<String>, T: Into<String>>(mut self, name: S, value: T) -> Self {
        self.document
            .add_field(name, FieldValue::Text(value.into()));
        self
    }

    /// Add a list-of-strings field to the document.
    pub fn add_list<S, I, T>(mut self, name: S, values: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let items = values.into_iter().map(Into::into).collect();
        self.document.add_field(name, FieldValue::List(items));
        self
    }

    /// Add an integer field to the document.
    pub fn add_integer<S: Into<String>>(mut self, name: S, value: i64) -> Self {
        self.document.add_field(name, FieldValue::Integer(value));
        self
    }

    /// Add a boolean field to the document.
    pub fn add_boolean<S: Into<String>>(mut self, name: S, value: bool) -> Self {
        self.document.add_field(name, FieldValue::Boolean(value));
        self
    }

    /// Add a field of any value type.
    pub fn add_field<S: Into<String>>(mut self, name: S, value: FieldValue) -> Self {
        self.document.add_field(name, value);
        self
    }

    /// Build the document.
    pub fn build(self) -> Document {
        self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let doc = Document::builder()
            .add_text("title", "Woot for MongoDB!")
            .add_list("tags", ["mongo", "nosql"])
            .add_integer("user_id", 7)
            .add_boolean("published", true)
            .build();

        assert_eq!(doc.len(), 4);
        assert_eq!(doc.get_field("title").and_then(FieldValue::as_text), Some("Woot for MongoDB!"));
        assert_eq!(
            doc.get_field("tags").and_then(FieldValue::as_list),
            Some(&["mongo".to_string(), "nosql".to_string()][..])
        );
        assert!(doc.has_field("user_id"));
    }

    #[test]
    fn test_replace_and_remove() {
        let mut doc = Document::builder().add_text("title", "Mongo").build();
        doc.add_field("title", FieldValue::from("Another woot"));
        assert_eq!(doc.get_field("title").and_then(FieldValue::as_text), Some("Another woot"));

        assert!(doc.remove_field("title").is_some());
        assert!(doc.is_empty());
        assert!(doc.field_names().is_empty());
    }
}
