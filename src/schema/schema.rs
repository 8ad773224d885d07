//! Searchable-field declarations.

use serde::{Deserialize, Serialize};

use crate::error::{HuntError, Result};

/// Parent field that holds every term index of a record.
pub const SEARCHES_FIELD: &str = "searches";

/// Index name used when none is given.
pub const DEFAULT_INDEX_NAME: &str = "default";

/// The searchable fields of a record type and the name of their term index.
///
/// Terms are stored at `searches.<index_name>`, so one record type can carry
/// several independent indexes.
///
/// # Examples
///
/// ```
/// use hunt::schema::SearchSchema;
///
/// let schema = SearchSchema::new(["title", "body"]);
/// assert_eq!(schema.fields(), ["title", "body"]);
/// assert_eq!(schema.index_path(), "searches.default");
///
/// let schema = schema.with_index_name("titles").unwrap();
/// assert_eq!(schema.index_path(), "searches.titles");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSearchSchema")]
pub struct SearchSchema {
    fields: Vec<String>,
    index_name: String,
}

/// Unvalidated form read from configuration.
#[derive(Deserialize)]
struct RawSearchSchema {
    fields: Vec<String>,
    #[serde(default = "default_index_name")]
    index_name: String,
}

fn default_index_name() -> String {
    DEFAULT_INDEX_NAME.to_string()
}

impl TryFrom<RawSearchSchema> for SearchSchema {
    type Error = HuntError;

    fn try_from(raw: RawSearchSchema) -> Result<Self> {
        SearchSchema::new(raw.fields).with_index_name(raw.index_name)
    }
}

impl SearchSchema {
    /// Declare the searchable fields, in the order their values are joined.
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SearchSchema {
            fields: fields.into_iter().map(Into::into).collect(),
            index_name: DEFAULT_INDEX_NAME.to_string(),
        }
    }

    /// Store the terms under a different index name.
    ///
    /// The name becomes part of a dotted field path, so it must be non-empty
    /// and may not contain `.` or start with `$`.
    pub fn with_index_name<S: Into<String>>(mut self, name: S) -> Result<Self> {
        let name = name.into();
        if name.is_empty() || name.contains('.') || name.starts_with('$') {
            return Err(HuntError::config(format!("invalid search index name '{name}'")));
        }
        self.index_name = name;
        Ok(self)
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn index_name(&self) -> &str {
        &self.index_name
    }

    /// Path of the stored term list, e.g. `searches.default`.
    pub fn index_path(&self) -> String {
        format!("{SEARCHES_FIELD}.{}", self.index_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_index_name() {
        let schema = SearchSchema::new(["title"]);
        assert_eq!(schema.index_name(), "default");
        assert_eq!(schema.index_path(), "searches.default");
    }

    #[test]
    fn test_rejects_invalid_index_names() {
        for name in ["", "a.b", "$in"] {
            let result = SearchSchema::new(["title"]).with_index_name(name);
            assert!(result.unwrap_err().is_config(), "{name:?} should be rejected");
        }
    }

    #[test]
    fn test_deserialize_validates_index_name() {
        let schema: SearchSchema = serde_json::from_str(r#"{"fields": ["title"]}"#).unwrap();
        assert_eq!(schema.index_path(), "searches.default");

        let schema: SearchSchema =
            serde_json::from_str(r#"{"fields": ["title"], "index_name": "titles"}"#).unwrap();
        assert_eq!(schema.index_path(), "searches.titles");

        for name in ["", "a.b", "$in"] {
            let json = serde_json::json!({"fields": ["title"], "index_name": name});
            assert!(serde_json::from_value::<SearchSchema>(json).is_err(), "{name:?}");
        }
    }

    #[test]
    fn test_field_order_is_kept() {
        let schema = SearchSchema::new(vec!["title".to_string(), "tags".to_string()]);
        assert_eq!(schema.fields(), ["title", "tags"]);
    }
}
