//! Search configuration.
//!
//! A [`SearchConfig`] is built once at application setup and then shared by
//! reference. It replaces process-wide mutable settings: changing the
//! configuration means building a new value and a new analyzer from it.
//!
//! # Examples
//!
//! ```
//! use hunt::config::{SearchConfig, TransliterationOption};
//!
//! let config = SearchConfig::configure(|c| {
//!     c.additional_words_to_ignore = vec!["bang".to_string()];
//!     c.transliteration_option = TransliterationOption::German;
//! });
//!
//! assert_eq!(config.transliteration_option(), TransliterationOption::German);
//! assert_eq!(config.additional_words_to_ignore(), ["bang"]);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{HuntError, Result};

/// Selects the transliteration table applied to non-ASCII letters.
///
/// The Latin table (diacritic folding, `ł`, `ß`, ...) is always active; an
/// option adds a table that takes precedence over it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum TransliterationOption {
    /// Latin diacritic folding only.
    #[default]
    None,
    /// Russian, Ukrainian and Belarusian letters to a Latin phonetic spelling.
    Cyrillic,
    /// German umlauts spelled out (`ä` → `ae`).
    German,
}

impl TransliterationOption {
    /// All recognized options.
    pub const ALL: [TransliterationOption; 3] = [
        TransliterationOption::None,
        TransliterationOption::Cyrillic,
        TransliterationOption::German,
    ];

    /// The configuration name of this option.
    pub fn name(&self) -> &'static str {
        match self {
            TransliterationOption::None => "none",
            TransliterationOption::Cyrillic => "cyrillic",
            TransliterationOption::German => "german",
        }
    }
}

impl fmt::Display for TransliterationOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TransliterationOption {
    type Err = HuntError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_ascii_lowercase();
        TransliterationOption::ALL
            .into_iter()
            .find(|option| option.name() == name)
            .ok_or_else(|| {
                HuntError::config(format!(
                    "unknown transliteration option '{s}' (expected one of: none, cyrillic, german)"
                ))
            })
    }
}

impl TryFrom<String> for TransliterationOption {
    type Error = HuntError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// Sort direction of one key in a compound index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexDirection {
    Ascending,
    Descending,
}

/// How the host should declare the storage index for the search terms.
///
/// Hunt never interprets this value; it is kept so the host can create the
/// index in its document store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IndexSpec {
    /// A single-field index, e.g. `searches.default`.
    Field(String),
    /// A compound index over several keys.
    Compound(Vec<(String, IndexDirection)>),
}

impl IndexSpec {
    /// Field names covered by this index, in order.
    pub fn fields(&self) -> Vec<&str> {
        match self {
            IndexSpec::Field(name) => vec![name.as_str()],
            IndexSpec::Compound(keys) => keys.iter().map(|(name, _)| name.as_str()).collect(),
        }
    }
}

/// Configuration shared by every analyzer, indexer and query builder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Words ignored in addition to the built-in stopword list.
    pub additional_words_to_ignore: Vec<String>,
    /// Transliteration table selector.
    pub transliteration_option: TransliterationOption,
    /// Index declaration forwarded to the host.
    pub searches_index_name: Option<IndexSpec>,
}

impl SearchConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a configuration by mutating the defaults in a closure.
    pub fn configure<F>(f: F) -> Self
    where
        F: FnOnce(&mut SearchConfig),
    {
        let mut config = SearchConfig::default();
        f(&mut config);
        config
    }

    /// Parse a configuration from JSON.
    ///
    /// Unknown transliteration options are rejected here rather than ignored.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SearchConfig = serde_json::from_str(json)?;
        log::debug!(
            "loaded search config: transliteration={}, additional stopwords={}",
            config.transliteration_option,
            config.additional_words_to_ignore.len()
        );
        Ok(config)
    }

    /// Append words to the ignore list.
    pub fn with_additional_words_to_ignore<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.additional_words_to_ignore
            .extend(words.into_iter().map(Into::into));
        self
    }

    /// Set the transliteration option.
    pub fn with_transliteration_option(mut self, option: TransliterationOption) -> Self {
        self.transliteration_option = option;
        self
    }

    /// Set the transliteration option by name, failing on unknown names.
    pub fn with_transliteration_name(self, name: &str) -> Result<Self> {
        Ok(self.with_transliteration_option(name.parse()?))
    }

    /// Set the index declaration.
    pub fn with_searches_index_name(mut self, spec: IndexSpec) -> Self {
        self.searches_index_name = Some(spec);
        self
    }

    pub fn additional_words_to_ignore(&self) -> &[String] {
        &self.additional_words_to_ignore
    }

    pub fn transliteration_option(&self) -> TransliterationOption {
        self.transliteration_option
    }

    pub fn searches_index_name(&self) -> Option<&IndexSpec> {
        self.searches_index_name.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SearchConfig::new();
        assert!(config.additional_words_to_ignore().is_empty());
        assert_eq!(config.transliteration_option(), TransliterationOption::None);
        assert!(config.searches_index_name().is_none());
    }

    #[test]
    fn test_parse_transliteration_option() {
        assert_eq!(
            "cyrillic".parse::<TransliterationOption>().unwrap(),
            TransliterationOption::Cyrillic
        );
        assert_eq!(
            " German ".parse::<TransliterationOption>().unwrap(),
            TransliterationOption::German
        );

        let err = "klingon".parse::<TransliterationOption>().unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_builder() {
        let config = SearchConfig::new()
            .with_additional_words_to_ignore(["bang", "yabadabaduu"])
            .with_transliteration_name("cyrillic")
            .unwrap();

        assert_eq!(config.additional_words_to_ignore(), ["bang", "yabadabaduu"]);
        assert_eq!(config.transliteration_option(), TransliterationOption::Cyrillic);
        assert!(SearchConfig::new().with_transliteration_name("elvish").is_err());
    }

    #[test]
    fn test_index_spec_is_kept_verbatim() {
        let field = IndexSpec::Field("searches.default".to_string());
        let config = SearchConfig::configure(|c| c.searches_index_name = Some(field.clone()));
        assert_eq!(config.searches_index_name(), Some(&field));

        let compound = IndexSpec::Compound(vec![
            ("searches.default".to_string(), IndexDirection::Ascending),
            ("user_dir".to_string(), IndexDirection::Ascending),
        ]);
        let config = SearchConfig::new().with_searches_index_name(compound.clone());
        assert_eq!(config.searches_index_name(), Some(&compound));
        assert_eq!(compound.fields(), vec!["searches.default", "user_dir"]);
    }

    #[test]
    fn test_from_json() {
        let config = SearchConfig::from_json(
            r#"{
                "additional_words_to_ignore": ["bang"],
                "transliteration_option": "german",
                "searches_index_name": [
                    ["searches.default", "ascending"],
                    ["user_id", "descending"]
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(config.additional_words_to_ignore(), ["bang"]);
        assert_eq!(config.transliteration_option(), TransliterationOption::German);
        assert_eq!(
            config.searches_index_name(),
            Some(&IndexSpec::Compound(vec![
                ("searches.default".to_string(), IndexDirection::Ascending),
                ("user_id".to_string(), IndexDirection::Descending),
            ]))
        );

        let config =
            SearchConfig::from_json(r#"{"searches_index_name": "searches.default"}"#).unwrap();
        assert_eq!(
            config.searches_index_name(),
            Some(&IndexSpec::Field("searches.default".to_string()))
        );
    }

    #[test]
    fn test_from_json_rejects_unknown_option() {
        let result = SearchConfig::from_json(r#"{"transliteration_option": "klingon"}"#);
        assert!(matches!(result, Err(HuntError::Json(_))));
    }

    #[test]
    fn test_serialize_option_name() {
        let json = serde_json::to_value(TransliterationOption::Cyrillic).unwrap();
        assert_eq!(json, serde_json::json!("cyrillic"));
    }
}
