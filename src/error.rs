//! Error types for the Hunt library.
//!
//! Text processing in Hunt is total: absent input, undecodable bytes and
//! characters without a transliteration are dropped rather than reported.
//! The errors below are therefore almost entirely configuration errors,
//! surfaced when a [`SearchConfig`](crate::config::SearchConfig) is built.
//!
//! # Examples
//!
//! ```
//! use hunt::error::{HuntError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(HuntError::config("unknown transliteration option 'klingon'"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

/// The main error type for Hunt operations.
#[derive(Error, Debug)]
pub enum HuntError {
    /// Invalid configuration (unknown transliteration option, bad index spec, ...)
    #[error("Configuration error: {0}")]
    Config(String),

    /// A tokenizer or token filter failed
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with HuntError.
pub type Result<T> = std::result::Result<T, HuntError>;

impl HuntError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        HuntError::Config(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        HuntError::Analysis(msg.into())
    }

    /// Whether this error was caused by invalid configuration.
    pub fn is_config(&self) -> bool {
        matches!(self, HuntError::Config(_))
    }
}
