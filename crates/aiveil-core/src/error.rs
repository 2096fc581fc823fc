//! Error types for rule loading.

use thiserror::Error;

/// Errors that can occur while building a rule set.
///
/// Classification itself never fails; every error here surfaces at
/// configuration time, before the first call to `classify`.
#[derive(Debug, Error)]
pub enum Error {
    /// A rule pattern failed to compile.
    #[error("Invalid pattern in {table}: {pattern:?}: {source}")]
    InvalidPattern {
        /// Rule table the pattern belongs to.
        table: &'static str,
        /// The offending pattern text.
        pattern: String,
        /// Underlying regex error.
        #[source]
        source: regex::Error,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error (e.g., reading a rule file).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for rule operations.
pub type Result<T> = std::result::Result<T, Error>;
