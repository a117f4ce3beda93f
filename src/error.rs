//! Error types for podex.

use thiserror::Error;

/// Main error type for site data and build operations.
///
/// The search path (loader + ranker) never surfaces these to callers: every
/// loader failure resolves to an empty collection. Errors exist for the build
/// pipeline, the accessors, and the CLI boundary.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error reading or writing site data
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization or parse error
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Locale code not present in the registry
    #[error("unsupported locale: {0}")]
    UnsupportedLocale(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Result type alias for podex operations.
pub type Result<T> = std::result::Result<T, Error>;
