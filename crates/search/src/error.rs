//! Error types for the search crate.
//!
//! Scoring and ranking never fail; errors only arise at the JSON boundary.

use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that can occur during search operations.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Corpus JSON could not be parsed
    #[error("Invalid corpus: {0}")]
    InvalidCorpus(#[from] serde_json::Error),

    /// Results could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Error code for integration with memeboard-core error handling.
/// Range: 11xxx for search errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchErrorCode {
    /// Corpus JSON could not be parsed
    InvalidCorpus = 11001,
    /// Results could not be serialized
    Serialization = 11002,
}

impl SearchError {
    /// Returns the error code for this error.
    pub fn code(&self) -> SearchErrorCode {
        match self {
            SearchError::InvalidCorpus(_) => SearchErrorCode::InvalidCorpus,
            SearchError::Serialization(_) => SearchErrorCode::Serialization,
        }
    }
}
