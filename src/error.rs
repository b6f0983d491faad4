use thiserror::Error;

/// Custom error types for the quickmatch library
#[derive(Error, Debug)]
pub enum QuickMatchError {
    /// Candidate cannot be turned into matchable text when no keys are given
    #[error("Candidate cannot be stringified: {0}")]
    InvalidCandidate(String),

    /// Operator string is not in the closed operator set
    #[error("Unknown filter operator: {0}")]
    UnknownOperator(String),

    /// A between/nbetween filter whose value is not a well-ordered pair
    #[error("Malformed range filter: {0}")]
    MalformedRange(String),

    /// An in/nin filter with an empty or non-list candidate set
    #[error("Invalid filter value set: {0}")]
    EmptySet(String),

    /// Error during JSON processing
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias for quickmatch operations
pub type Result<T> = std::result::Result<T, QuickMatchError>;
