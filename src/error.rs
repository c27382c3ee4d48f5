//! Typed errors for the intake library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.
//!
//! Note that a low-confidence classification is NOT an error: it is the
//! `out_of_scope` business outcome, returned as a normal [`Decision`]
//! value. Only infrastructure failures (classifier unreachable, storage
//! failed) and invalid input surface here.
//!
//! [`Decision`]: crate::types::decision::Decision

use thiserror::Error;

/// Errors that can occur during intake operations.
#[derive(Debug, Error)]
pub enum IntakeError {
    /// Complaint text was empty or whitespace-only.
    ///
    /// Rejected before any classification attempt.
    #[error("complaint text is empty")]
    EmptyComplaint,

    /// The text-classification capability could not be reached or
    /// errored internally.
    ///
    /// Must never be downgraded to an `out_of_scope` decision.
    #[error("classifier unavailable: {0}")]
    ClassifierUnavailable(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The classifier returned no scored labels for a non-empty
    /// candidate list.
    #[error("classifier returned no scores for {label_count} candidate labels")]
    EmptyClassification { label_count: usize },

    /// The classifier returned a department that is not in the taxonomy.
    #[error("unknown department: {name}")]
    UnknownDepartment { name: String },

    /// Complaint not found in the store.
    #[error("complaint not found: {code}")]
    ComplaintNotFound { code: String },

    /// A complaint status transition that the lifecycle forbids.
    #[error("invalid status transition: {from} -> {to}")]
    InvalidTransition { from: String, to: String },

    /// Storage operation failed.
    #[error("storage error: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Operation was cancelled by the caller.
    #[error("operation cancelled")]
    Cancelled,

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Result type alias for intake operations.
pub type Result<T> = std::result::Result<T, IntakeError>;
