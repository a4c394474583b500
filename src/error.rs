//! Error types for inference-report

use thiserror::Error;

/// Result type alias for report operations
pub type ReportResult<T> = Result<T, ReportError>;

/// Errors that can occur while producing report artifacts
///
/// Missing or malformed inputs never surface here: every read failure has a
/// documented fallback value (an absent record, an unknown audio duration, an
/// empty target document). Only artifact writes and snapshot serialization
/// abort a run.
#[derive(Debug, Error)]
pub enum ReportError {
    /// I/O error writing an artifact or the patched document
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot serialization error
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
