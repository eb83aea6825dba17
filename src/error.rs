//! Error types for the trendy library.

use thiserror::Error;

/// Result type alias for clustering operations.
pub type Result<T> = std::result::Result<T, TrendyError>;

/// Errors that can occur during distance computation or clustering.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrendyError {
    /// Input data is empty.
    #[error("empty input data")]
    EmptyData,

    /// Fewer input sequences than requested clusters.
    #[error("insufficient data: need at least {needed} sequences, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Sequence lengths do not match where equal lengths are required.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// All elements of a sequence are equal, so its range is zero and it
    /// cannot be scaled to 0-1.
    #[error("constant sequence: zero range cannot be scaled to 0-1")]
    ConstantSequence,

    /// Estimator has not been fitted yet.
    #[error("estimator must be fitted before prediction")]
    FitRequired,

    /// Snapshot encoding or decoding failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Filesystem error while saving or loading a snapshot.
    #[error("io error: {0}")]
    Io(String),
}
