//! Error handling for herdbook queries and registry loading.

pub mod util;

use arrow::error::ArrowError;
use parquet::errors::ParquetError;
use std::io;

/// Specialized error type for herdbook operations
#[derive(Debug, thiserror::Error)]
pub enum HerdbookError {
    /// The requested animal does not exist in the registry
    #[error("Animal not found: {id}")]
    NotFound {
        /// Identifier that failed to resolve
        id: String,
    },

    /// Requested pedigree depth is outside the accepted range
    #[error("Invalid pedigree depth {depth}: expected a value between {min} and {max}")]
    InvalidDepth {
        /// Depth supplied by the caller
        depth: u32,
        /// Smallest accepted depth
        min: u32,
        /// Largest accepted depth
        max: u32,
    },

    /// Unexpected failure while traversing ancestry or reproductive history
    #[error("Computation fault: {0}")]
    ComputationFault(String),

    /// Registry column missing or holding an unexpected type
    #[error("Column '{column}': {message}")]
    Column {
        /// Column name
        column: String,
        /// What was wrong with it
        message: String,
    },

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error opening or reading a file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error decoding a JSON document
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error building or reading Arrow data
    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),

    /// Error processing Parquet data
    #[error("Parquet error: {0}")]
    Parquet(#[from] ParquetError),

    /// Any other error with attached context
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl HerdbookError {
    /// Create a `NotFound` error for an identifier
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// Create a `ComputationFault` error from any message
    pub fn computation_fault(message: impl Into<String>) -> Self {
        Self::ComputationFault(message.into())
    }

    /// Create a `Column` error
    pub fn column(column: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Column {
            column: column.into(),
            message: message.into(),
        }
    }

    /// Whether this error means the subject does not exist
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type for herdbook operations
pub type Result<T> = std::result::Result<T, HerdbookError>;
