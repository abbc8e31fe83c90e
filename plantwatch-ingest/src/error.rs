//! Error types for ingestion.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading a dataset.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Failed to read the source file.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The header row does not match the expected column contract.
    #[error("invalid CSV headers: expected {expected:?}, received {received:?}")]
    InvalidHeader {
        expected: &'static [&'static str],
        received: Vec<String>,
    },

    /// The file parsed but contained no data rows.
    #[error("CSV file contains no data rows")]
    Empty,

    /// The file exceeds the maximum allowed number of rows.
    #[error("CSV file exceeds maximum allowed rows ({max})")]
    TooManyRows { max: usize },

    /// A row could not be parsed into a typed reading.
    #[error("failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),
}
