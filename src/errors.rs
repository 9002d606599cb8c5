use std::io;

use thiserror::Error;

use crate::entities::RecordId;

#[derive(Debug, Error)]
pub enum TrackerError {
    // IO-related.
    #[error("Error reading file '{path}'.")]
    ReadError {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("Error writing file '{path}'.")]
    WriteError {
        path: String,
        #[source]
        source: io::Error,
    },

    // Parsing-related.
    #[error("Invalid record store JSON in '{path}'.")]
    InvalidJson {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Invalid {ron_type} (invalid RON format): {details}.")]
    InvalidRon { ron_type: String, details: String },
    #[error("Invalid ISO date: {date}.")]
    InvalidIsoDate { date: String },
    #[error("Start of day {date} does not exist in the configured time zone.")]
    UnresolvableDayStart { date: String },

    // Record-store-related.
    #[error("A record with id '{id}' already exists.")]
    DuplicateRecordId { id: RecordId },

    // Analysis-related.
    #[error("Nothing to analyze: input is empty.")]
    EmptyAnalysisInput,
    #[error("Ingredient analysis failed: {details}.")]
    AnalysisFailed { details: String },
}

impl TrackerError {
    pub(crate) fn read(path: &std::path::Path, source: io::Error) -> Self {
        TrackerError::ReadError {
            path: path.to_string_lossy().to_string(),
            source,
        }
    }

    pub(crate) fn write(path: &std::path::Path, source: io::Error) -> Self {
        TrackerError::WriteError {
            path: path.to_string_lossy().to_string(),
            source,
        }
    }

    pub(crate) fn invalid_json(path: &std::path::Path, source: serde_json::Error) -> Self {
        TrackerError::InvalidJson {
            path: path.to_string_lossy().to_string(),
            source,
        }
    }

    pub(crate) fn invalid_ron(ron_type: &str, e: &impl std::fmt::Display) -> Self {
        TrackerError::InvalidRon {
            ron_type: ron_type.to_string(),
            details: e.to_string(),
        }
    }

    /// Wraps a failure reported by an external analyzer.
    pub fn analysis_failed(details: impl std::fmt::Display) -> Self {
        TrackerError::AnalysisFailed {
            details: details.to_string(),
        }
    }
}
