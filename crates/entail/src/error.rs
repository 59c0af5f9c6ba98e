//! Error types for the Entail library.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Structural problems with an otherwise well-formed JSON dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// The top-level value is not an array.
    NotAnArray,
    /// Elements lacking `premise` or `hypothesis`, as 1-based positions.
    MissingFields { positions: Vec<usize> },
    /// The array has no elements.
    Empty,
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaError::NotAnArray => write!(f, "JSON data must be an array of objects."),
            SchemaError::MissingFields { positions } => {
                let joined = positions
                    .iter()
                    .map(|p| p.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(
                    f,
                    "Invalid data format. Items at positions {} are missing \"hypothesis\" or \"premise\" keys.",
                    joined
                )
            }
            SchemaError::Empty => write!(f, "The uploaded file contains no data items."),
        }
    }
}

impl std::error::Error for SchemaError {}

/// Main error type for Entail operations.
#[derive(Debug, Error)]
pub enum LabelError {
    /// Input text is not valid JSON.
    #[error("Invalid JSON file. Please check the file format and try again. ({0})")]
    Parse(#[source] serde_json::Error),

    /// Input JSON does not have the dataset shape.
    #[error("{0}")]
    Schema(#[from] SchemaError),

    /// Export requested with no dataset loaded.
    #[error("No data to export. Please upload a file first.")]
    EmptyExport,

    /// A label name that is not one of the three categories.
    #[error("Unknown label '{0}'. Use contradiction, neutral or entailment.")]
    InvalidLabel(String),

    /// A navigation step other than -1 or +1.
    #[error("Invalid direction {0}. Use -1 or 1.")]
    InvalidDirection(i64),

    /// Selected file is not JSON.
    #[error("Please select a valid JSON file. ({0})")]
    UnsupportedFormat(String),

    /// Error reading or writing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Snapshot store failure.
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LabelError {
    /// Whether this error came from user input rather than the environment.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            LabelError::Parse(_)
                | LabelError::Schema(_)
                | LabelError::InvalidLabel(_)
                | LabelError::InvalidDirection(_)
                | LabelError::UnsupportedFormat(_)
        )
    }
}

/// Result type alias for Entail operations.
pub type Result<T> = std::result::Result<T, LabelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_message_lists_positions() {
        let err = SchemaError::MissingFields {
            positions: vec![2, 5],
        };
        assert_eq!(
            err.to_string(),
            "Invalid data format. Items at positions 2, 5 are missing \"hypothesis\" or \"premise\" keys."
        );
    }

    #[test]
    fn test_schema_error_converts() {
        let err: LabelError = SchemaError::Empty.into();
        assert!(matches!(err, LabelError::Schema(SchemaError::Empty)));
        assert!(err.is_validation());
        assert!(!LabelError::EmptyExport.is_validation());
    }
}
