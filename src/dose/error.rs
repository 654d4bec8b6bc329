//! Dose calculation error types

use thiserror::Error;

/// Errors that can occur while building or exporting a result table
#[derive(Error, Debug, Clone)]
pub enum DoseError {
    /// An input value is outside its declared range or a required field is missing
    #[error(transparent)]
    InvalidParameter(#[from] crate::study::ParameterError),

    /// No treatment groups were supplied to aggregation
    #[error("No treatment groups supplied")]
    EmptyBatch,

    /// Error encountered while writing CSV output
    #[error("CSV error: {0}")]
    Csv(String),

    /// Error encountered while writing XLSX output
    #[error("XLSX error: {0}")]
    Xlsx(String),
}
