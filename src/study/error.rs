use thiserror::Error;

/// Validation errors for study inputs
///
/// Every numeric input carries a declared range (see [`crate::study::params::ranges`]
/// and [`crate::study::group::ranges`]). Values outside those ranges, or required
/// fields left empty, are rejected before any quantity is computed.
#[derive(Error, Debug, Clone)]
pub enum ParameterError {
    /// A numeric field is outside its declared range
    #[error("Invalid parameter: {param} = {value}")]
    OutOfRange { param: &'static str, value: String },
    /// A required field is missing or empty
    #[error("Invalid parameter: {param} is missing")]
    Missing { param: &'static str },
}
