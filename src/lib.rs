pub mod dose;
pub mod error;
pub mod study;

pub use crate::dose::export::{suggested_filename, ExportFormat};
pub use crate::dose::{compute_group, round2, DoseError, GroupResult, ResultSet};
pub use crate::study::builder::StudyBuilder;
pub use crate::study::*;
pub use error::DosecalcError;

pub mod prelude {
    pub use crate::dose::export::{suggested_filename, to_csv, to_xlsx, ExportFormat};
    pub use crate::dose::{compute_group, round2, DoseError, GroupResult, ResultSet};
    pub use crate::error::DosecalcError;
    pub use crate::study::builder::StudyBuilder;
    pub use crate::study::{
        DosingFrequency, GroupInput, ParameterError, StudyDesign, StudyParameters,
    };
}
