use thiserror::Error;

use crate::dose::DoseError;

#[derive(Error, Debug)]
pub enum DosecalcError {
    #[error("Error computing doses: {0}")]
    DoseError(#[from] DoseError),
}
