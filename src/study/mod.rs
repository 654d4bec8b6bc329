pub mod builder;
mod error;
pub mod group;
pub mod params;
mod structs;

pub use error::ParameterError;
pub use group::*;
pub use params::StudyParameters;
pub use structs::StudyDesign;
