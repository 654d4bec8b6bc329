//! Compound quantity calculation for preclinical dosing studies
//!
//! This module converts a configured study ([`crate::StudyDesign`]) into the
//! total compound mass required per treatment group, aggregates the per-group
//! figures into a [`ResultSet`] with grand totals, and serializes the table to
//! CSV or XLSX byte buffers for download by the caller.
//!
//! # Key quantities
//!
//! | Quantity | Description |
//! |----------|-------------|
//! | doses_total | Number of doses over the treatment duration (QD: days, BID: 2 × days) |
//! | total_mg | Compound mass for one group, no margin |
//! | total_with_margin_mg | Compound mass including the safety margin |
//! | grand totals | Sums of the rounded per-group figures |
//!
//! # Usage
//!
//! ```rust
//! use dosecalc::{DosingFrequency, StudyDesign};
//!
//! let design = StudyDesign::builder("Mon étude")
//!     .animals_per_group(8)
//!     .average_weight_g(20.0)
//!     .duration_days(21)
//!     .margin_percent(10.0)
//!     .group("G1", 10.0, DosingFrequency::OnceDaily)
//!     .build();
//!
//! let results = design.results().unwrap();
//! assert_eq!(results.groups()[0].total_mg(), 33.6);
//!
//! let csv_bytes = results.to_csv().unwrap();
//! let xlsx_bytes = results.to_xlsx().unwrap();
//! ```
//!
//! # Rounding policy
//!
//! Per-group totals are computed in full `f64` precision, then rounded to two
//! decimals. Grand totals sum the already-rounded per-group figures
//! (round-then-sum), so the table footer always reconciles with the rows.

pub mod calc;
mod error;
pub mod export;
mod types;

pub use calc::{compute_group, round2};
pub use error::DoseError;
pub use types::{GroupResult, ResultSet};
