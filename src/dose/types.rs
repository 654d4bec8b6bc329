//! Result types: per-group rows and the aggregated result table

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::dose::calc::compute_group;
use crate::dose::{export, DoseError};
use crate::study::group::ranges;
use crate::study::{DosingFrequency, GroupInput, ParameterError, StudyParameters};

/// The computed compound requirement for one treatment group
///
/// Immutable once computed; a new calculation pass produces fresh instances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupResult {
    label: String,
    dose_mg_per_kg: f64,
    dosing: DosingFrequency,
    total_mg: f64,
    total_with_margin_mg: f64,
}

impl GroupResult {
    pub(crate) fn new(
        label: String,
        dose_mg_per_kg: f64,
        dosing: DosingFrequency,
        total_mg: f64,
        total_with_margin_mg: f64,
    ) -> Self {
        GroupResult {
            label,
            dose_mg_per_kg,
            dosing,
            total_mg,
            total_with_margin_mg,
        }
    }

    /// Get the display label, `"G{index}: {name}"` with a 1-based index
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the dose in mg per kg, copied from the input group
    pub fn dose_mg_per_kg(&self) -> f64 {
        self.dose_mg_per_kg
    }

    /// Get the dosing frequency; exports print its short code (`QD`/`BID`)
    pub fn dosing(&self) -> DosingFrequency {
        self.dosing
    }

    /// Get the compound mass without margin, rounded to two decimals
    pub fn total_mg(&self) -> f64 {
        self.total_mg
    }

    /// Get the compound mass including the safety margin, rounded to two decimals
    pub fn total_with_margin_mg(&self) -> f64 {
        self.total_with_margin_mg
    }
}

impl fmt::Display for GroupResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} ({} mg/kg, {}): {:.2} mg ({:.2} mg with margin)",
            self.label,
            self.dose_mg_per_kg,
            self.dosing.code(),
            self.total_mg,
            self.total_with_margin_mg
        )
    }
}

/// The aggregated result of one calculation pass
///
/// Holds the ordered per-group rows, the margin the pass was computed with,
/// and the grand totals. Grand totals sum the already-rounded per-group
/// figures (round-then-sum), so they always reconcile with the displayed rows.
///
/// A [ResultSet] is owned by whoever requested the calculation; recomputing
/// with changed inputs produces a new, independent instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultSet {
    groups: Vec<GroupResult>,
    margin_percent: f64,
    total_mg: f64,
    total_with_margin_mg: f64,
}

impl ResultSet {
    /// Build a result table from an ordered batch of groups
    ///
    /// Every input is re-validated before any row is computed: the input
    /// surface is expected to have clamped values already, but this is the
    /// last point before output is produced. A validation failure yields no
    /// partial result.
    ///
    /// # Arguments
    ///
    /// * `groups` - Treatment groups in configuration order (1–20 entries)
    /// * `params` - Study-wide parameters
    ///
    /// # Returns
    ///
    /// * `Result<ResultSet, DoseError>` - The result table, with rows in input
    ///   order, or [`DoseError::EmptyBatch`] / [`DoseError::InvalidParameter`]
    pub fn build(groups: &[GroupInput], params: &StudyParameters) -> Result<Self, DoseError> {
        if groups.is_empty() {
            return Err(DoseError::EmptyBatch);
        }
        if !ranges::GROUP_COUNT.contains(&groups.len()) {
            return Err(ParameterError::OutOfRange {
                param: "groups",
                value: groups.len().to_string(),
            }
            .into());
        }
        params.validate()?;
        for group in groups {
            group.validate()?;
        }

        let rows: Vec<GroupResult> = groups
            .iter()
            .enumerate()
            .map(|(i, group)| compute_group(i + 1, group, params))
            .collect();

        let total_mg = rows.iter().map(|r| r.total_mg()).sum();
        let total_with_margin_mg = rows.iter().map(|r| r.total_with_margin_mg()).sum();

        Ok(ResultSet {
            groups: rows,
            margin_percent: params.margin_percent,
            total_mg,
            total_with_margin_mg,
        })
    }

    /// Get the per-group rows, in input order
    pub fn groups(&self) -> &[GroupResult] {
        &self.groups
    }

    /// Get the margin percentage this pass was computed with
    pub fn margin_percent(&self) -> f64 {
        self.margin_percent
    }

    /// Get the grand totals `(without margin, with margin)`
    ///
    /// Both are sums of the rounded per-group figures, not independently
    /// rounded sums of the raw totals.
    pub fn grand_totals(&self) -> (f64, f64) {
        (self.total_mg, self.total_with_margin_mg)
    }

    /// Get an iterator over the per-group rows
    pub fn iter(&self) -> std::slice::Iter<'_, GroupResult> {
        self.groups.iter()
    }

    /// Serialize the table to CSV, see [`export::to_csv`]
    pub fn to_csv(&self) -> Result<Vec<u8>, DoseError> {
        export::to_csv(self)
    }

    /// Serialize the table to a single-sheet XLSX document, see [`export::to_xlsx`]
    pub fn to_xlsx(&self) -> Result<Vec<u8>, DoseError> {
        export::to_xlsx(self)
    }
}
