//! The dose-quantity formula
//!
//! One treatment group plus the study-wide parameters map deterministically to
//! one [`GroupResult`]:
//!
//! ```text
//! total_mg = dose_mg_per_kg × weight_kg × animals_per_group × doses_total
//! total_with_margin_mg = total_mg × (1 + margin_percent / 100)
//! ```
//!
//! Inputs are trusted here; range validation happens at the input surface and
//! is re-checked by [`ResultSet::build`](crate::dose::ResultSet::build) before
//! this formula runs.

use crate::dose::GroupResult;
use crate::study::{GroupInput, StudyParameters};

/// Round a value to two decimal places
///
/// Both per-group totals are reported at this precision; the computation
/// itself runs in full `f64` precision and rounds only at the end.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Compute the compound requirement for one treatment group
///
/// A zero dose is a valid input (e.g. a vehicle control group) and yields zero
/// totals. Pure function, no side effects.
///
/// # Arguments
///
/// * `index` - 1-based position of the group in the study, used for the label
/// * `group` - The treatment group
/// * `params` - Study-wide parameters
///
/// # Returns
///
/// The computed [GroupResult], with both totals rounded to two decimals.
pub fn compute_group(index: usize, group: &GroupInput, params: &StudyParameters) -> GroupResult {
    let doses_total = group.dosing().doses_total(params.duration_days);

    let total_mg = group.dose_mg_per_kg()
        * params.average_weight_kg()
        * params.animals_per_group as f64
        * doses_total;
    let total_with_margin_mg = total_mg * (1.0 + params.margin_percent / 100.0);

    GroupResult::new(
        format!("G{}: {}", index, group.name()),
        group.dose_mg_per_kg(),
        group.dosing(),
        round2(total_mg),
        round2(total_with_margin_mg),
    )
}
