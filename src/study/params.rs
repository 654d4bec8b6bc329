use serde::{Deserialize, Serialize};

use crate::study::ParameterError;

/// Valid ranges for study-level inputs
///
/// These mirror the bounds enforced by the input surface. [`StudyParameters::validate`]
/// re-checks them before any calculation, and [`StudyParameters::clamped`] folds
/// out-of-range values back into them.
pub mod ranges {
    use std::ops::RangeInclusive;

    /// Animals per treatment group
    pub const ANIMALS_PER_GROUP: RangeInclusive<u32> = 1..=50;
    /// Average animal weight in grams
    pub const AVERAGE_WEIGHT_G: RangeInclusive<f64> = 1.0..=100.0;
    /// Treatment duration in days
    pub const DURATION_DAYS: RangeInclusive<u32> = 1..=180;
    /// Safety margin percentage
    pub const MARGIN_PERCENT: RangeInclusive<f64> = 0.0..=50.0;
}

/// Study-wide parameters shared by every treatment group
///
/// These are the global knobs of a calculation pass: how many animals receive
/// the compound, how much they weigh on average, for how long they are dosed,
/// and the safety overage added to compensate for preparation losses.
///
/// All fields are public; use [`StudyParameters::validate`] to check ranges and
/// [`StudyParameters::clamped`] to coerce values into them.
///
/// # Example
///
/// ```
/// use dosecalc::StudyParameters;
///
/// let params = StudyParameters::default()
///     .with_duration_days(28)
///     .with_margin_percent(15.0);
///
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StudyParameters {
    /// Number of animals per treatment group (1–50)
    pub animals_per_group: u32,
    /// Average animal weight in grams (1–100)
    pub average_weight_g: f64,
    /// Treatment duration in days (1–180)
    pub duration_days: u32,
    /// Safety margin in percent (0–50)
    pub margin_percent: f64,
}

impl Default for StudyParameters {
    fn default() -> Self {
        Self {
            animals_per_group: 8,
            average_weight_g: 20.0,
            duration_days: 21,
            margin_percent: 10.0,
        }
    }
}

impl StudyParameters {
    /// Create a new set of study parameters
    ///
    /// # Arguments
    ///
    /// * `animals_per_group` - Number of animals per treatment group
    /// * `average_weight_g` - Average animal weight in grams
    /// * `duration_days` - Treatment duration in days
    /// * `margin_percent` - Safety margin in percent
    pub fn new(
        animals_per_group: u32,
        average_weight_g: f64,
        duration_days: u32,
        margin_percent: f64,
    ) -> Self {
        Self {
            animals_per_group,
            average_weight_g,
            duration_days,
            margin_percent,
        }
    }

    /// Set the number of animals per group
    pub fn with_animals_per_group(mut self, animals_per_group: u32) -> Self {
        self.animals_per_group = animals_per_group;
        self
    }

    /// Set the average animal weight in grams
    pub fn with_average_weight_g(mut self, average_weight_g: f64) -> Self {
        self.average_weight_g = average_weight_g;
        self
    }

    /// Set the treatment duration in days
    pub fn with_duration_days(mut self, duration_days: u32) -> Self {
        self.duration_days = duration_days;
        self
    }

    /// Set the safety margin in percent
    pub fn with_margin_percent(mut self, margin_percent: f64) -> Self {
        self.margin_percent = margin_percent;
        self
    }

    /// Average animal weight expressed in kilograms
    pub fn average_weight_kg(&self) -> f64 {
        self.average_weight_g / 1000.0
    }

    /// Check every field against its declared range
    ///
    /// # Returns
    ///
    /// `Ok(())` when all fields are in range, otherwise the first
    /// [`ParameterError::OutOfRange`] encountered.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if !ranges::ANIMALS_PER_GROUP.contains(&self.animals_per_group) {
            return Err(ParameterError::OutOfRange {
                param: "animals_per_group",
                value: self.animals_per_group.to_string(),
            });
        }
        if !ranges::AVERAGE_WEIGHT_G.contains(&self.average_weight_g) {
            return Err(ParameterError::OutOfRange {
                param: "average_weight_g",
                value: self.average_weight_g.to_string(),
            });
        }
        if !ranges::DURATION_DAYS.contains(&self.duration_days) {
            return Err(ParameterError::OutOfRange {
                param: "duration_days",
                value: self.duration_days.to_string(),
            });
        }
        if !ranges::MARGIN_PERCENT.contains(&self.margin_percent) {
            return Err(ParameterError::OutOfRange {
                param: "margin_percent",
                value: self.margin_percent.to_string(),
            });
        }
        Ok(())
    }

    /// Return a copy with every field clamped into its declared range
    ///
    /// This is the input-surface behavior: sliders cannot leave their bounds,
    /// so programmatic callers get the same coercion here.
    pub fn clamped(mut self) -> Self {
        self.animals_per_group = self
            .animals_per_group
            .clamp(*ranges::ANIMALS_PER_GROUP.start(), *ranges::ANIMALS_PER_GROUP.end());
        self.average_weight_g = self
            .average_weight_g
            .clamp(*ranges::AVERAGE_WEIGHT_G.start(), *ranges::AVERAGE_WEIGHT_G.end());
        self.duration_days = self
            .duration_days
            .clamp(*ranges::DURATION_DAYS.start(), *ranges::DURATION_DAYS.end());
        self.margin_percent = self
            .margin_percent
            .clamp(*ranges::MARGIN_PERCENT.start(), *ranges::MARGIN_PERCENT.end());
        self
    }
}
