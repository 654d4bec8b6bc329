use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::study::ParameterError;

/// Valid ranges for group-level inputs
pub mod ranges {
    use std::ops::RangeInclusive;

    /// Dose in mg per kg of body weight
    pub const DOSE_MG_PER_KG: RangeInclusive<f64> = 0.0..=1000.0;
    /// Number of treatment groups in one calculation pass
    pub const GROUP_COUNT: RangeInclusive<usize> = 1..=20;
}

/// Dosing frequency of a treatment group
///
/// A closed enumeration of the two supported schedules. The display code
/// (`QD`/`BID`) and the dose count are derived from the variant, never parsed
/// back out of a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DosingFrequency {
    /// One dose per day (QD)
    OnceDaily,
    /// Two doses per day (BID)
    TwiceDaily,
}

impl DosingFrequency {
    /// Short display code used in tables and exports
    pub fn code(&self) -> &'static str {
        match self {
            DosingFrequency::OnceDaily => "QD",
            DosingFrequency::TwiceDaily => "BID",
        }
    }

    /// Full user-facing label
    pub fn label(&self) -> &'static str {
        match self {
            DosingFrequency::OnceDaily => "QD (Quotidien)",
            DosingFrequency::TwiceDaily => "BID (2x/jour)",
        }
    }

    /// Number of doses administered per day
    pub fn doses_per_day(&self) -> u32 {
        match self {
            DosingFrequency::OnceDaily => 1,
            DosingFrequency::TwiceDaily => 2,
        }
    }

    /// Fraction of a day covered by a single dose
    pub fn day_fraction_per_dose(&self) -> f64 {
        match self {
            DosingFrequency::OnceDaily => 1.0,
            DosingFrequency::TwiceDaily => 0.5,
        }
    }

    /// Total number of doses over a treatment duration
    ///
    /// `duration_days / day_fraction_per_dose`: a 21-day QD schedule yields 21
    /// doses, the same duration BID yields 42.
    pub fn doses_total(&self, duration_days: u32) -> f64 {
        duration_days as f64 / self.day_fraction_per_dose()
    }
}

impl fmt::Display for DosingFrequency {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for DosingFrequency {
    type Err = ParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "QD" | "QD (Quotidien)" => Ok(DosingFrequency::OnceDaily),
            "BID" | "BID (2x/jour)" => Ok(DosingFrequency::TwiceDaily),
            other => Err(ParameterError::OutOfRange {
                param: "dosing",
                value: other.to_string(),
            }),
        }
    }
}

/// One configured treatment group
///
/// Groups form an ordered sequence; their position in that sequence is the
/// display and export order, and provides the default name and the 1-based
/// label index of the computed result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupInput {
    name: String,
    dose_mg_per_kg: f64,
    dosing: DosingFrequency,
}

impl GroupInput {
    /// Create a new treatment group
    ///
    /// # Arguments
    ///
    /// * `name` - Display label of the group
    /// * `dose_mg_per_kg` - Dose in mg per kg of body weight
    /// * `dosing` - Dosing frequency
    pub fn new(name: impl Into<String>, dose_mg_per_kg: f64, dosing: DosingFrequency) -> Self {
        GroupInput {
            name: name.into(),
            dose_mg_per_kg,
            dosing,
        }
    }

    /// Create a group with the default name for its 1-based position
    pub fn unnamed(index: usize, dose_mg_per_kg: f64, dosing: DosingFrequency) -> Self {
        GroupInput::new(format!("Group {}", index), dose_mg_per_kg, dosing)
    }

    /// Get the display name of the group
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the dose in mg per kg of body weight
    pub fn dose_mg_per_kg(&self) -> f64 {
        self.dose_mg_per_kg
    }

    /// Get the dosing frequency
    pub fn dosing(&self) -> DosingFrequency {
        self.dosing
    }

    /// Set the display name of the group
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Set the dose in mg per kg of body weight
    pub fn set_dose_mg_per_kg(&mut self, dose_mg_per_kg: f64) {
        self.dose_mg_per_kg = dose_mg_per_kg;
    }

    /// Set the dosing frequency
    pub fn set_dosing(&mut self, dosing: DosingFrequency) {
        self.dosing = dosing;
    }

    /// Check the group against its declared constraints
    ///
    /// The name must be non-empty and the dose must lie in its declared range.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if self.name.trim().is_empty() {
            return Err(ParameterError::Missing { param: "name" });
        }
        if !ranges::DOSE_MG_PER_KG.contains(&self.dose_mg_per_kg) {
            return Err(ParameterError::OutOfRange {
                param: "dose_mg_per_kg",
                value: self.dose_mg_per_kg.to_string(),
            });
        }
        Ok(())
    }

    /// Return a copy with the dose clamped into its declared range
    pub fn clamped(mut self) -> Self {
        self.dose_mg_per_kg = self
            .dose_mg_per_kg
            .clamp(*ranges::DOSE_MG_PER_KG.start(), *ranges::DOSE_MG_PER_KG.end());
        self
    }
}

impl fmt::Display for GroupInput {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}: {} mg/kg {}",
            self.name,
            self.dose_mg_per_kg,
            self.dosing.code()
        )
    }
}
