use serde::{Deserialize, Serialize};
use std::fmt;

use crate::dose::{DoseError, ResultSet};
use crate::study::builder::StudyBuilder;
use crate::study::{GroupInput, StudyParameters};

/// A complete study configuration
///
/// A [StudyDesign] holds the study-wide [StudyParameters] together with the
/// ordered sequence of [GroupInput]s, one per treatment group. Group order is
/// preserved throughout: it is the display order, the export order, and the
/// source of the 1-based labels on computed results.
///
/// # Examples
///
/// ```
/// use dosecalc::{DosingFrequency, StudyDesign};
///
/// let design = StudyDesign::builder("Mon étude")
///     .duration_days(21)
///     .margin_percent(10.0)
///     .group("Control", 0.0, DosingFrequency::OnceDaily)
///     .group("Anti-PD-1", 10.0, DosingFrequency::TwiceDaily)
///     .build();
///
/// let results = design.results().unwrap();
/// assert_eq!(results.groups().len(), 2);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StudyDesign {
    name: String,
    parameters: StudyParameters,
    groups: Vec<GroupInput>,
}

impl StudyDesign {
    /// Constructs a new [StudyDesign] with no groups
    ///
    /// # Arguments
    ///
    /// * `name` - Name of the study
    /// * `parameters` - Study-wide parameters
    pub fn new(name: impl Into<String>, parameters: StudyParameters) -> Self {
        StudyDesign {
            name: name.into(),
            parameters,
            groups: Vec::new(),
        }
    }

    /// Start a chained [StudyBuilder] for this study name
    pub fn builder(name: impl Into<String>) -> StudyBuilder {
        StudyBuilder::new(name)
    }

    /// Get the name of the study
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the study-wide parameters
    pub fn parameters(&self) -> &StudyParameters {
        &self.parameters
    }

    /// Get the ordered treatment groups
    pub fn groups(&self) -> &[GroupInput] {
        &self.groups
    }

    /// Append a treatment group, preserving configuration order
    pub fn add_group(&mut self, group: GroupInput) {
        self.groups.push(group);
    }

    /// Replace the study-wide parameters
    pub fn set_parameters(&mut self, parameters: StudyParameters) {
        self.parameters = parameters;
    }

    /// Compute the per-group compound requirements for this design
    ///
    /// Applies the dose-quantity formula to each group in configuration order.
    /// Each call produces a fresh, independent [ResultSet]; recomputing after a
    /// change simply replaces the previous one.
    ///
    /// # Returns
    ///
    /// * `Result<ResultSet, DoseError>` - The computed result table, or the
    ///   validation failure that prevented any computation
    pub fn results(&self) -> Result<ResultSet, DoseError> {
        ResultSet::build(&self.groups, &self.parameters)
    }
}

impl fmt::Display for StudyDesign {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Study: {} ({} groups)", self.name, self.groups.len())?;
        for group in &self.groups {
            writeln!(f, "  {}", group)?;
        }
        Ok(())
    }
}
