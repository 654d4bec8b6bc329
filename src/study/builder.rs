use crate::study::*;

pub struct StudyBuilder {
    name: String,
    parameters: StudyParameters,
    groups: Vec<GroupInput>,
}

impl StudyBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        StudyBuilder {
            name: name.into(),
            parameters: StudyParameters::default(),
            groups: Vec::new(),
        }
    }

    pub fn parameters(mut self, parameters: StudyParameters) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn animals_per_group(mut self, animals_per_group: u32) -> Self {
        self.parameters.animals_per_group = animals_per_group;
        self
    }

    pub fn average_weight_g(mut self, average_weight_g: f64) -> Self {
        self.parameters.average_weight_g = average_weight_g;
        self
    }

    pub fn duration_days(mut self, duration_days: u32) -> Self {
        self.parameters.duration_days = duration_days;
        self
    }

    pub fn margin_percent(mut self, margin_percent: f64) -> Self {
        self.parameters.margin_percent = margin_percent;
        self
    }

    pub fn group(
        mut self,
        name: impl Into<String>,
        dose_mg_per_kg: f64,
        dosing: DosingFrequency,
    ) -> Self {
        self.groups
            .push(GroupInput::new(name, dose_mg_per_kg, dosing));
        self
    }

    pub fn unnamed_group(self, dose_mg_per_kg: f64, dosing: DosingFrequency) -> Self {
        let index = self.groups.len() + 1;
        self.group(format!("Group {}", index), dose_mg_per_kg, dosing)
    }

    pub fn build(self) -> StudyDesign {
        let mut design = StudyDesign::new(self.name, self.parameters);
        for group in self.groups {
            design.add_group(group);
        }
        design
    }
}
