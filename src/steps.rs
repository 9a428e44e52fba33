//! Wizard step definitions and conditional field resolution.

use crate::enums::*;
use crate::registry::{FieldRegistry, job_posting_fields};
use crate::types::*;

static STEPS: [StepDefinition; 5] = [
    StepDefinition {
        id: StepId::BasicInfo,
        title: "Basic Info",
        fields: &["title", "category_id", "job_type", "experience_level"],
    },
    StepDefinition {
        id: StepId::JobDetails,
        title: "Job Details",
        fields: &[
            "description",
            "location_type",
            "city",
            "state",
            "country",
            "remote_policy",
        ],
    },
    StepDefinition {
        id: StepId::Requirements,
        title: "Requirements",
        fields: &["requirements", "skills", "education_level"],
    },
    StepDefinition {
        id: StepId::Compensation,
        title: "Compensation",
        fields: &[
            "show_salary",
            "salary_min",
            "salary_max",
            "salary_currency",
            "salary_period",
            "benefits",
        ],
    },
    StepDefinition {
        id: StepId::Application,
        title: "Application",
        fields: &[
            "application_type",
            "application_email",
            "application_url",
            "application_deadline",
        ],
    },
];

/// All wizard steps in display order.
pub fn job_posting_steps() -> &'static [StepDefinition] {
    &STEPS
}

pub fn step(id: StepId) -> &'static StepDefinition {
    &STEPS[id.index()]
}

/// Fields of a step split by their requirement under the current values.
/// Excluded fields are dropped entirely.
#[derive(Clone, Debug, Default)]
pub struct ResolvedFields {
    pub required: Vec<&'static FieldDefinition>,
    pub optional: Vec<&'static FieldDefinition>,
}

impl ResolvedFields {
    /// Required then optional fields, in step order within each group.
    pub fn iter(&self) -> impl Iterator<Item = &'static FieldDefinition> + '_ {
        self.required.iter().chain(self.optional.iter()).copied()
    }
}

impl StepDefinition {
    /// Fields that are required regardless of any other value.
    pub fn base_fields(&self, registry: &FieldRegistry) -> Vec<&'static str> {
        self.fields
            .iter()
            .copied()
            .filter(|name| registry.get(name).is_some_and(|f| f.always_required))
            .collect()
    }

    /// Resolves the step's effective field sets against the current values.
    ///
    /// Never cached: the triggering field (location type, salary toggle,
    /// application method) can change between any two calls.
    pub fn resolve_conditional_fields(
        &self,
        registry: &FieldRegistry,
        values: &FormValues,
    ) -> ResolvedFields {
        let mut resolved = ResolvedFields::default();
        for name in self.fields {
            let Some(def) = registry.get(name) else {
                continue;
            };
            match def.requirement(values) {
                Requirement::Required => resolved.required.push(def),
                Requirement::Optional => resolved.optional.push(def),
                Requirement::Excluded => {}
            }
        }
        resolved
    }

    /// Shorthand for resolution against the job-posting registry.
    pub fn resolve(&self, values: &FormValues) -> ResolvedFields {
        self.resolve_conditional_fields(job_posting_fields(), values)
    }
}

/// Step that owns a field, if any.
pub fn step_of(field: &str) -> Option<StepId> {
    STEPS
        .iter()
        .find(|s| s.fields.iter().any(|f| *f == field))
        .map(|s| s.id)
}
