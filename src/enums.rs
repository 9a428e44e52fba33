//! Closed enumerations used throughout the wizard engine.
//!
//! Choice fields whose option lists are part of the form schema (job type,
//! currency, ...) are kept as strings in [`FormValues`](crate::types::FormValues)
//! and checked against the registry's option tables instead.

use serde::{Deserialize, Serialize};

/// Derived status of a single field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldStatus {
    Complete,
    Error,
    Incomplete,
}

/// Derived status of a wizard step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    Complete,
    Error,
    Partial,
    Incomplete,
}

/// Value type of a form field. Drives emptiness checks and payload coercion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Number,
    Boolean,
    Date,
    Choice,
    List,
}

/// How a field participates in the form under the current values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Requirement {
    /// Counted in the step's completion denominator.
    Required,
    /// Format-checked when filled, never counted as missing.
    Optional,
    /// Not validated at all and nulled out in the submitted payload.
    Excluded,
}

/// Action requested from the submission gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitAction {
    Draft,
    Publish,
}

/// Status tag carried by the submitted payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Draft,
    Published,
}

impl From<SubmitAction> for JobStatus {
    fn from(action: SubmitAction) -> Self {
        match action {
            SubmitAction::Draft => JobStatus::Draft,
            SubmitAction::Publish => JobStatus::Published,
        }
    }
}

/// Identifier of a wizard step, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepId {
    BasicInfo,
    JobDetails,
    Requirements,
    Compensation,
    Application,
}

impl StepId {
    pub const ALL: [StepId; 5] = [
        StepId::BasicInfo,
        StepId::JobDetails,
        StepId::Requirements,
        StepId::Compensation,
        StepId::Application,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StepId::BasicInfo => "basic_info",
            StepId::JobDetails => "job_details",
            StepId::Requirements => "requirements",
            StepId::Compensation => "compensation",
            StepId::Application => "application",
        }
    }

    /// Zero-based position of the step in the wizard.
    pub fn index(self) -> usize {
        match self {
            StepId::BasicInfo => 0,
            StepId::JobDetails => 1,
            StepId::Requirements => 2,
            StepId::Compensation => 3,
            StepId::Application => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<StepId> {
        StepId::ALL.get(index).copied()
    }
}

/// Where the job is performed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationType {
    Onsite,
    Remote,
    Hybrid,
}

impl LocationType {
    pub fn parse(s: &str) -> Option<LocationType> {
        match s.trim() {
            "onsite" => Some(LocationType::Onsite),
            "remote" => Some(LocationType::Remote),
            "hybrid" => Some(LocationType::Hybrid),
            _ => None,
        }
    }
}

/// How candidates apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationMethod {
    Internal,
    External,
    Email,
}

impl ApplicationMethod {
    pub fn parse(s: &str) -> Option<ApplicationMethod> {
        match s.trim() {
            "internal" => Some(ApplicationMethod::Internal),
            "external" => Some(ApplicationMethod::External),
            "email" => Some(ApplicationMethod::Email),
            _ => None,
        }
    }
}
