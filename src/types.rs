use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeSet;

use crate::enums::*;

// ─── Form state ─────────────────────────────────────────────────────────────

/// Current value of every field the user has entered, keyed by field name.
///
/// Values are plain JSON: strings, numbers, booleans, `YYYY-MM-DD` date
/// strings, arrays for list fields, or null. A missing key and `null` mean
/// the same thing to the validator.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormValues(Map<String, Value>);

impl FormValues {
    pub fn new() -> Self {
        FormValues(Map::new())
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.0.insert(name.into(), value);
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.0.remove(name)
    }

    /// Trimmed string value, `None` when absent, not a string, or blank.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.0
            .get(name)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Checkbox semantics: `true` or the string `"true"` count as set.
    pub fn flag(&self, name: &str) -> bool {
        match self.0.get(name) {
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) => s.trim().eq_ignore_ascii_case("true"),
            _ => false,
        }
    }

    pub fn location_type(&self) -> Option<LocationType> {
        self.text("location_type").and_then(LocationType::parse)
    }

    pub fn application_method(&self) -> Option<ApplicationMethod> {
        self.text("application_type")
            .and_then(ApplicationMethod::parse)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        FormValues(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Names of the fields the user has interacted with (changed or blurred).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TouchedSet(BTreeSet<String>);

impl TouchedSet {
    pub fn new() -> Self {
        TouchedSet(BTreeSet::new())
    }

    /// Returns `true` if the field was not touched before.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.0.insert(name.into())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for TouchedSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        TouchedSet(iter.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>> Extend<S> for TouchedSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(Into::into));
    }
}

// ─── Schema ─────────────────────────────────────────────────────────────────

/// Requiredness predicate over the whole form.
pub type Predicate = fn(&FormValues) -> bool;

/// Format rule attached to a field. All rules of a field must pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldRule {
    /// Character count of the trimmed string, inclusive bounds.
    Length { min: usize, max: usize },
    /// Value must be one of the listed option keys.
    OneOf(&'static [&'static str]),
    Email,
    /// Absolute `http`/`https` URL.
    Url,
    /// Numeric value (or numeric string) within inclusive bounds.
    Number { min: f64, max: f64 },
    /// Numeric value must be `>=` the named sibling field when that one parses.
    AtLeastField {
        field: &'static str,
        label: &'static str,
    },
    /// ISO date strictly after today and within the configured window.
    FutureDate,
    /// Entry count of a list field, inclusive bounds.
    ListSize { min: usize, max: usize },
}

/// A single entry in the field registry. Defined once per form schema.
#[derive(Clone, Debug)]
pub struct FieldDefinition {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub always_required: bool,
    pub required_when: Option<Predicate>,
    /// When this holds the field is dropped from validation and from the payload.
    pub excluded_when: Option<Predicate>,
    pub rules: &'static [FieldRule],
}

impl FieldDefinition {
    /// Resolves how this field participates under the given values.
    ///
    /// Exclusion wins over requiredness.
    pub fn requirement(&self, values: &FormValues) -> Requirement {
        if self.excluded_when.is_some_and(|excluded| excluded(values)) {
            Requirement::Excluded
        } else if self.always_required || self.required_when.is_some_and(|req| req(values)) {
            Requirement::Required
        } else {
            Requirement::Optional
        }
    }
}

/// One page of the wizard and the fields it owns, in display order.
#[derive(Clone, Debug)]
pub struct StepDefinition {
    pub id: StepId,
    pub title: &'static str,
    pub fields: &'static [&'static str],
}

// ─── Derived results ────────────────────────────────────────────────────────

/// Result of validating one field. Derived, never stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ValidationOutcome {
    Complete,
    Error { message: String },
    Incomplete,
}

impl ValidationOutcome {
    pub fn status(&self) -> FieldStatus {
        match self {
            ValidationOutcome::Complete => FieldStatus::Complete,
            ValidationOutcome::Error { .. } => FieldStatus::Error,
            ValidationOutcome::Incomplete => FieldStatus::Incomplete,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            ValidationOutcome::Error { message } => Some(message),
            _ => None,
        }
    }
}

/// Aggregated validation state of one step.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StepValidation {
    pub step: StepId,
    pub status: StepStatus,
    /// Percentage of resolved required fields that are complete, `0.0..=100.0`.
    pub completion_rate: f64,
    pub valid_fields: Vec<&'static str>,
    pub error_fields: Vec<&'static str>,
    pub missing_fields: Vec<&'static str>,
    /// Outcome of every resolved (required or optional) field, in step order.
    pub outcomes: Vec<(&'static str, ValidationOutcome)>,
}

impl StepValidation {
    pub fn has_errors(&self) -> bool {
        !self.error_fields.is_empty()
    }

    pub fn outcome(&self, field: &str) -> Option<&ValidationOutcome> {
        self.outcomes
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, outcome)| outcome)
    }
}

/// Decision returned by the submission gate and by step navigation checks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateDecision {
    pub allowed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl GateDecision {
    pub fn allow() -> Self {
        GateDecision {
            allowed: true,
            reason: None,
        }
    }

    pub fn block(reason: impl Into<String>) -> Self {
        GateDecision {
            allowed: false,
            reason: Some(reason.into()),
        }
    }
}

/// Inputs that date-dependent rules need besides the form itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EvalContext {
    pub today: NaiveDate,
    pub deadline_window_days: i64,
}

impl EvalContext {
    pub fn new(today: NaiveDate) -> Self {
        EvalContext {
            today,
            deadline_window_days: crate::config::DEFAULT_DEADLINE_WINDOW_DAYS,
        }
    }

    /// Context for the current local date.
    pub fn today() -> Self {
        EvalContext::new(chrono::Local::now().date_naive())
    }
}

// ─── External collaborator data ─────────────────────────────────────────────

/// A job category offered by the job board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

/// Response of a successful job submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitReceipt {
    pub id: String,
}

/// Normalized form contents sent to the job board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JobPayload {
    pub status: JobStatus,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl JobPayload {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}
