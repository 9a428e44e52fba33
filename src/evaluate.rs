//! Step and progress aggregation.
//!
//! Everything here is a pure function of `(FormValues, TouchedSet)` plus the
//! evaluation context: running it twice on the same inputs yields identical
//! results, and nothing is cached between calls.

use crate::config::WizardConfig;
use crate::enums::*;
use crate::gate::can_publish;
use crate::registry::{FieldRegistry, job_posting_fields};
use crate::steps::job_posting_steps;
use crate::types::*;
use crate::validate::validate_field;
use serde::Serialize;

// ─── evaluate_step ──────────────────────────────────────────────────────────

/// Derives a step's status and completion rate from its resolved fields.
///
/// Required fields are bucketed into valid / error / missing; optional fields
/// only contribute when they carry an error. Status precedence is
/// error > complete > partial > incomplete.
pub fn evaluate_step(
    step: &StepDefinition,
    registry: &FieldRegistry,
    values: &FormValues,
    touched: &TouchedSet,
    ctx: &EvalContext,
) -> StepValidation {
    let resolved = step.resolve_conditional_fields(registry, values);

    let mut valid_fields = Vec::new();
    let mut error_fields = Vec::new();
    let mut missing_fields = Vec::new();
    let mut outcomes = Vec::with_capacity(resolved.required.len() + resolved.optional.len());

    for def in &resolved.required {
        let outcome = validate_field(def, values, touched, ctx);
        match outcome.status() {
            FieldStatus::Complete => valid_fields.push(def.name),
            FieldStatus::Error => error_fields.push(def.name),
            FieldStatus::Incomplete => missing_fields.push(def.name),
        }
        outcomes.push((def.name, outcome));
    }

    for def in &resolved.optional {
        let outcome = validate_field(def, values, touched, ctx);
        if outcome.status() == FieldStatus::Error {
            error_fields.push(def.name);
        }
        outcomes.push((def.name, outcome));
    }

    let total = resolved.required.len();
    let completion_rate = completion_rate(valid_fields.len(), total);

    let status = if !error_fields.is_empty() {
        StepStatus::Error
    } else if completion_rate == 100.0 {
        StepStatus::Complete
    } else if !valid_fields.is_empty() {
        StepStatus::Partial
    } else {
        StepStatus::Incomplete
    };

    StepValidation {
        step: step.id,
        status,
        completion_rate,
        valid_fields,
        error_fields,
        missing_fields,
        outcomes,
    }
}

/// `valid * 100 / total`, or 100 for a step with nothing required.
pub fn completion_rate(valid: usize, total: usize) -> f64 {
    if total == 0 {
        100.0
    } else {
        (valid as f64 * 100.0) / total as f64
    }
}

// ─── overall_progress ───────────────────────────────────────────────────────

/// Unweighted mean of the steps' completion rates.
///
/// Each step counts equally no matter how many fields it resolves to. An
/// empty slice yields `0.0`.
pub fn overall_progress(steps: &[StepValidation]) -> f64 {
    if steps.is_empty() {
        return 0.0;
    }
    let sum: f64 = steps.iter().map(|s| s.completion_rate).sum();
    sum / steps.len() as f64
}

// ─── evaluate_form ──────────────────────────────────────────────────────────

/// Full derived state of the wizard for one `(values, touched)` snapshot.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FormEvaluation {
    pub steps: Vec<StepValidation>,
    pub overall_progress: f64,
    /// Whether `publish` is currently allowed: progress threshold reached and
    /// no active field error.
    pub publish: GateDecision,
}

impl FormEvaluation {
    pub fn step(&self, id: StepId) -> Option<&StepValidation> {
        self.steps.iter().find(|s| s.step == id)
    }

    /// Outcome of a field in whichever step owns it.
    pub fn outcome(&self, field: &str) -> Option<&ValidationOutcome> {
        self.steps.iter().find_map(|s| s.outcome(field))
    }

    pub fn has_errors(&self) -> bool {
        self.steps.iter().any(StepValidation::has_errors)
    }
}

/// Evaluates every step of the job-posting wizard and the publish gate.
pub fn evaluate_form(
    values: &FormValues,
    touched: &TouchedSet,
    ctx: &EvalContext,
    config: &WizardConfig,
) -> FormEvaluation {
    let registry = job_posting_fields();
    let steps: Vec<StepValidation> = job_posting_steps()
        .iter()
        .map(|step| evaluate_step(step, registry, values, touched, ctx))
        .collect();
    let overall_progress = overall_progress(&steps);
    let publish = can_publish(&steps, overall_progress, config);

    FormEvaluation {
        steps,
        overall_progress,
        publish,
    }
}
