//! Submission gate and step-advance checks.

use crate::config::WizardConfig;
use crate::enums::SubmitAction;
use crate::types::{GateDecision, StepValidation};

/// Decides whether `action` is currently permitted.
///
/// Drafts are always allowed. Publishing requires the overall progress to
/// reach the configured threshold; the blocking reason reports the current
/// percentage, rounded down, for the disabled-button tooltip.
pub fn can_submit(action: SubmitAction, overall_progress: f64, config: &WizardConfig) -> GateDecision {
    match action {
        SubmitAction::Draft => GateDecision::allow(),
        SubmitAction::Publish if overall_progress >= config.publish_threshold => {
            GateDecision::allow()
        }
        SubmitAction::Publish => GateDecision::block(format!(
            "Complete at least {:.0}% of the form to publish (currently {:.0}%)",
            config.publish_threshold,
            overall_progress.floor()
        )),
    }
}

/// Publish decision for a whole form: the progress threshold of
/// [`can_submit`], then no active field error in any step.
pub fn can_publish(
    steps: &[StepValidation],
    overall_progress: f64,
    config: &WizardConfig,
) -> GateDecision {
    let decision = can_submit(SubmitAction::Publish, overall_progress, config);
    if !decision.allowed {
        return decision;
    }
    match steps.iter().map(|s| s.error_fields.len()).sum::<usize>() {
        0 => GateDecision::allow(),
        1 => GateDecision::block("Fix the highlighted field before publishing"),
        n => GateDecision::block(format!(
            "Fix the {} highlighted fields before publishing",
            n
        )),
    }
}

/// Decides whether the wizard may move past the given step.
///
/// Only active field errors block. Missing fields do not: a step may be left
/// incomplete and finished later.
pub fn can_advance(step: &StepValidation) -> GateDecision {
    match step.error_fields.len() {
        0 => GateDecision::allow(),
        1 => GateDecision::block("Fix the highlighted field before continuing"),
        n => GateDecision::block(format!(
            "Fix the {} highlighted fields before continuing",
            n
        )),
    }
}
