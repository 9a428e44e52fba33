//! Review checklist shown on the wizard's final page.

use crate::enums::*;
use crate::evaluate::FormEvaluation;
use crate::registry::job_posting_fields;
use crate::steps::step;
use crate::types::GateDecision;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FieldIssue {
    pub field: &'static str,
    pub label: &'static str,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReviewItem {
    pub step: StepId,
    pub title: &'static str,
    pub status: StepStatus,
    pub completion_rate: f64,
    /// Labels of required fields still empty.
    pub missing: Vec<&'static str>,
    pub errors: Vec<FieldIssue>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReviewChecklist {
    pub items: Vec<ReviewItem>,
    pub overall_progress: f64,
    pub publish: GateDecision,
}

impl ReviewChecklist {
    /// Every step complete and error free.
    pub fn is_complete(&self) -> bool {
        self.items.iter().all(|i| i.status == StepStatus::Complete)
    }

    pub fn missing_count(&self) -> usize {
        self.items.iter().map(|i| i.missing.len()).sum()
    }
}

/// Groups missing fields and active errors by step.
pub fn review(evaluation: &FormEvaluation) -> ReviewChecklist {
    let registry = job_posting_fields();
    let label = |name: &'static str| registry.get(name).map(|f| f.label).unwrap_or(name);

    let items = evaluation
        .steps
        .iter()
        .map(|sv| ReviewItem {
            step: sv.step,
            title: step(sv.step).title,
            status: sv.status,
            completion_rate: sv.completion_rate,
            missing: sv.missing_fields.iter().map(|f| label(*f)).collect(),
            errors: sv
                .error_fields
                .iter()
                .map(|f| FieldIssue {
                    field: *f,
                    label: label(*f),
                    message: sv
                        .outcome(f)
                        .and_then(|o| o.message())
                        .unwrap_or_default()
                        .to_string(),
                })
                .collect(),
        })
        .collect();

    ReviewChecklist {
        items,
        overall_progress: evaluation.overall_progress,
        publish: evaluation.publish.clone(),
    }
}
