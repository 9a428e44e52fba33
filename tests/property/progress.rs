use super::strategies::*;
use jobform::registry::job_posting_fields;
use jobform::steps::job_posting_steps;
use jobform::{FieldStatus, StepStatus, WizardConfig, evaluate_form, evaluate_step, overall_progress};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    // completion_rate == 100 exactly when every resolved required field is complete.
    #[test]
    fn full_rate_iff_all_required_complete(values in arb_form(), touched in arb_touched()) {
        let ctx = ctx();
        let registry = job_posting_fields();
        for step in job_posting_steps() {
            let sv = evaluate_step(step, registry, &values, &touched, &ctx);
            let resolved = step.resolve_conditional_fields(registry, &values);
            let all_complete = resolved
                .required
                .iter()
                .all(|def| sv.outcome(def.name).map(|o| o.status()) == Some(FieldStatus::Complete));
            prop_assert_eq!(sv.completion_rate == 100.0, all_complete);
            prop_assert_eq!(
                sv.valid_fields.len() + sv.missing_fields.len()
                    + sv.error_fields.iter().filter(|f| resolved.required.iter().any(|d| d.name == **f)).count(),
                resolved.required.len()
            );
        }
    }

    // Status precedence: error > complete > partial > incomplete.
    #[test]
    fn step_status_precedence(values in arb_form(), touched in arb_touched()) {
        let ctx = ctx();
        for step in job_posting_steps() {
            let sv = evaluate_step(step, job_posting_fields(), &values, &touched, &ctx);
            let expected = if !sv.error_fields.is_empty() {
                StepStatus::Error
            } else if sv.completion_rate == 100.0 {
                StepStatus::Complete
            } else if !sv.valid_fields.is_empty() {
                StepStatus::Partial
            } else {
                StepStatus::Incomplete
            };
            prop_assert_eq!(sv.status, expected);
        }
    }

    // Overall progress is the unweighted mean of step rates.
    #[test]
    fn overall_is_mean_of_steps(values in arb_form(), touched in arb_touched()) {
        let result = evaluate_form(&values, &touched, &ctx(), &WizardConfig::default());
        let mean = result.steps.iter().map(|s| s.completion_rate).sum::<f64>()
            / result.steps.len() as f64;
        prop_assert_eq!(result.overall_progress, mean);
        prop_assert!((0.0..=100.0).contains(&result.overall_progress));
    }

    // Publish needs the threshold and no active field error anywhere.
    #[test]
    fn publish_needs_threshold_and_no_errors(values in arb_form(), touched in arb_touched()) {
        let result = evaluate_form(&values, &touched, &ctx(), &WizardConfig::default());
        prop_assert_eq!(
            result.publish.allowed,
            result.overall_progress >= 70.0 && !result.has_errors()
        );
    }

    // Mean over any non-empty list of step rates.
    #[test]
    fn overall_progress_mean_any_length(rates in prop::collection::vec(0.0f64..=100.0, 1..12)) {
        let steps: Vec<_> = rates
            .iter()
            .map(|r| jobform::StepValidation {
                step: jobform::StepId::BasicInfo,
                status: StepStatus::Partial,
                completion_rate: *r,
                valid_fields: vec![],
                error_fields: vec![],
                missing_fields: vec![],
                outcomes: vec![],
            })
            .collect();
        let expected = rates.iter().sum::<f64>() / rates.len() as f64;
        prop_assert_eq!(overall_progress(&steps), expected);
    }

    // Same inputs, same outputs.
    #[test]
    fn evaluation_is_deterministic(values in arb_form(), touched in arb_touched()) {
        let config = WizardConfig::default();
        let a = evaluate_form(&values, &touched, &ctx(), &config);
        let b = evaluate_form(&values, &touched, &ctx(), &config);
        prop_assert_eq!(a.overall_progress.to_bits(), b.overall_progress.to_bits());
        prop_assert_eq!(a, b);
    }
}
