use super::common::*;
use jobform::enums::*;
use jobform::evaluate_step;
use jobform::registry::job_posting_fields;
use jobform::steps::step;
use jobform::types::*;

// ─── evaluate_step ──────────────────────────────────────────────────────────

#[derive(Debug, serde::Deserialize)]
struct StepCase {
    name: String,
    step: StepId,
    values: FormValues,
    touched: TouchedSet,
    expected: ExpectedStep,
}

#[derive(Debug, serde::Deserialize)]
struct ExpectedStep {
    status: StepStatus,
    completion_rate: f64,
    valid: Vec<String>,
    missing: Vec<String>,
    errors: Vec<String>,
}

fn names(fields: &[&'static str]) -> Vec<String> {
    fields.iter().map(|f| f.to_string()).collect()
}

#[test]
fn evaluate_step_suite() {
    let cases: Vec<StepCase> = load_cases("steps.yaml");
    let ctx = fixture_ctx();

    let mut passed = 0;
    let mut failed = 0;

    for case in &cases {
        let result = evaluate_step(
            step(case.step),
            job_posting_fields(),
            &case.values,
            &case.touched,
            &ctx,
        );
        let expected = &case.expected;

        let ok = result.status == expected.status
            && rates_equal(result.completion_rate, expected.completion_rate)
            && names(&result.valid_fields) == expected.valid
            && names(&result.missing_fields) == expected.missing
            && names(&result.error_fields) == expected.errors;

        if ok {
            passed += 1;
        } else {
            eprintln!(
                "  FAIL {}: expected {:?}, got {:?} {:.2}% valid={:?} missing={:?} errors={:?}",
                case.name,
                expected,
                result.status,
                result.completion_rate,
                result.valid_fields,
                result.missing_fields,
                result.error_fields
            );
            failed += 1;
        }
    }

    eprintln!(
        "\nevaluate_step: {} passed, {} failed out of {} total",
        passed,
        failed,
        cases.len()
    );
    assert_eq!(failed, 0, "{} evaluate_step tests failed", failed);
}
