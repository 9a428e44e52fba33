use super::common::*;
use jobform::enums::*;
use jobform::registry::job_posting_fields;
use jobform::types::*;
use jobform::validate_field;

// ─── validate_field ─────────────────────────────────────────────────────────

#[derive(Debug, serde::Deserialize)]
struct FieldCase {
    name: String,
    field: String,
    values: FormValues,
    touched: TouchedSet,
    expected: FieldStatus,
    #[serde(default)]
    message_contains: Option<String>,
}

#[test]
fn validate_field_suite() {
    let cases: Vec<FieldCase> = load_cases("fields.yaml");
    let registry = job_posting_fields();
    let ctx = fixture_ctx();

    let mut passed = 0;
    let mut failed = 0;

    for case in &cases {
        let Some(def) = registry.get(&case.field) else {
            eprintln!("  FAIL {}: unknown field {}", case.name, case.field);
            failed += 1;
            continue;
        };

        let outcome = validate_field(def, &case.values, &case.touched, &ctx);
        let message_ok = match &case.message_contains {
            Some(needle) => outcome.message().is_some_and(|m| m.contains(needle.as_str())),
            None => true,
        };

        if outcome.status() == case.expected && message_ok {
            passed += 1;
        } else {
            eprintln!(
                "  FAIL {}: expected {:?} ({:?}), got {:?}",
                case.name, case.expected, case.message_contains, outcome
            );
            failed += 1;
        }
    }

    eprintln!(
        "\nvalidate_field: {} passed, {} failed out of {} total",
        passed,
        failed,
        cases.len()
    );
    assert_eq!(failed, 0, "{} validate_field tests failed", failed);
}
