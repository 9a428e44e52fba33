use super::strategies::*;
use jobform::primitives::is_empty_value;
use jobform::registry::job_posting_fields;
use jobform::{FieldStatus, Requirement, validate_field};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    // An error is only ever reported for a filled-in field the user touched.
    #[test]
    fn error_implies_filled_and_touched(values in arb_form(), touched in arb_touched()) {
        let ctx = ctx();
        for def in job_posting_fields().iter() {
            let outcome = validate_field(def, &values, &touched, &ctx);
            if outcome.status() == FieldStatus::Error {
                prop_assert!(!is_empty_value(values.get(def.name)), "{} empty but error", def.name);
                prop_assert!(touched.contains(def.name), "{} untouched but error", def.name);
                prop_assert!(outcome.message().is_some());
            }
        }
    }

    // Touching everything can only turn incomplete into error, never complete.
    #[test]
    fn touching_never_changes_complete(values in arb_form(), touched in arb_touched()) {
        let ctx = ctx();
        let all = jobform::TouchedSet::from_iter(job_posting_fields().iter().map(|d| d.name));
        for def in job_posting_fields().iter() {
            let partial = validate_field(def, &values, &touched, &ctx).status();
            let full = validate_field(def, &values, &all, &ctx).status();
            if partial == FieldStatus::Complete {
                prop_assert_eq!(full, FieldStatus::Complete);
            }
        }
    }

    // Excluded fields are never validated.
    #[test]
    fn excluded_fields_are_incomplete(values in arb_form(), touched in arb_touched()) {
        let ctx = ctx();
        for def in job_posting_fields().iter() {
            if def.requirement(&values) == Requirement::Excluded {
                prop_assert_eq!(
                    validate_field(def, &values, &touched, &ctx).status(),
                    FieldStatus::Incomplete
                );
            }
        }
    }
}
