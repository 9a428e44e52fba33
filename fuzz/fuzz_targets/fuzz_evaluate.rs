#![no_main]

use arbitrary::{Arbitrary, Unstructured};
use chrono::NaiveDate;
use jobform::registry::job_posting_fields;
use jobform::{EvalContext, FormValues, TouchedSet};
use libfuzzer_sys::fuzz_target;
use serde_json::Value;

/// Generate a simple arbitrary JSON value from fuzzer bytes.
fn arbitrary_value(u: &mut Unstructured<'_>) -> arbitrary::Result<Value> {
    match u.int_in_range(0..=5)? {
        0 => Ok(Value::Null),
        1 => Ok(Value::Bool(bool::arbitrary(u)?)),
        2 => {
            let n = f64::arbitrary(u)?;
            Ok(serde_json::Number::from_f64(n)
                .map(Value::Number)
                .unwrap_or(Value::Null))
        }
        3 => Ok(Value::String(String::arbitrary(u)?)),
        4 => {
            let len = u.int_in_range(0..=4)?;
            let mut items = Vec::with_capacity(len);
            for _ in 0..len {
                items.push(Value::String(String::arbitrary(u)?));
            }
            Ok(Value::Array(items))
        }
        _ => Ok(Value::Null),
    }
}

fuzz_target!(|data: &[u8]| {
    let mut u = Unstructured::new(data);
    let registry = job_posting_fields();

    let mut values = FormValues::new();
    let mut touched = TouchedSet::new();
    for def in registry.iter() {
        let Ok(present) = bool::arbitrary(&mut u) else {
            break;
        };
        if present {
            let Ok(value) = arbitrary_value(&mut u) else {
                break;
            };
            values.set(def.name, value);
        }
        if bool::arbitrary(&mut u).unwrap_or(false) {
            touched.insert(def.name);
        }
    }

    let day = u.int_in_range(0..=3650u32).unwrap_or(0);
    let today = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap() + chrono::Days::new(day.into());
    let ctx = EvalContext::new(today);

    let first = jobform::evaluate(&values, &touched, &ctx);
    let second = jobform::evaluate(&values, &touched, &ctx);
    assert_eq!(first, second, "evaluation must be repeatable");

    for step in &first.steps {
        assert!(
            (0.0..=100.0).contains(&step.completion_rate),
            "rate out of range: {:?}",
            step
        );
    }
    assert!((0.0..=100.0).contains(&first.overall_progress));
});
