use chrono::NaiveDate;
use jobform::registry::job_posting_fields;
use jobform::{EvalContext, FormValues, TouchedSet};
use proptest::prelude::*;
use serde_json::{Value, json};

pub fn ctx() -> EvalContext {
    EvalContext::new(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap())
}

/// A value that passes the field's rules in most form states.
fn good_values(name: &str) -> Vec<Value> {
    match name {
        "title" => vec![json!("Platform Engineer")],
        "category_id" => vec![json!("engineering")],
        "job_type" => vec![json!("full_time"), json!("contract")],
        "experience_level" => vec![json!("mid")],
        "description" => vec![json!(
            "Own the deployment pipeline and help teams ship safely every day."
        )],
        "location_type" => vec![json!("onsite"), json!("remote"), json!("hybrid")],
        "city" | "state" | "country" => vec![json!("Lisbon")],
        "remote_policy" => vec![json!("Remote within Europe.")],
        "requirements" => vec![json!("Experience running production Linux systems.")],
        "skills" => vec![json!(["linux", "terraform"]), json!("go, k8s")],
        "education_level" => vec![json!("bachelor")],
        "show_salary" => vec![json!(true), json!(false)],
        "salary_min" => vec![json!(40000), json!("55,000")],
        "salary_max" => vec![json!(95000)],
        "salary_currency" => vec![json!("EUR")],
        "salary_period" => vec![json!("yearly")],
        "benefits" => vec![json!("Health insurance")],
        "application_type" => vec![json!("internal"), json!("external"), json!("email")],
        "application_email" => vec![json!("hiring@example.org")],
        "application_url" => vec![json!("https://example.org/careers/42")],
        "application_deadline" => vec![json!("2026-12-01")],
        _ => vec![Value::Null],
    }
}

/// Arbitrary junk: wrong types, blanks, near-miss strings.
fn junk_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        Just(json!("")),
        Just(json!("   ")),
        Just(json!(0)),
        Just(json!([])),
        any::<bool>().prop_map(Value::Bool),
        (-1_000_000i64..20_000_000).prop_map(|n| json!(n)),
        "[a-zA-Z0-9@./:, _-]{0,40}".prop_map(Value::String),
    ]
}

fn field_value(name: &'static str) -> BoxedStrategy<Option<Value>> {
    let good = prop::sample::select(good_values(name));
    prop_oneof![
        2 => Just(None),
        4 => good.prop_map(Some),
        2 => junk_value().prop_map(Some),
    ]
    .boxed()
}

/// Random form over every registered field.
pub fn arb_form() -> impl Strategy<Value = FormValues> {
    let strategies: Vec<_> = job_posting_fields()
        .iter()
        .map(|def| field_value(def.name).prop_map(move |v| (def.name, v)))
        .collect();
    strategies.prop_map(|entries| {
        entries
            .into_iter()
            .filter_map(|(name, v)| v.map(|v| (name, v)))
            .collect::<FormValues>()
    })
}

/// Random subset of registered field names.
pub fn arb_touched() -> impl Strategy<Value = TouchedSet> {
    let names: Vec<&'static str> = job_posting_fields().iter().map(|d| d.name).collect();
    prop::sample::subsequence(names.clone(), 0..=names.len())
        .prop_map(|picked| picked.into_iter().collect::<TouchedSet>())
}
