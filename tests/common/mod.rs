#![allow(dead_code)]

use chrono::NaiveDate;
use jobform::{EvalContext, FormValues, TouchedSet};
use serde_json::{Value, json};

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

pub fn ctx() -> EvalContext {
    EvalContext::new(today())
}

pub fn values(pairs: &[(&str, Value)]) -> FormValues {
    pairs.iter().map(|(k, v)| (*k, v.clone())).collect()
}

pub fn touched(names: &[&str]) -> TouchedSet {
    names.iter().copied().collect()
}

/// A form where every step is 100% complete: onsite job, salary hidden,
/// applications by email.
pub fn complete_form() -> FormValues {
    values(&[
        ("title", json!("Senior Backend Engineer")),
        ("category_id", json!("engineering")),
        ("job_type", json!("full_time")),
        ("experience_level", json!("senior")),
        (
            "description",
            json!("Build and operate the services behind our job board, from APIs to data pipelines."),
        ),
        ("location_type", json!("onsite")),
        ("city", json!("Berlin")),
        ("state", json!("Berlin")),
        ("country", json!("Germany")),
        (
            "requirements",
            json!("Five years of backend experience with a typed language."),
        ),
        ("skills", json!(["rust", "postgres"])),
        ("show_salary", json!(false)),
        ("application_type", json!("email")),
        ("application_email", json!("jobs@example.com")),
    ])
}

/// Every field name present in `values`.
pub fn all_touched(values: &FormValues) -> TouchedSet {
    values.iter().map(|(k, _)| k.clone()).collect()
}
