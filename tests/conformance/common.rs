use chrono::NaiveDate;
use jobform::EvalContext;
use std::path::PathBuf;

pub fn fixtures_dir() -> PathBuf {
    std::env::var("JOBFORM_FIXTURES_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures"))
}

/// Loads a YAML case list from the fixtures directory.
pub fn load_cases<T: serde::de::DeserializeOwned>(file: &str) -> Vec<T> {
    let path = fixtures_dir().join(file);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("cannot read {:?}: {}", path, e));
    serde_saphyr::from_str(&content).unwrap_or_else(|e| panic!("cannot parse {:?}: {}", path, e))
}

/// Fixtures are written against a fixed calendar day.
pub fn fixture_ctx() -> EvalContext {
    EvalContext::new(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap())
}

pub fn rates_equal(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < 0.01
}
