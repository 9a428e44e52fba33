//! Value primitives shared by the validator and payload normalization.
//!
//! Form inputs arrive loosely typed (a salary may be `85000` or `"85,000"`,
//! skills may be an array or a comma-separated string). These helpers give
//! every caller the same reading of a raw [`Value`].

use crate::enums::FieldKind;
use chrono::NaiveDate;
use serde_json::Value;

// ─── Emptiness ──────────────────────────────────────────────────────────────

/// Type-aware emptiness check.
///
/// Null, blank strings and empty arrays are empty. `0` and `false` are not.
pub fn is_empty_value(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(Value::Array(items)) => items.is_empty(),
        Some(_) => false,
    }
}

/// Emptiness as read by a field of `kind`.
///
/// A list field whose value reduces to no entries (`","`, `[" "]`) is empty
/// as well, so validation and the payload agree on it.
pub fn is_empty_for(kind: FieldKind, value: Option<&Value>) -> bool {
    if is_empty_value(value) {
        return true;
    }
    match (kind, value) {
        (FieldKind::List, Some(v)) => parse_list(v).is_some_and(|items| items.is_empty()),
        _ => false,
    }
}

// ─── Numbers ────────────────────────────────────────────────────────────────

/// Reads a number from a JSON number or a numeric string.
///
/// Thousands separators (`,` and `_`) and surrounding whitespace are ignored
/// in strings. Returns `None` for anything else, including non-finite values.
pub fn parse_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => {
            let cleaned: String = s
                .trim()
                .chars()
                .filter(|c| *c != ',' && *c != '_')
                .collect();
            if cleaned.is_empty() {
                return None;
            }
            cleaned.parse::<f64>().ok()?
        }
        _ => return None,
    };
    n.is_finite().then_some(n)
}

/// Converts an `f64` back to JSON, preferring an integer when exact.
pub fn number_to_value(n: f64) -> Value {
    if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
        Value::Number((n as i64).into())
    } else {
        serde_json::Number::from_f64(n)
            .map(Value::Number)
            .unwrap_or(Value::Null)
    }
}

// ─── Lists ──────────────────────────────────────────────────────────────────

/// Reads a list of trimmed, non-empty strings.
///
/// Accepts an array (non-string entries are rendered as text) or a
/// comma-separated string. Anything else yields `None`.
pub fn parse_list(value: &Value) -> Option<Vec<String>> {
    match value {
        Value::Array(items) => Some(
            items
                .iter()
                .map(value_to_text)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        ),
        Value::String(s) => Some(
            s.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        ),
        _ => None,
    }
}

// ─── Booleans ───────────────────────────────────────────────────────────────

pub fn parse_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

// ─── Dates ──────────────────────────────────────────────────────────────────

/// Parses a `YYYY-MM-DD` date string as produced by date inputs.
pub fn parse_date(value: &Value) -> Option<NaiveDate> {
    value
        .as_str()
        .and_then(|s| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok())
}

// ─── Text ───────────────────────────────────────────────────────────────────

/// Renders a scalar as plain text for string rules.
pub fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn zero_and_false_are_not_empty() {
        assert!(!is_empty_value(Some(&json!(0))));
        assert!(!is_empty_value(Some(&json!(false))));
        assert!(is_empty_value(Some(&json!("   "))));
        assert!(is_empty_value(Some(&json!([]))));
        assert!(is_empty_value(None));
    }

    #[test]
    fn list_without_entries_is_empty_for_lists_only() {
        assert!(is_empty_for(FieldKind::List, Some(&json!(","))));
        assert!(is_empty_for(FieldKind::List, Some(&json!([" ", ""]))));
        assert!(!is_empty_for(FieldKind::List, Some(&json!("rust,"))));
        assert!(!is_empty_for(FieldKind::Text, Some(&json!(","))));
    }

    #[test]
    fn numeric_strings_parse_with_separators() {
        assert_eq!(parse_number(&json!("85,000")), Some(85000.0));
        assert_eq!(parse_number(&json!(" 12.5 ")), Some(12.5));
        assert_eq!(parse_number(&json!("abc")), None);
        assert_eq!(parse_number(&json!(true)), None);
    }

    #[test]
    fn integral_numbers_stay_integers() {
        assert_eq!(number_to_value(42.0), json!(42));
        assert_eq!(number_to_value(42.5), json!(42.5));
    }

    #[test]
    fn comma_lists_are_split_and_trimmed() {
        assert_eq!(
            parse_list(&json!("rust, sql ,, go")),
            Some(vec!["rust".to_string(), "sql".to_string(), "go".to_string()])
        );
        assert_eq!(parse_list(&json!(["a", " ", 3])).map(|l| l.len()), Some(2));
    }

    #[test]
    fn dates_must_be_iso() {
        assert!(parse_date(&json!("2026-11-01")).is_some());
        assert!(parse_date(&json!("11/01/2026")).is_none());
    }
}
