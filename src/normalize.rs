use crate::enums::*;
use crate::primitives::{
    is_empty_for, number_to_value, parse_bool, parse_date, parse_list, parse_number,
};
use crate::registry::{FieldRegistry, job_posting_fields};
use crate::types::*;
use serde_json::{Map, Value};

/// Builds the submission payload from the current form values.
///
/// Every registered field appears in the payload, in registry order:
/// - excluded fields (hidden salary, the unused application contact) are null;
/// - strings are trimmed and blank strings become null;
/// - number fields parse numeric strings, date fields are re-emitted as
///   `YYYY-MM-DD`, list fields become arrays of trimmed entries, boolean
///   fields accept `"true"`/`"false"`; values that cannot be coerced are null.
///
/// Values for names outside the registry are dropped.
pub fn normalize(values: &FormValues, action: SubmitAction) -> JobPayload {
    normalize_with(job_posting_fields(), values, action)
}

pub fn normalize_with(
    registry: &FieldRegistry,
    values: &FormValues,
    action: SubmitAction,
) -> JobPayload {
    let mut fields = Map::new();
    for def in registry.iter() {
        let value = match def.requirement(values) {
            Requirement::Excluded => Value::Null,
            Requirement::Required | Requirement::Optional => coerce(def.kind, values.get(def.name)),
        };
        fields.insert(def.name.to_string(), value);
    }

    JobPayload {
        status: action.into(),
        fields,
    }
}

fn coerce(kind: FieldKind, raw: Option<&Value>) -> Value {
    let raw = match raw {
        Some(v) if !is_empty_for(kind, Some(v)) => v,
        _ => return Value::Null,
    };

    match kind {
        FieldKind::Text | FieldKind::Choice => match raw {
            Value::String(s) => Value::String(s.trim().to_string()),
            Value::Number(_) => raw.clone(),
            _ => Value::Null,
        },
        FieldKind::Number => parse_number(raw).map(number_to_value).unwrap_or(Value::Null),
        FieldKind::Boolean => parse_bool(raw).map(Value::Bool).unwrap_or(Value::Null),
        FieldKind::Date => parse_date(raw)
            .map(|d| Value::String(d.format("%Y-%m-%d").to_string()))
            .unwrap_or(Value::Null),
        FieldKind::List => match parse_list(raw) {
            Some(items) if !items.is_empty() => {
                Value::Array(items.into_iter().map(Value::String).collect())
            }
            _ => Value::Null,
        },
    }
}
