//! Field validation.
//!
//! [`validate_field`] classifies one field as complete, error, or incomplete
//! from the whole form, so cross-field rules re-evaluate whenever the sibling
//! they read changes.

use crate::enums::*;
use crate::primitives::{
    is_empty_for, parse_bool, parse_date, parse_list, parse_number, value_to_text,
};
use crate::types::*;
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

// ─── Cached regexes ─────────────────────────────────────────────────────────

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)*(?::[0-9]{1,5})?(?:[/?#]\S*)?$").unwrap()
});

/// Validates one field against the current form.
///
/// - Excluded or empty fields are `Incomplete`; emptiness is never an error.
/// - A non-empty field failing one of its rules is an `Error`, but only once
///   the user has touched it. Until then it stays `Incomplete`.
/// - Everything else is `Complete`.
pub fn validate_field(
    def: &FieldDefinition,
    values: &FormValues,
    touched: &TouchedSet,
    ctx: &EvalContext,
) -> ValidationOutcome {
    if def.requirement(values) == Requirement::Excluded {
        return ValidationOutcome::Incomplete;
    }

    let value = match values.get(def.name) {
        Some(v) if !is_empty_for(def.kind, Some(v)) => v,
        _ => return ValidationOutcome::Incomplete,
    };

    match check_rules(def, value, values, ctx) {
        Ok(()) => ValidationOutcome::Complete,
        Err(_) if !touched.contains(def.name) => ValidationOutcome::Incomplete,
        Err(message) => ValidationOutcome::Error { message },
    }
}

/// Runs the kind check and every rule of `def`, returning the first failure.
pub fn check_rules(
    def: &FieldDefinition,
    value: &Value,
    values: &FormValues,
    ctx: &EvalContext,
) -> Result<(), String> {
    check_kind(def, value)?;
    for rule in def.rules {
        check_rule(def, rule, value, values, ctx)?;
    }
    Ok(())
}

fn check_kind(def: &FieldDefinition, value: &Value) -> Result<(), String> {
    let ok = match def.kind {
        FieldKind::Text | FieldKind::Choice => value.is_string() || value.is_number(),
        FieldKind::Number => parse_number(value).is_some(),
        FieldKind::Boolean => parse_bool(value).is_some(),
        FieldKind::Date => parse_date(value).is_some(),
        FieldKind::List => parse_list(value).is_some(),
    };
    if ok {
        Ok(())
    } else {
        Err(match def.kind {
            FieldKind::Number => format!("{} must be a number", def.label),
            FieldKind::Boolean => format!("{} must be yes or no", def.label),
            FieldKind::Date => format!("{} must be a valid date (YYYY-MM-DD)", def.label),
            FieldKind::List => format!("{} must be a list", def.label),
            FieldKind::Text | FieldKind::Choice => format!("{} must be text", def.label),
        })
    }
}

fn check_rule(
    def: &FieldDefinition,
    rule: &FieldRule,
    value: &Value,
    values: &FormValues,
    ctx: &EvalContext,
) -> Result<(), String> {
    match rule {
        FieldRule::Length { min, max } => {
            let len = value_to_text(value).trim().chars().count();
            if len < *min {
                Err(format!(
                    "{} must be at least {} characters",
                    def.label, min
                ))
            } else if len > *max {
                Err(format!("{} must be at most {} characters", def.label, max))
            } else {
                Ok(())
            }
        }
        FieldRule::OneOf(options) => {
            let text = value_to_text(value);
            if options.iter().any(|o| *o == text.trim()) {
                Ok(())
            } else {
                Err(format!("Select a valid {}", def.label.to_lowercase()))
            }
        }
        FieldRule::Email => {
            if EMAIL_RE.is_match(value_to_text(value).trim()) {
                Ok(())
            } else {
                Err("Enter a valid email address".to_string())
            }
        }
        FieldRule::Url => {
            if URL_RE.is_match(value_to_text(value).trim()) {
                Ok(())
            } else {
                Err("Enter a valid URL starting with http:// or https://".to_string())
            }
        }
        FieldRule::Number { min, max } => match parse_number(value) {
            Some(n) if n < *min => Err(format!("{} cannot be less than {}", def.label, min)),
            Some(n) if n > *max => Err(format!("{} cannot exceed {}", def.label, max)),
            Some(_) => Ok(()),
            None => Err(format!("{} must be a number", def.label)),
        },
        FieldRule::AtLeastField { field, label } => {
            let own = parse_number(value);
            let other = values.get(field).and_then(parse_number);
            match (own, other) {
                (Some(own), Some(other)) if own < other => Err(format!(
                    "{} must be greater than or equal to the {}",
                    def.label, label
                )),
                _ => Ok(()),
            }
        }
        FieldRule::FutureDate => {
            let Some(date) = parse_date(value) else {
                return Err(format!("{} must be a valid date (YYYY-MM-DD)", def.label));
            };
            let days_ahead = (date - ctx.today).num_days();
            if days_ahead <= 0 {
                Err(format!("{} must be in the future", def.label))
            } else if days_ahead > ctx.deadline_window_days {
                Err(format!(
                    "{} must be within {} days from today",
                    def.label, ctx.deadline_window_days
                ))
            } else {
                Ok(())
            }
        }
        FieldRule::ListSize { min, max } => {
            let count = parse_list(value).map(|l| l.len()).unwrap_or(0);
            if count < *min {
                let noun = if *min == 1 { "entry" } else { "entries" };
                Err(format!(
                    "Add at least {} {} to {}",
                    min,
                    noun,
                    def.label.to_lowercase()
                ))
            } else if count > *max {
                Err(format!("{} cannot have more than {} entries", def.label, max))
            } else {
                Ok(())
            }
        }
    }
}
