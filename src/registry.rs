//! The job-posting field registry.
//!
//! Every field of the wizard is declared here once, together with the
//! predicates that decide whether it is required, optional, or excluded under
//! the current form values. Step resolution and payload normalization both
//! read requiredness from this table and nowhere else.

use crate::enums::*;
use crate::types::*;
use std::collections::HashMap;
use std::sync::LazyLock;

// ─── Option tables ──────────────────────────────────────────────────────────

pub const JOB_TYPES: &[&str] = &[
    "full_time",
    "part_time",
    "contract",
    "internship",
    "temporary",
];

pub const EXPERIENCE_LEVELS: &[&str] = &["entry", "mid", "senior", "lead", "executive"];

pub const LOCATION_TYPES: &[&str] = &["onsite", "remote", "hybrid"];

pub const EDUCATION_LEVELS: &[&str] = &[
    "none",
    "high_school",
    "bachelor",
    "master",
    "doctorate",
];

pub const CURRENCIES: &[&str] = &["USD", "EUR", "GBP", "CAD", "AUD", "INR", "JPY"];

pub const SALARY_PERIODS: &[&str] = &["hourly", "daily", "weekly", "monthly", "yearly"];

pub const APPLICATION_TYPES: &[&str] = &["internal", "external", "email"];

pub const MAX_SALARY: f64 = 10_000_000.0;

// ─── Predicates ─────────────────────────────────────────────────────────────

// An unset location type is not "remote", so the address is asked for.
fn needs_address(values: &FormValues) -> bool {
    values.location_type() != Some(LocationType::Remote)
}

fn needs_remote_policy(values: &FormValues) -> bool {
    matches!(
        values.location_type(),
        Some(LocationType::Remote | LocationType::Hybrid)
    )
}

fn salary_shown(values: &FormValues) -> bool {
    values.flag("show_salary")
}

fn salary_hidden(values: &FormValues) -> bool {
    !salary_shown(values)
}

fn applies_by_email(values: &FormValues) -> bool {
    values.application_method() == Some(ApplicationMethod::Email)
}

fn not_applying_by_email(values: &FormValues) -> bool {
    !applies_by_email(values)
}

fn applies_externally(values: &FormValues) -> bool {
    values.application_method() == Some(ApplicationMethod::External)
}

fn not_applying_externally(values: &FormValues) -> bool {
    !applies_externally(values)
}

// ─── Field table ────────────────────────────────────────────────────────────

const fn always(
    name: &'static str,
    label: &'static str,
    kind: FieldKind,
    rules: &'static [FieldRule],
) -> FieldDefinition {
    FieldDefinition {
        name,
        label,
        kind,
        always_required: true,
        required_when: None,
        excluded_when: None,
        rules,
    }
}

const fn optional(
    name: &'static str,
    label: &'static str,
    kind: FieldKind,
    rules: &'static [FieldRule],
) -> FieldDefinition {
    FieldDefinition {
        name,
        label,
        kind,
        always_required: false,
        required_when: None,
        excluded_when: None,
        rules,
    }
}

const fn conditional(
    name: &'static str,
    label: &'static str,
    kind: FieldKind,
    required_when: Predicate,
    excluded_when: Option<Predicate>,
    rules: &'static [FieldRule],
) -> FieldDefinition {
    FieldDefinition {
        name,
        label,
        kind,
        always_required: false,
        required_when: Some(required_when),
        excluded_when,
        rules,
    }
}

static FIELDS: &[FieldDefinition] = &[
    // Basic info
    always(
        "title",
        "Job title",
        FieldKind::Text,
        &[FieldRule::Length { min: 5, max: 100 }],
    ),
    always("category_id", "Category", FieldKind::Choice, &[]),
    always(
        "job_type",
        "Job type",
        FieldKind::Choice,
        &[FieldRule::OneOf(JOB_TYPES)],
    ),
    always(
        "experience_level",
        "Experience level",
        FieldKind::Choice,
        &[FieldRule::OneOf(EXPERIENCE_LEVELS)],
    ),
    // Job details
    always(
        "description",
        "Job description",
        FieldKind::Text,
        &[FieldRule::Length { min: 50, max: 5000 }],
    ),
    always(
        "location_type",
        "Location type",
        FieldKind::Choice,
        &[FieldRule::OneOf(LOCATION_TYPES)],
    ),
    conditional(
        "city",
        "City",
        FieldKind::Text,
        needs_address,
        None,
        &[FieldRule::Length { min: 2, max: 100 }],
    ),
    conditional(
        "state",
        "State / region",
        FieldKind::Text,
        needs_address,
        None,
        &[FieldRule::Length { min: 2, max: 100 }],
    ),
    conditional(
        "country",
        "Country",
        FieldKind::Text,
        needs_address,
        None,
        &[FieldRule::Length { min: 2, max: 100 }],
    ),
    conditional(
        "remote_policy",
        "Remote work policy",
        FieldKind::Text,
        needs_remote_policy,
        None,
        &[FieldRule::Length { min: 10, max: 500 }],
    ),
    // Requirements
    always(
        "requirements",
        "Requirements",
        FieldKind::Text,
        &[FieldRule::Length { min: 20, max: 5000 }],
    ),
    always(
        "skills",
        "Skills",
        FieldKind::List,
        &[FieldRule::ListSize { min: 1, max: 30 }],
    ),
    optional(
        "education_level",
        "Education level",
        FieldKind::Choice,
        &[FieldRule::OneOf(EDUCATION_LEVELS)],
    ),
    // Compensation
    optional("show_salary", "Show salary", FieldKind::Boolean, &[]),
    conditional(
        "salary_min",
        "Minimum salary",
        FieldKind::Number,
        salary_shown,
        Some(salary_hidden),
        &[FieldRule::Number {
            min: 0.0,
            max: MAX_SALARY,
        }],
    ),
    conditional(
        "salary_max",
        "Maximum salary",
        FieldKind::Number,
        salary_shown,
        Some(salary_hidden),
        &[
            FieldRule::Number {
                min: 0.0,
                max: MAX_SALARY,
            },
            FieldRule::AtLeastField {
                field: "salary_min",
                label: "minimum salary",
            },
        ],
    ),
    conditional(
        "salary_currency",
        "Currency",
        FieldKind::Choice,
        salary_shown,
        Some(salary_hidden),
        &[FieldRule::OneOf(CURRENCIES)],
    ),
    conditional(
        "salary_period",
        "Salary period",
        FieldKind::Choice,
        salary_shown,
        Some(salary_hidden),
        &[FieldRule::OneOf(SALARY_PERIODS)],
    ),
    optional(
        "benefits",
        "Benefits",
        FieldKind::Text,
        &[FieldRule::Length { min: 0, max: 2000 }],
    ),
    // Application
    always(
        "application_type",
        "Application method",
        FieldKind::Choice,
        &[FieldRule::OneOf(APPLICATION_TYPES)],
    ),
    conditional(
        "application_email",
        "Application email",
        FieldKind::Text,
        applies_by_email,
        Some(not_applying_by_email),
        &[FieldRule::Email],
    ),
    conditional(
        "application_url",
        "Application URL",
        FieldKind::Text,
        applies_externally,
        Some(not_applying_externally),
        &[FieldRule::Url],
    ),
    optional(
        "application_deadline",
        "Application deadline",
        FieldKind::Date,
        &[FieldRule::FutureDate],
    ),
];

// ─── Registry ───────────────────────────────────────────────────────────────

/// Lookup table over the static field catalogue.
pub struct FieldRegistry {
    fields: &'static [FieldDefinition],
    by_name: HashMap<&'static str, usize>,
}

impl FieldRegistry {
    pub fn new(fields: &'static [FieldDefinition]) -> Self {
        let by_name = fields
            .iter()
            .enumerate()
            .map(|(i, f)| (f.name, i))
            .collect();
        FieldRegistry { fields, by_name }
    }

    pub fn get(&self, name: &str) -> Option<&'static FieldDefinition> {
        let fields = self.fields;
        self.by_name.get(name).map(|&i| &fields[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// All fields in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &'static FieldDefinition> {
        self.fields.iter()
    }

    /// Requirement of a named field; unknown names are excluded.
    pub fn requirement(&self, name: &str, values: &FormValues) -> Requirement {
        self.get(name)
            .map(|f| f.requirement(values))
            .unwrap_or(Requirement::Excluded)
    }

    /// Fields that declare `name` as the sibling of a cross-field rule.
    pub fn dependents_of(&self, name: &str) -> Vec<&'static FieldDefinition> {
        self.fields
            .iter()
            .filter(|f| {
                f.rules
                    .iter()
                    .any(|r| matches!(r, FieldRule::AtLeastField { field, .. } if *field == name))
            })
            .collect()
    }
}

static JOB_POSTING_REGISTRY: LazyLock<FieldRegistry> = LazyLock::new(|| FieldRegistry::new(FIELDS));

/// The registry for the job-posting wizard.
pub fn job_posting_fields() -> &'static FieldRegistry {
    &JOB_POSTING_REGISTRY
}
