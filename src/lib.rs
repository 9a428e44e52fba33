//! Validation and progress-tracking engine for the job-posting wizard.
//!
//! The wizard splits a job posting across five steps. This crate decides,
//! from the current form values and the set of fields the user has touched,
//! which fields are required, which are complete or in error, how far along
//! each step and the whole form is, and whether the job may be published:
//!
//! ```text
//! FormValues + TouchedSet → validate_field → evaluate_step → overall_progress → can_submit
//!                         → normalize(values, action) → JobPayload → serialize
//! ```
//!
//! All evaluation is pure. The host owns a [`FormSession`] (or its own
//! `FormValues`/`TouchedSet` pair) and recomputes on every edit.
//!
//! # Quick Start
//!
//! ```rust
//! use jobform::{EvalContext, FormSession, StepId, SubmitAction};
//! use serde_json::json;
//!
//! let ctx = EvalContext::today();
//! let mut session = FormSession::default();
//! session.set_value("title", json!("Senior Backend Engineer")).unwrap();
//! session.set_value("location_type", json!("remote")).unwrap();
//!
//! let evaluation = session.evaluate(&ctx);
//! let basics = evaluation.step(StepId::BasicInfo).unwrap();
//! println!("basic info: {:.0}% complete", basics.completion_rate);
//!
//! let publish = session.can_submit(SubmitAction::Publish, &ctx);
//! assert!(!publish.allowed);
//! assert!(session.can_submit(SubmitAction::Draft, &ctx).allowed);
//! ```

pub mod api;
pub mod config;
pub mod enums;
pub mod error;
pub mod evaluate;
pub mod gate;
pub mod normalize;
pub mod primitives;
pub mod registry;
pub mod review;
pub mod serialize;
pub mod session;
pub mod steps;
pub mod types;
pub mod validate;

pub use config::WizardConfig;
pub use enums::*;
pub use error::*;
pub use evaluate::{FormEvaluation, evaluate_form, evaluate_step, overall_progress};
pub use gate::{can_advance, can_publish, can_submit};
pub use session::FormSession;
pub use types::*;
pub use validate::validate_field;

// Re-export entry-point functions at the crate root for convenience.
pub use normalize::normalize;
pub use review::review;
pub use serialize::serialize;

/// Evaluates a standalone `(values, touched)` snapshot with default
/// configuration.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use jobform::{EvalContext, FormValues, TouchedSet};
///
/// let ctx = EvalContext::new(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());
/// let evaluation = jobform::evaluate(&FormValues::new(), &TouchedSet::new(), &ctx);
/// // Compensation has nothing required until a salary is shown.
/// assert_eq!(evaluation.overall_progress, 20.0);
/// ```
pub fn evaluate(values: &FormValues, touched: &TouchedSet, ctx: &EvalContext) -> FormEvaluation {
    evaluate_form(values, touched, ctx, &WizardConfig::default())
}
