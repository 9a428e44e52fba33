use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Produced by [`WizardConfig::from_yaml`](crate::config::WizardConfig::from_yaml).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid configuration document: {0}")]
    Syntax(String),

    #[error("invalid value for '{key}': {message}")]
    InvalidValue { key: &'static str, message: String },
}

/// Error kind reported by the job-board collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorKind {
    Network,
    Unauthorized,
    Rejected,
    Server,
}

/// Failure of a collaborator call (category load or job submission).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{message}")]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl ApiError {
    pub fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        ApiError {
            kind,
            message: message.into(),
        }
    }
}

/// Payload serialization error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct SerializeError {
    pub message: String,
}

/// Errors returned by [`FormSession`](crate::session::FormSession) operations.
///
/// None of these are fatal: the session's values and touched set are left
/// as they were so the user can correct and retry.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum SessionError {
    #[error("unknown form field '{0}'")]
    UnknownField(String),

    #[error("categories are not available yet")]
    CategoriesUnavailable,

    #[error("unknown category '{0}'")]
    UnknownCategory(String),

    #[error("a submission is already in progress")]
    SubmissionInFlight,

    #[error("no submission is in progress")]
    NoSubmissionInFlight,

    #[error("{reason}")]
    Blocked { reason: String },

    #[error("already at the first step")]
    AtFirstStep,

    #[error("already at the last step")]
    AtLastStep,

    #[error("request failed: {0}")]
    Api(#[from] ApiError),
}
