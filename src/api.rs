//! Extension point for the job-board networking layer.
//!
//! The engine never performs I/O itself. Hosts implement [`JobBoardApi`] over
//! their REST client and hand it to the session for the two calls the wizard
//! needs.

use crate::error::ApiError;
use crate::types::{Category, JobPayload, SubmitReceipt};

pub trait JobBoardApi {
    /// Fetches the selectable job categories. Called once when the wizard
    /// mounts, and again on retry after a failure.
    fn load_categories(&self) -> Result<Vec<Category>, ApiError>;

    /// Creates the job from a normalized payload.
    fn submit_job(&self, payload: &JobPayload) -> Result<SubmitReceipt, ApiError>;
}

/// Availability of the category list inside a session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CategoryState {
    #[default]
    NotLoaded,
    Loaded(Vec<Category>),
    /// The last load failed; `notice` is shown to the user until a retry succeeds.
    Failed { notice: String },
}

impl CategoryState {
    pub fn categories(&self) -> &[Category] {
        match self {
            CategoryState::Loaded(list) => list,
            _ => &[],
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, CategoryState::Loaded(_))
    }
}
