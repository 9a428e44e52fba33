//! Host-owned form session.
//!
//! [`FormSession`] is the single writer of the wizard's [`FormValues`] and
//! [`TouchedSet`]. Every read goes through the pure evaluators in
//! [`evaluate`](crate::evaluate), so the session holds no derived state.

use crate::api::{CategoryState, JobBoardApi};
use crate::config::WizardConfig;
use crate::enums::*;
use crate::error::{ApiError, SessionError};
use crate::evaluate::{FormEvaluation, evaluate_form, evaluate_step};
use crate::gate::{can_advance, can_submit};
use crate::normalize::normalize;
use crate::primitives::{is_empty_value, value_to_text};
use crate::registry::job_posting_fields;
use crate::steps::{job_posting_steps, step};
use crate::types::*;
use serde_json::Value;
use tracing::{debug, info, warn};

#[derive(Clone, Debug)]
pub struct FormSession {
    values: FormValues,
    touched: TouchedSet,
    current_step: StepId,
    categories: CategoryState,
    in_flight: Option<SubmitAction>,
    notice: Option<String>,
    config: WizardConfig,
}

impl Default for FormSession {
    fn default() -> Self {
        FormSession::new(WizardConfig::default())
    }
}

impl FormSession {
    /// Empty session positioned on the first step.
    pub fn new(config: WizardConfig) -> Self {
        FormSession {
            values: FormValues::new(),
            touched: TouchedSet::new(),
            current_step: StepId::BasicInfo,
            categories: CategoryState::NotLoaded,
            in_flight: None,
            notice: None,
            config,
        }
    }

    /// Session over previously saved values, such as a draft being edited
    /// again. Nothing counts as touched yet; names outside the registry are
    /// dropped.
    pub fn resume(values: FormValues, config: WizardConfig) -> Self {
        let registry = job_posting_fields();
        let mut session = FormSession::new(config);
        for (name, value) in values.iter() {
            if registry.contains(name) {
                session.values.set(name.clone(), value.clone());
            }
        }
        debug!(fields = session.values.len(), "resumed form session");
        session
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn touched(&self) -> &TouchedSet {
        &self.touched
    }

    pub fn current_step(&self) -> StepId {
        self.current_step
    }

    pub fn categories(&self) -> &CategoryState {
        &self.categories
    }

    pub fn config(&self) -> &WizardConfig {
        &self.config
    }

    /// User-visible notice from the last failed collaborator call.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Whether a submit request is awaiting its response. Hosts disable the
    /// submit controls while this holds.
    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    // ─── Edits ──────────────────────────────────────────────────────────────

    /// Records a user edit and marks the field touched.
    ///
    /// `category_id` can only be set to an id from the loaded category list.
    pub fn set_value(&mut self, name: &str, value: Value) -> Result<(), SessionError> {
        if !job_posting_fields().contains(name) {
            return Err(SessionError::UnknownField(name.to_string()));
        }
        if name == "category_id" && !is_empty_value(Some(&value)) {
            self.check_category(&value)?;
        }

        debug!(field = name, "form value changed");
        self.values.set(name, value);
        self.touched.insert(name);
        Ok(())
    }

    /// Marks a field touched without changing it (blur).
    pub fn touch(&mut self, name: &str) -> Result<(), SessionError> {
        if !job_posting_fields().contains(name) {
            return Err(SessionError::UnknownField(name.to_string()));
        }
        if self.touched.insert(name) {
            debug!(field = name, "form field touched");
        }
        Ok(())
    }

    fn check_category(&self, value: &Value) -> Result<(), SessionError> {
        let CategoryState::Loaded(list) = &self.categories else {
            return Err(SessionError::CategoriesUnavailable);
        };
        let id = value_to_text(value);
        let id = id.trim();
        if list.iter().any(|c| c.id == id) {
            Ok(())
        } else {
            Err(SessionError::UnknownCategory(id.to_string()))
        }
    }

    // ─── Derived state ──────────────────────────────────────────────────────

    pub fn evaluate(&self, ctx: &EvalContext) -> FormEvaluation {
        evaluate_form(&self.values, &self.touched, ctx, &self.config)
    }

    pub fn evaluate_current_step(&self, ctx: &EvalContext) -> StepValidation {
        evaluate_step(
            step(self.current_step),
            job_posting_fields(),
            &self.values,
            &self.touched,
            ctx,
        )
    }

    /// Gate decision for `action`, also blocked while a request is in flight.
    ///
    /// Publishing additionally needs every touched field to be free of errors.
    pub fn can_submit(&self, action: SubmitAction, ctx: &EvalContext) -> GateDecision {
        if self.in_flight.is_some() {
            return GateDecision::block("A submission is already in progress");
        }
        let evaluation = self.evaluate(ctx);
        match action {
            SubmitAction::Draft => can_submit(action, evaluation.overall_progress, &self.config),
            SubmitAction::Publish => evaluation.publish,
        }
    }

    /// Touches every field the current values resolve to, in all steps.
    fn touch_all_resolved(&mut self) {
        let registry = job_posting_fields();
        for current in job_posting_steps() {
            let resolved = current.resolve_conditional_fields(registry, &self.values);
            self.touched.extend(resolved.iter().map(|f| f.name));
        }
    }

    // ─── Navigation ─────────────────────────────────────────────────────────

    /// Moves to the next step.
    ///
    /// Touches every resolved field of the current step first so that format
    /// errors surface, then refuses to move while any of them is an error.
    /// Missing fields do not block.
    pub fn next_step(&mut self, ctx: &EvalContext) -> Result<StepId, SessionError> {
        let Some(next) = StepId::from_index(self.current_step.index() + 1) else {
            return Err(SessionError::AtLastStep);
        };

        let current = step(self.current_step);
        let resolved = current.resolve_conditional_fields(job_posting_fields(), &self.values);
        self.touched.extend(resolved.iter().map(|f| f.name));

        let validation = self.evaluate_current_step(ctx);
        let decision = can_advance(&validation);
        if !decision.allowed {
            let reason = decision.reason.unwrap_or_default();
            warn!(
                step = self.current_step.as_str(),
                errors = validation.error_fields.len(),
                "step advance blocked"
            );
            return Err(SessionError::Blocked { reason });
        }

        debug!(
            from = self.current_step.as_str(),
            to = next.as_str(),
            "advanced to next step"
        );
        self.current_step = next;
        Ok(next)
    }

    pub fn previous_step(&mut self) -> Result<StepId, SessionError> {
        let index = self.current_step.index();
        let Some(previous) = index.checked_sub(1).and_then(StepId::from_index) else {
            return Err(SessionError::AtFirstStep);
        };
        debug!(
            from = self.current_step.as_str(),
            to = previous.as_str(),
            "returned to previous step"
        );
        self.current_step = previous;
        Ok(previous)
    }

    /// Jumps to `target`. Backwards is always allowed. Forwards applies the
    /// [`next_step`](Self::next_step) check to every step on the way and
    /// either moves all the way or, when one blocks, leaves the session
    /// untouched.
    pub fn jump_to(&mut self, target: StepId, ctx: &EvalContext) -> Result<StepId, SessionError> {
        if target <= self.current_step {
            debug!(
                from = self.current_step.as_str(),
                to = target.as_str(),
                "jumped back"
            );
            self.current_step = target;
            return Ok(target);
        }

        // Every step on the way must be able to advance; nothing moves otherwise.
        let registry = job_posting_fields();
        let mut touched = self.touched.clone();
        for index in self.current_step.index()..target.index() {
            let Some(id) = StepId::from_index(index) else {
                break;
            };
            let current = step(id);
            let resolved = current.resolve_conditional_fields(registry, &self.values);
            touched.extend(resolved.iter().map(|f| f.name));

            let validation = evaluate_step(current, registry, &self.values, &touched, ctx);
            let decision = can_advance(&validation);
            if !decision.allowed {
                warn!(
                    step = id.as_str(),
                    target = target.as_str(),
                    errors = validation.error_fields.len(),
                    "step jump blocked"
                );
                return Err(SessionError::Blocked {
                    reason: decision.reason.unwrap_or_default(),
                });
            }
        }

        debug!(
            from = self.current_step.as_str(),
            to = target.as_str(),
            "jumped forward"
        );
        self.touched = touched;
        self.current_step = target;
        Ok(target)
    }

    // ─── Collaborator calls ─────────────────────────────────────────────────

    /// Loads categories through `api`.
    ///
    /// Failure is non-blocking: the session records a notice and the
    /// category field stays unusable until a later call succeeds. A category
    /// already chosen is cleared on failure.
    pub fn load_categories(&mut self, api: &dyn JobBoardApi) -> Result<(), SessionError> {
        match api.load_categories() {
            Ok(list) => {
                debug!(count = list.len(), "categories loaded");
                self.categories = CategoryState::Loaded(list);
                self.notice = None;
                Ok(())
            }
            Err(err) => {
                warn!(kind = ?err.kind, error = %err, "failed to load categories");
                let notice = format!("Could not load categories: {}", err.message);
                self.categories = CategoryState::Failed {
                    notice: notice.clone(),
                };
                // A category picked from an earlier list can no longer be checked.
                if self.values.remove("category_id").is_some() {
                    debug!("cleared category after failed reload");
                }
                self.notice = Some(notice);
                Err(SessionError::Api(err))
            }
        }
    }

    /// Checks the gate, marks the submission in flight, and returns the
    /// payload to send. Pair with [`finish_submission`](Self::finish_submission).
    pub fn begin_submission(
        &mut self,
        action: SubmitAction,
        ctx: &EvalContext,
    ) -> Result<JobPayload, SessionError> {
        if self.in_flight.is_some() {
            warn!(action = ?action, "submission already in flight");
            return Err(SessionError::SubmissionInFlight);
        }

        // Publishing surfaces format errors the user never blurred.
        if action == SubmitAction::Publish {
            self.touch_all_resolved();
        }

        let decision = self.can_submit(action, ctx);
        if !decision.allowed {
            let reason = decision.reason.unwrap_or_default();
            warn!(action = ?action, reason = %reason, "submission blocked");
            return Err(SessionError::Blocked { reason });
        }

        let payload = normalize(&self.values, action);
        info!(action = ?action, "submitting job");
        self.in_flight = Some(action);
        self.notice = None;
        Ok(payload)
    }

    /// Applies the collaborator's response to a submission started with
    /// [`begin_submission`](Self::begin_submission).
    ///
    /// On success the session is discarded. On failure the values and
    /// touched set are kept so the user can retry without re-entering data.
    pub fn finish_submission(
        &mut self,
        result: Result<SubmitReceipt, ApiError>,
    ) -> Result<SubmitReceipt, SessionError> {
        let Some(action) = self.in_flight.take() else {
            return Err(SessionError::NoSubmissionInFlight);
        };

        match result {
            Ok(receipt) => {
                info!(action = ?action, id = %receipt.id, "job submitted");
                self.discard();
                Ok(receipt)
            }
            Err(err) => {
                warn!(action = ?action, kind = ?err.kind, error = %err, "job submission failed");
                self.notice = Some(format!("Could not save the job: {}", err.message));
                Err(SessionError::Api(err))
            }
        }
    }

    /// Runs a whole submission synchronously against `api`.
    pub fn submit(
        &mut self,
        api: &dyn JobBoardApi,
        action: SubmitAction,
        ctx: &EvalContext,
    ) -> Result<SubmitReceipt, SessionError> {
        let payload = self.begin_submission(action, ctx)?;
        let result = api.submit_job(&payload);
        self.finish_submission(result)
    }

    /// Clears the form and returns to the first step. Loaded categories and
    /// configuration are kept.
    pub fn discard(&mut self) {
        self.values.clear();
        self.touched.clear();
        self.current_step = StepId::BasicInfo;
        self.in_flight = None;
        self.notice = None;
    }
}
