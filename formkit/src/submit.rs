//! Submission state machine.
//!
//! One submit attempt runs `Idle → Validating → Submitting → Success |
//! Failure` and then returns to idle. Validation is synchronous and always
//! completes before any transport call starts; while a submission is in
//! flight further attempts are no-ops.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::SubmitError;
use crate::state::FormState;
use crate::validation::{FieldValues, RuleSet, ValidationResult};

/// Substitutable submission transport.
///
/// The demo ships a simulated implementation that resolves after a fixed
/// delay; a real client implements the same trait without touching
/// validation or the state machine.
#[async_trait]
pub trait Transport<C>: Send + Sync {
    /// Submit credentials to the remote end.
    async fn submit(&self, credentials: C) -> Result<(), SubmitError>;
}

/// Zero-argument callback invoked once per successful submission cycle.
pub type SuccessCallback = Box<dyn Fn() + Send + Sync>;

/// Builds typed credentials from the validated value snapshot.
pub type CredentialExtractor<C> = Box<dyn Fn(&FieldValues) -> C + Send + Sync>;

/// Outcome of one submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A submission was already in flight; the attempt was a no-op.
    Blocked,
    /// Validation failed; errors were written to the form state and no
    /// transport call was attempted.
    Invalid,
    /// The transport resolved and the success callback ran.
    Success,
    /// The transport rejected. Logged, not shown to the user.
    Failure,
}

/// Orchestrates validate → submit → resolve for one form.
///
/// All transitions of the owning [`FormState`] happen here, so the state
/// machine can be audited and tested in isolation from rendering.
pub struct SubmissionController<C> {
    state: FormState,
    rules: RuleSet,
    transport: Arc<dyn Transport<C>>,
    extract: CredentialExtractor<C>,
    on_success: Option<SuccessCallback>,
}

impl<C: Send + 'static> SubmissionController<C> {
    /// Create a controller for a form.
    ///
    /// `extract` builds the typed credential payload from the value snapshot
    /// once validation has passed.
    pub fn new<F>(
        state: FormState,
        rules: RuleSet,
        transport: Arc<dyn Transport<C>>,
        extract: F,
    ) -> Self
    where
        F: Fn(&FieldValues) -> C + Send + Sync + 'static,
    {
        Self {
            state,
            rules,
            transport,
            extract: Box::new(extract),
            on_success: None,
        }
    }

    /// Register the success callback supplied by the embedding view.
    pub fn on_success<F>(mut self, f: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_success = Some(Box::new(f));
        self
    }

    /// The form state this controller owns transitions for.
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Run one submission cycle.
    pub async fn submit(&self) -> SubmitOutcome {
        if self.state.is_submitting() {
            return SubmitOutcome::Blocked;
        }

        // Validating: synchronous, full pass over every field.
        let values = self.state.values();
        match self.rules.validate(&values) {
            ValidationResult::Invalid(errors) => {
                log::debug!("validation failed on {} field(s)", errors.len());
                self.state.set_errors(errors);
                return SubmitOutcome::Invalid;
            }
            ValidationResult::Valid => self.state.clear_errors(),
        }

        if !self.state.begin_submit() {
            return SubmitOutcome::Blocked;
        }

        let credentials = (self.extract)(&values);
        match self.transport.submit(credentials).await {
            Ok(()) => {
                self.state.end_submit();
                if let Some(on_success) = &self.on_success {
                    on_success();
                }
                SubmitOutcome::Success
            }
            Err(e) => {
                // No user-visible surface for transport failures; the only
                // trace is the log line.
                log::error!("submission failed: {e}");
                self.state.end_submit();
                SubmitOutcome::Failure
            }
        }
    }
}
