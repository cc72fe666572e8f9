//! Sign-in form.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use formkit::state::{FieldBinding, FormState};
use formkit::submit::{SubmissionController, SubmitOutcome, Transport};
use formkit::validation::RuleSet;

use super::EMAIL_PATTERN;
use crate::credentials::LoginCredentials;
use crate::transport::SimulatedAuth;

/// Field name for the email input.
pub const EMAIL: &str = "email";
/// Field name for the password input.
pub const PASSWORD: &str = "password";

/// The sign-in form: email and password with local validation and a
/// simulated remote call.
///
/// State lives as long as the form instance; dropping the form discards
/// values, errors, and toggles.
pub struct SignInForm {
    state: FormState,
    controller: SubmissionController<LoginCredentials>,
    /// "Remember me" checkbox; plain state with no effect on submission.
    remember: AtomicBool,
}

impl SignInForm {
    /// Build against the standard simulated transport.
    pub fn new() -> Self {
        Self::with_transport(Arc::new(SimulatedAuth::new()))
    }

    /// Build against any transport. Real clients slot in here without
    /// touching validation or the state machine.
    pub fn with_transport(transport: Arc<dyn Transport<LoginCredentials>>) -> Self {
        let state = FormState::new();
        state.mask_field(PASSWORD);
        state.set_placeholder(EMAIL, "name@example.com");
        state.set_placeholder(PASSWORD, "••••••••");

        let rules = RuleSet::builder()
            .field(EMAIL)
            .required("Email is required")
            .pattern(EMAIL_PATTERN, "Invalid email address")
            .field(PASSWORD)
            .required("Password is required")
            .min_length(8, "Password must be at least 8 characters")
            .build();

        let controller =
            SubmissionController::new(state.clone(), rules, transport, |values| LoginCredentials {
                email: values.get(EMAIL).cloned().unwrap_or_default(),
                password: values.get(PASSWORD).cloned().unwrap_or_default(),
            });

        Self {
            state,
            controller,
            remember: AtomicBool::new(false),
        }
    }

    /// Register the success callback supplied by the embedding view.
    pub fn on_success<F>(mut self, f: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.controller = self.controller.on_success(f);
        self
    }

    /// The underlying form state.
    pub fn state(&self) -> &FormState {
        &self.state
    }

    // -------------------------------------------------------------------------
    // Change handlers
    // -------------------------------------------------------------------------

    pub fn set_email(&self, value: impl Into<String>) {
        self.state.set_value(EMAIL, value);
    }

    pub fn set_password(&self, value: impl Into<String>) {
        self.state.set_value(PASSWORD, value);
    }

    pub fn set_remember(&self, remember: bool) {
        self.remember.store(remember, Ordering::SeqCst);
    }

    pub fn remember(&self) -> bool {
        self.remember.load(Ordering::SeqCst)
    }

    // -------------------------------------------------------------------------
    // Display contract
    // -------------------------------------------------------------------------

    pub fn email_binding(&self) -> FieldBinding {
        self.state.binding(EMAIL)
    }

    pub fn password_binding(&self) -> FieldBinding {
        self.state.binding(PASSWORD)
    }

    /// Flip the password reveal toggle.
    pub fn toggle_password_visibility(&self) {
        self.state.toggle_visibility(PASSWORD);
    }

    /// Whether the submit control is disabled.
    pub fn is_submitting(&self) -> bool {
        self.state.is_submitting()
    }

    /// Label for the submit control.
    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            "Signing in..."
        } else {
            "Sign in"
        }
    }

    // -------------------------------------------------------------------------
    // Submission
    // -------------------------------------------------------------------------

    /// Run one submission cycle: validate, then submit through the
    /// transport if every field passed.
    pub async fn submit(&self) -> SubmitOutcome {
        self.controller.submit().await
    }
}

impl Default for SignInForm {
    fn default() -> Self {
        Self::new()
    }
}
