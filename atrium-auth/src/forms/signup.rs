//! Sign-up form.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use formkit::state::{FieldBinding, FormState};
use formkit::submit::{SubmissionController, SubmitOutcome, Transport};
use formkit::validation::{Rule, RuleSet};

use super::{EMAIL_PATTERN, password_complexity};
use crate::credentials::SignupCredentials;
use crate::transport::SimulatedAuth;

/// Field name for the full-name input.
pub const NAME: &str = "name";
/// Field name for the email input.
pub const EMAIL: &str = "email";
/// Field name for the password input.
pub const PASSWORD: &str = "password";
/// Field name for the password confirmation input.
pub const CONFIRM_PASSWORD: &str = "confirm_password";

/// The sign-up form: name, email, password, and confirmation with local
/// validation and a simulated remote call.
pub struct SignUpForm {
    state: FormState,
    controller: SubmissionController<SignupCredentials>,
    /// Terms checkbox; plain state outside the rule set.
    accepted_terms: AtomicBool,
}

impl SignUpForm {
    /// Build against the standard simulated transport.
    pub fn new() -> Self {
        Self::with_transport(Arc::new(SimulatedAuth::new()))
    }

    /// Build against any transport.
    pub fn with_transport(transport: Arc<dyn Transport<SignupCredentials>>) -> Self {
        let state = FormState::new();
        state.mask_field(PASSWORD);
        state.mask_field(CONFIRM_PASSWORD);
        state.set_placeholder(NAME, "John Doe");
        state.set_placeholder(EMAIL, "name@example.com");
        state.set_placeholder(PASSWORD, "••••••••");
        state.set_placeholder(CONFIRM_PASSWORD, "••••••••");

        let rules = RuleSet::builder()
            .field(NAME)
            .required("Name is required")
            .min_length(2, "Name must be at least 2 characters")
            .field(EMAIL)
            .required("Email is required")
            .pattern(EMAIL_PATTERN, "Invalid email address")
            .field(PASSWORD)
            .required("Password is required")
            .min_length(8, "Password must be at least 8 characters")
            .rule(Rule::custom(
                password_complexity,
                "Password must include uppercase, lowercase, number and special character",
            ))
            .field(CONFIRM_PASSWORD)
            .required("Please confirm your password")
            .matches_field(PASSWORD, "Passwords do not match")
            .build();

        let controller =
            SubmissionController::new(state.clone(), rules, transport, |values| {
                SignupCredentials {
                    name: values.get(NAME).cloned().unwrap_or_default(),
                    email: values.get(EMAIL).cloned().unwrap_or_default(),
                    password: values.get(PASSWORD).cloned().unwrap_or_default(),
                    confirm_password: values.get(CONFIRM_PASSWORD).cloned().unwrap_or_default(),
                }
            });

        Self {
            state,
            controller,
            accepted_terms: AtomicBool::new(false),
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

    pub fn set_name(&self, value: impl Into<String>) {
        self.state.set_value(NAME, value);
    }

    pub fn set_email(&self, value: impl Into<String>) {
        self.state.set_value(EMAIL, value);
    }

    pub fn set_password(&self, value: impl Into<String>) {
        self.state.set_value(PASSWORD, value);
    }

    pub fn set_confirm_password(&self, value: impl Into<String>) {
        self.state.set_value(CONFIRM_PASSWORD, value);
    }

    pub fn set_accepted_terms(&self, accepted: bool) {
        self.accepted_terms.store(accepted, Ordering::SeqCst);
    }

    pub fn accepted_terms(&self) -> bool {
        self.accepted_terms.load(Ordering::SeqCst)
    }

    // -------------------------------------------------------------------------
    // Display contract
    // -------------------------------------------------------------------------

    pub fn name_binding(&self) -> FieldBinding {
        self.state.binding(NAME)
    }

    pub fn email_binding(&self) -> FieldBinding {
        self.state.binding(EMAIL)
    }

    pub fn password_binding(&self) -> FieldBinding {
        self.state.binding(PASSWORD)
    }

    pub fn confirm_password_binding(&self) -> FieldBinding {
        self.state.binding(CONFIRM_PASSWORD)
    }

    /// Flip the password reveal toggle.
    pub fn toggle_password_visibility(&self) {
        self.state.toggle_visibility(PASSWORD);
    }

    /// Flip the confirmation reveal toggle; independent of the password's.
    pub fn toggle_confirm_password_visibility(&self) {
        self.state.toggle_visibility(CONFIRM_PASSWORD);
    }

    /// Whether the submit control is disabled.
    pub fn is_submitting(&self) -> bool {
        self.state.is_submitting()
    }

    /// Label for the submit control.
    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            "Creating account..."
        } else {
            "Create account"
        }
    }

    // -------------------------------------------------------------------------
    // Submission
    // -------------------------------------------------------------------------

    /// Run one submission cycle.
    pub async fn submit(&self) -> SubmitOutcome {
        self.controller.submit().await
    }
}

impl Default for SignUpForm {
    fn default() -> Self {
        Self::new()
    }
}
