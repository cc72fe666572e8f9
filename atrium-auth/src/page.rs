//! Parent pages owning a form plus the transient confirmation.

use std::sync::Arc;

use formkit::notify::Notifier;

use crate::forms::{SignInForm, SignUpForm};

/// Confirmation shown after a successful sign-in.
pub const LOGIN_SUCCESS_NOTICE: &str = "Successfully logged in!";

/// Confirmation shown after a successful sign-up.
pub const SIGNUP_SUCCESS_NOTICE: &str = "Account created successfully!";

/// The sign-in page: the form wired to a notifier that shows a transient
/// confirmation banner on success and auto-dismisses it.
pub struct SignInPage {
    form: SignInForm,
    notifier: Arc<Notifier>,
}

impl SignInPage {
    /// Page around a fresh form with the simulated transport.
    pub fn new() -> Self {
        Self::with_form(SignInForm::new())
    }

    /// Page around a pre-built form; its success callback is wired here.
    pub fn with_form(form: SignInForm) -> Self {
        let notifier = Arc::new(Notifier::new());
        let handle = Arc::clone(&notifier);
        let form = form.on_success(move || handle.signal());
        Self { form, notifier }
    }

    pub fn form(&self) -> &SignInForm {
        &self.form
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Whether the confirmation banner is currently shown.
    pub fn showing_confirmation(&self) -> bool {
        self.notifier.is_visible()
    }

    /// Banner text, present only while the confirmation is shown.
    pub fn confirmation_text(&self) -> Option<&'static str> {
        self.showing_confirmation().then_some(LOGIN_SUCCESS_NOTICE)
    }
}

impl Default for SignInPage {
    fn default() -> Self {
        Self::new()
    }
}

/// The sign-up page; same wiring as [`SignInPage`] around a [`SignUpForm`].
pub struct SignUpPage {
    form: SignUpForm,
    notifier: Arc<Notifier>,
}

impl SignUpPage {
    /// Page around a fresh form with the simulated transport.
    pub fn new() -> Self {
        Self::with_form(SignUpForm::new())
    }

    /// Page around a pre-built form; its success callback is wired here.
    pub fn with_form(form: SignUpForm) -> Self {
        let notifier = Arc::new(Notifier::new());
        let handle = Arc::clone(&notifier);
        let form = form.on_success(move || handle.signal());
        Self { form, notifier }
    }

    pub fn form(&self) -> &SignUpForm {
        &self.form
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Whether the confirmation banner is currently shown.
    pub fn showing_confirmation(&self) -> bool {
        self.notifier.is_visible()
    }

    /// Banner text, present only while the confirmation is shown.
    pub fn confirmation_text(&self) -> Option<&'static str> {
        self.showing_confirmation().then_some(SIGNUP_SUCCESS_NOTICE)
    }
}

impl Default for SignUpPage {
    fn default() -> Self {
        Self::new()
    }
}
