//! Tests for the parent pages and the confirmation banner.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use atrium_auth::forms::{SignInForm, SignUpForm};
use atrium_auth::page::{LOGIN_SUCCESS_NOTICE, SignInPage, SignUpPage};
use atrium_auth::{LoginCredentials, SignupCredentials};
use formkit::error::SubmitError;
use formkit::submit::{SubmitOutcome, Transport};

/// Transport that counts calls and resolves instantly.
#[derive(Default)]
struct InstantTransport {
    calls: AtomicUsize,
}

#[async_trait]
impl Transport<LoginCredentials> for InstantTransport {
    async fn submit(&self, _credentials: LoginCredentials) -> Result<(), SubmitError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[async_trait]
impl Transport<SignupCredentials> for InstantTransport {
    async fn submit(&self, _credentials: SignupCredentials) -> Result<(), SubmitError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

fn login_page() -> SignInPage {
    let page = SignInPage::with_form(SignInForm::with_transport(Arc::new(
        InstantTransport::default(),
    )));
    page.form().set_email("user@example.com");
    page.form().set_password("Passw0rd!");
    page
}

#[tokio::test(start_paused = true)]
async fn success_shows_the_banner_and_auto_dismisses() {
    let page = login_page();
    assert!(!page.showing_confirmation());
    assert_eq!(page.confirmation_text(), None);

    assert_eq!(page.form().submit().await, SubmitOutcome::Success);
    tokio::task::yield_now().await;

    assert!(page.showing_confirmation());
    assert_eq!(page.confirmation_text(), Some(LOGIN_SUCCESS_NOTICE));

    tokio::time::advance(Duration::from_millis(2999)).await;
    tokio::task::yield_now().await;
    assert!(page.showing_confirmation());

    tokio::time::advance(Duration::from_millis(1)).await;
    tokio::task::yield_now().await;
    assert!(!page.showing_confirmation());
    assert_eq!(page.confirmation_text(), None);
}

#[tokio::test(start_paused = true)]
async fn a_second_success_restarts_the_banner_window() {
    let page = login_page();

    // First success at t=0, second at t=1000: the banner stays up until
    // t=4000, not t=3000.
    assert_eq!(page.form().submit().await, SubmitOutcome::Success);
    tokio::task::yield_now().await;

    tokio::time::advance(Duration::from_millis(1000)).await;
    assert_eq!(page.form().submit().await, SubmitOutcome::Success);
    tokio::task::yield_now().await;

    tokio::time::advance(Duration::from_millis(2500)).await;
    tokio::task::yield_now().await;
    assert!(page.showing_confirmation(), "still visible at t=3500");

    tokio::time::advance(Duration::from_millis(500)).await;
    tokio::task::yield_now().await;
    assert!(!page.showing_confirmation(), "cleared at t=4000");
}

#[tokio::test]
async fn failed_validation_never_touches_the_banner() {
    let page = login_page();
    page.form().set_email("not-an-email");

    assert_eq!(page.form().submit().await, SubmitOutcome::Invalid);
    tokio::task::yield_now().await;
    assert!(!page.showing_confirmation());
}

#[tokio::test(start_paused = true)]
async fn dropping_the_page_cancels_the_pending_banner_timer() {
    let page = login_page();
    assert_eq!(page.form().submit().await, SubmitOutcome::Success);
    tokio::task::yield_now().await;
    drop(page);

    // The dismissal timer exits via cancellation instead of firing against
    // dropped state.
    tokio::time::advance(Duration::from_millis(3000)).await;
    tokio::task::yield_now().await;
}

#[tokio::test(start_paused = true)]
async fn signup_page_wires_the_same_confirmation_flow() {
    let page = SignUpPage::with_form(SignUpForm::with_transport(Arc::new(
        InstantTransport::default(),
    )));
    page.form().set_name("Ada Lovelace");
    page.form().set_email("ada@example.com");
    page.form().set_password("Passw0rd!");
    page.form().set_confirm_password("Passw0rd!");

    assert_eq!(page.form().submit().await, SubmitOutcome::Success);
    tokio::task::yield_now().await;
    assert!(page.showing_confirmation());

    tokio::time::advance(Duration::from_millis(3000)).await;
    tokio::task::yield_now().await;
    assert!(!page.showing_confirmation());
}
