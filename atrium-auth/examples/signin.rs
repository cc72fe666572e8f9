//! Headless walkthrough of the sign-in flow.
//!
//! Runs one failed attempt (inline errors, no remote call) and one valid
//! attempt that resolves after the simulated delay and raises the
//! confirmation banner.

use atrium_auth::SignInPage;
use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

#[tokio::main]
async fn main() {
    TermLogger::init(
        LevelFilter::Debug,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .expect("Failed to initialize logger");

    let page = SignInPage::new();
    let form = page.form();

    // Invalid attempt: inline errors, no remote call.
    form.set_email("not-an-email");
    form.set_password("short");
    let outcome = form.submit().await;
    println!("first attempt: {outcome:?}");
    for field in ["email", "password"] {
        if let Some(error) = form.state().error(field) {
            println!("  {error}");
        }
    }

    // Valid attempt: resolves after the simulated delay.
    form.set_email("user@example.com");
    form.set_password("Passw0rd!");
    println!("submitting...");
    let outcome = form.submit().await;
    println!(
        "second attempt: {outcome:?}, banner: {}",
        page.confirmation_text().unwrap_or("<none>")
    );
}
