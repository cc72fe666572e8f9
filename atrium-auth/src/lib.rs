//! Credential-capture core for the Atrium demo application.
//!
//! Sign-in and sign-up forms validate locally, submit through a simulated
//! authentication transport, and report success to a parent page that shows
//! a transient confirmation. Nothing leaves the process: the transport is a
//! stand-in that a real client can replace via [`formkit::submit::Transport`].

pub mod credentials;
pub mod forms;
pub mod page;
pub mod transport;

pub use credentials::{LoginCredentials, SignupCredentials};
pub use forms::{SignInForm, SignUpForm};
pub use page::{SignInPage, SignUpPage};
pub use transport::{SUBMIT_DELAY, SimulatedAuth};
