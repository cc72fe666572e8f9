//! Credential payloads captured by the forms.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Credentials captured by the sign-in form.
#[derive(Clone, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

/// Credentials captured by the sign-up form.
#[derive(Clone, Serialize, Deserialize)]
pub struct SignupCredentials {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

// Debug is hand-written so password values never reach logs.
impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl fmt::Debug for SignupCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupCredentials")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("confirm_password", &"[REDACTED]")
            .finish()
    }
}
