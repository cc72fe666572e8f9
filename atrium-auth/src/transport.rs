//! Simulated authentication transport.

use std::time::Duration;

use async_trait::async_trait;
use formkit::error::SubmitError;
use formkit::submit::Transport;

use crate::credentials::{LoginCredentials, SignupCredentials};

/// Fixed delay standing in for the round-trip of a real authentication call.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1500);

/// Transport that resolves unconditionally after a fixed delay.
///
/// Stands in for a real authentication client; no request ever leaves the
/// process and every attempt succeeds. The controller's failure branch stays
/// reachable only through substitute transports.
#[derive(Debug, Clone)]
pub struct SimulatedAuth {
    delay: Duration,
}

impl SimulatedAuth {
    /// Create a transport with the standard simulated delay.
    pub fn new() -> Self {
        Self {
            delay: SUBMIT_DELAY,
        }
    }

    /// Override the simulated round-trip delay.
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedAuth {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport<LoginCredentials> for SimulatedAuth {
    async fn submit(&self, credentials: LoginCredentials) -> Result<(), SubmitError> {
        log::debug!("login attempt with {credentials:?}");
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}

#[async_trait]
impl Transport<SignupCredentials> for SimulatedAuth {
    async fn submit(&self, credentials: SignupCredentials) -> Result<(), SubmitError> {
        log::debug!("signup attempt with {credentials:?}");
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}
