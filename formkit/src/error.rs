//! Error types.

/// Errors that can occur while submitting credentials.
///
/// These are caught at the submission controller boundary: a failed
/// submission resets the submitting flag and is logged, never surfaced to
/// the user, and never propagates past the controller.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmitError {
    /// The remote end rejected the credentials.
    #[error("submission rejected: {0}")]
    Rejected(String),

    /// Transport-level failure before a response was produced.
    #[error("transport error: {0}")]
    Transport(String),
}
