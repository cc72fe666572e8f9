pub mod error;
pub mod notify;
pub mod state;
pub mod submit;
pub mod validation;

pub mod prelude {
    pub use crate::error::SubmitError;
    pub use crate::notify::{NOTICE_DURATION, Notifier};
    pub use crate::state::{FieldBinding, FormState};
    pub use crate::submit::{SubmissionController, SubmitOutcome, Transport};
    pub use crate::validation::{FieldError, FieldValues, Rule, RuleSet, ValidationResult};
}
