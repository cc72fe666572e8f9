//! Form validation system.
//!
//! Rules are declared per field with a fluent builder and evaluated
//! imperatively against a snapshot of the form's values. Evaluation runs
//! synchronously over every registered field at each submit attempt; within
//! a field the rules run in declaration order and the first failing rule
//! wins, so a field carries at most one error at a time.
//!
//! # Example
//!
//! ```ignore
//! use formkit::validation::RuleSet;
//!
//! let rules = RuleSet::builder()
//!     .field("email")
//!         .required("Email is required")
//!         .pattern(EMAIL_PATTERN, "Invalid email address")
//!     .field("password")
//!         .required("Password is required")
//!         .min_length(8, "Password must be at least 8 characters")
//!     .build();
//!
//! let result = rules.validate(&state.values());
//! if result.is_valid() {
//!     // Proceed with form submission
//! }
//! ```

mod result;
mod rules;

pub use result::{FieldError, ValidationResult};
pub use rules::{FieldValues, Rule, RuleSet, RuleSetBuilder};
