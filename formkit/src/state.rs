//! Per-form mutable state.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, RwLock};

use crate::validation::{FieldError, FieldValues};

/// What an external input primitive needs to render one field.
///
/// The primitive renders `value` (masked if `masked` is set), shows its
/// error styling when `error` is set, and reports keystrokes back through
/// [`FormState::set_value`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldBinding {
    /// Current text value.
    pub value: String,
    /// Whether the field failed its last validation pass.
    pub error: bool,
    /// Whether the value should be hidden behind placeholder glyphs.
    pub masked: bool,
    /// Placeholder text shown while the value is empty.
    pub placeholder: String,
}

#[derive(Default)]
struct FormInner {
    /// Current text value per field.
    values: BTreeMap<String, String>,
    /// At most one active error per field.
    errors: BTreeMap<String, FieldError>,
    /// True only between submission start and its resolution.
    submitting: bool,
    /// Reveal flag per maskable field; absent for plain fields.
    visibility: BTreeMap<String, bool>,
    /// Placeholder text per field.
    placeholders: BTreeMap<String, String>,
}

/// Mutable state for one mounted form.
///
/// `FormState` is cheap to clone; clones share the same cell, so the form,
/// its submission controller, and any input bindings all observe the same
/// values. State lives as long as the form instance and nothing persists
/// across instances.
#[derive(Default)]
pub struct FormState {
    inner: Arc<RwLock<FormInner>>,
}

impl FormState {
    /// Create empty form state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a maskable field, initially masked.
    ///
    /// Masked fields render behind placeholder glyphs and are redacted from
    /// `Debug` output even while revealed.
    pub fn mask_field(&self, field: impl Into<String>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.visibility.entry(field.into()).or_insert(false);
        }
    }

    /// Set the placeholder text for a field.
    pub fn set_placeholder(&self, field: impl Into<String>, text: impl Into<String>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.placeholders.insert(field.into(), text.into());
        }
    }

    // -------------------------------------------------------------------------
    // Values
    // -------------------------------------------------------------------------

    /// Get the current value of a field (empty if never set).
    pub fn value(&self, field: &str) -> String {
        self.inner
            .read()
            .map(|inner| inner.values.get(field).cloned().unwrap_or_default())
            .unwrap_or_default()
    }

    /// Set a field's value. This is the change handler side of the input
    /// contract; it never touches errors, which are replaced wholesale by
    /// the next validation pass.
    pub fn set_value(&self, field: impl Into<String>, value: impl Into<String>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.values.insert(field.into(), value.into());
        }
    }

    /// Snapshot of all current values.
    pub fn values(&self) -> FieldValues {
        self.inner
            .read()
            .map(|inner| inner.values.clone())
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Errors
    // -------------------------------------------------------------------------

    /// Get the active error for a field (if any).
    pub fn error(&self, field: &str) -> Option<FieldError> {
        self.inner
            .read()
            .ok()
            .and_then(|inner| inner.errors.get(field).cloned())
    }

    /// Check whether a field failed its last validation pass.
    pub fn has_error(&self, field: &str) -> bool {
        self.inner
            .read()
            .map(|inner| inner.errors.contains_key(field))
            .unwrap_or(false)
    }

    /// Number of fields with an active error.
    pub fn error_count(&self) -> usize {
        self.inner
            .read()
            .map(|inner| inner.errors.len())
            .unwrap_or(0)
    }

    /// Replace all errors with the given set.
    pub fn set_errors(&self, errors: Vec<FieldError>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.errors = errors
                .into_iter()
                .map(|e| (e.field.clone(), e))
                .collect();
        }
    }

    /// Clear all active errors.
    pub fn clear_errors(&self) {
        if let Ok(mut inner) = self.inner.write() {
            inner.errors.clear();
        }
    }

    // -------------------------------------------------------------------------
    // Submission flag
    // -------------------------------------------------------------------------

    /// Whether a submission is currently in flight. The submit control is
    /// disabled while this is true.
    pub fn is_submitting(&self) -> bool {
        self.inner
            .read()
            .map(|inner| inner.submitting)
            .unwrap_or(false)
    }

    /// Atomically enter the submitting state. Returns false if a submission
    /// is already in flight, in which case the caller must not proceed.
    pub(crate) fn begin_submit(&self) -> bool {
        match self.inner.write() {
            Ok(mut inner) => {
                if inner.submitting {
                    false
                } else {
                    inner.submitting = true;
                    true
                }
            }
            Err(_) => false,
        }
    }

    /// Leave the submitting state.
    pub(crate) fn end_submit(&self) {
        if let Ok(mut inner) = self.inner.write() {
            inner.submitting = false;
        }
    }

    // -------------------------------------------------------------------------
    // Visibility
    // -------------------------------------------------------------------------

    /// Whether a maskable field is currently revealed. Plain fields and
    /// never-toggled maskable fields report false.
    pub fn is_visible(&self, field: &str) -> bool {
        self.inner
            .read()
            .map(|inner| inner.visibility.get(field).copied().unwrap_or(false))
            .unwrap_or(false)
    }

    /// Flip the reveal flag of a maskable field. Only that field's flag
    /// changes; values and errors are untouched.
    pub fn toggle_visibility(&self, field: &str) {
        if let Ok(mut inner) = self.inner.write()
            && let Some(visible) = inner.visibility.get_mut(field)
        {
            *visible = !*visible;
        }
    }

    // -------------------------------------------------------------------------
    // Bindings
    // -------------------------------------------------------------------------

    /// Build the display contract for one field in a single read.
    pub fn binding(&self, field: &str) -> FieldBinding {
        let Ok(inner) = self.inner.read() else {
            return FieldBinding::default();
        };
        FieldBinding {
            value: inner.values.get(field).cloned().unwrap_or_default(),
            error: inner.errors.contains_key(field),
            masked: matches!(inner.visibility.get(field), Some(false)),
            placeholder: inner.placeholders.get(field).cloned().unwrap_or_default(),
        }
    }
}

impl Clone for FormState {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

// Maskable field values stay out of Debug output regardless of the reveal
// flag, so form state can be logged without leaking credentials.
impl fmt::Debug for FormState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Ok(inner) = self.inner.read() else {
            return f.write_str("FormState");
        };
        let values: BTreeMap<&str, &str> = inner
            .values
            .iter()
            .map(|(field, value)| {
                let shown = if inner.visibility.contains_key(field) {
                    "[REDACTED]"
                } else {
                    value.as_str()
                };
                (field.as_str(), shown)
            })
            .collect();
        f.debug_struct("FormState")
            .field("values", &values)
            .field("errors", &inner.errors)
            .field("submitting", &inner.submitting)
            .field("visibility", &inner.visibility)
            .finish()
    }
}
