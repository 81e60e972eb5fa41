// File: src/state.rs
// Purpose: Per-form interaction state held between submits

use crate::result::ValidationResult;
use crate::rule::FormSchema;
use crate::value::{FieldValue, FormValues};

/// What happened when a form was submitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Field errors blocked the submit; nothing was sent
    Invalid,
    /// The collaborator rejected the submit; message is the submit-level error
    Failed(String),
    /// The collaborator accepted the submit
    Submitted,
}

impl SubmitOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmitOutcome::Submitted)
    }
}

/// Values, last validation result and submit-level error of one form
///
/// Validation only runs on [`FormState::validate`]. Editing a field after a
/// failed pass merely drops that field's error.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    values: FormValues,
    validation: ValidationResult,
    submit_error: Option<String>,
    loading: bool,
}

impl FormState {
    pub fn new(values: FormValues) -> Self {
        Self {
            values,
            validation: ValidationResult::success(),
            submit_error: None,
            loading: false,
        }
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn validation(&self) -> &ValidationResult {
        &self.validation
    }

    /// Inline error for one field, if any
    pub fn error(&self, field: &str) -> Option<&str> {
        self.validation.get_error(field)
    }

    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Stores a new value; a changed value clears the field's error
    ///
    /// Returns true when an error was cleared.
    pub fn set(&mut self, field: &str, value: impl Into<FieldValue>) -> bool {
        let value = value.into();
        let previous = self.values.set(field, value.clone());

        if previous.as_ref() == Some(&value) {
            return false;
        }
        self.validation.clear_field(field)
    }

    /// Full validation pass; replaces the stored result
    pub fn validate(&mut self, schema: &FormSchema) -> &ValidationResult {
        self.submit_error = None;
        self.validation = schema.validate(&self.values);
        &self.validation
    }

    /// Replaces the stored result with one computed elsewhere
    pub fn set_validation(&mut self, validation: ValidationResult) {
        self.submit_error = None;
        self.validation = validation;
    }

    pub fn begin_submit(&mut self) {
        self.loading = true;
    }

    pub fn finish_submit(&mut self) {
        self.loading = false;
    }

    /// Records a collaborator failure as the form-wide error
    pub fn fail_submit(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.submit_error = Some(message.into());
    }
}

/// Submit-level message for a collaborator error, falling back to `default`
pub fn submit_message(err: &anyhow::Error, default: &str) -> String {
    let message = err.to_string();
    if message.trim().is_empty() {
        default.to_string()
    } else {
        message
    }
}
