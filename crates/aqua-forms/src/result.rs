// File: src/result.rs
// Purpose: Outcome of one validation pass

use serde::Serialize;
use std::collections::BTreeMap;

/// Result of validation with one message per failing field
///
/// `is_valid` is true exactly when `errors` is empty; every constructor and
/// mutator keeps the two in step.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    is_valid: bool,
    errors: BTreeMap<String, String>,
}

impl ValidationResult {
    /// Create a successful validation result
    pub fn success() -> Self {
        Self {
            is_valid: true,
            errors: BTreeMap::new(),
        }
    }

    /// Create a result from collected errors
    pub fn from_errors(errors: BTreeMap<String, String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// Single-field failure
    pub fn field_error(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = BTreeMap::new();
        errors.insert(field.into(), message.into());
        Self::from_errors(errors)
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Get the error for a specific field
    pub fn get_error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Records `message` for `field` unless the field already has one
    pub(crate) fn record(&mut self, field: &str, message: String) {
        self.errors.entry(field.to_string()).or_insert(message);
        self.is_valid = false;
    }

    /// Removes the error for `field`; returns whether there was one
    pub fn clear_field(&mut self, field: &str) -> bool {
        let removed = self.errors.remove(field).is_some();
        self.is_valid = self.errors.is_empty();
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_success_is_valid() {
        let result = ValidationResult::success();
        assert!(result.is_valid());
        assert!(!result.has_errors());
    }

    #[test]
    fn test_from_empty_errors_is_valid() {
        assert!(ValidationResult::from_errors(BTreeMap::new()).is_valid());
    }

    #[test]
    fn test_first_message_per_field_wins() {
        let mut result = ValidationResult::success();
        result.record("email", "Email is required".to_string());
        result.record("email", "Enter a valid email".to_string());

        assert!(!result.is_valid());
        assert_eq!(result.get_error("email"), Some("Email is required"));
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_clear_last_field_restores_validity() {
        let mut result = ValidationResult::field_error("date", "Select a date");
        assert!(result.clear_field("date"));
        assert!(result.is_valid());
        assert!(!result.clear_field("date"));
    }

    #[test]
    fn test_serializes_camel_case() {
        let result = ValidationResult::field_error("date", "Select a date");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json, serde_json::json!({"isValid": false, "errors": {"date": "Select a date"}}));
    }
}
