// File: src/engine.rs
// Purpose: Runs a form schema against raw values

use crate::result::ValidationResult;
use crate::rule::FormSchema;
use crate::value::FormValues;

/// Validates `values` against `schema`
///
/// Every rule runs, even after earlier failures, so all field errors surface
/// in a single pass. A field keeps the message of its first failing rule.
/// The result depends only on the inputs.
pub fn validate(schema: &FormSchema, values: &FormValues) -> ValidationResult {
    let mut result = ValidationResult::success();

    for rule in schema.rules() {
        if let Err(message) = rule.check(values) {
            result.record(rule.field(), message);
        }
    }

    tracing::debug!(
        form = schema.name(),
        rules = schema.rules().len(),
        errors = result.len(),
        "validated form"
    );

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::FieldRule;
    use crate::value::FieldValue;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn contact_schema() -> FormSchema {
        FormSchema::new("contact")
            .required("name", "Name is required")
            .min_length("name", 2, "Name must be at least 2 characters")
            .required("email", "Email is required")
            .email("email", "Enter a valid email")
    }

    #[test]
    fn test_valid_input() {
        let values = FormValues::new().with("name", "Ana").with("email", "ana@example.com");
        let result = validate(&contact_schema(), &values);
        assert!(result.is_valid());
    }

    #[test]
    fn test_all_fields_reported_in_one_pass() {
        let result = validate(&contact_schema(), &FormValues::new());

        assert!(!result.is_valid());
        assert_eq!(result.get_error("name"), Some("Name is required"));
        assert_eq!(result.get_error("email"), Some("Email is required"));
    }

    #[test]
    fn test_later_rule_message_when_earlier_passes() {
        let values = FormValues::new().with("name", "A").with("email", "ana@");
        let result = validate(&contact_schema(), &values);

        assert_eq!(result.get_error("name"), Some("Name must be at least 2 characters"));
        assert_eq!(result.get_error("email"), Some("Enter a valid email"));
    }

    #[test]
    fn test_every_rule_runs() {
        fn counter(calls: Arc<AtomicUsize>) -> impl Fn(&FieldValue) -> bool + Send + Sync + 'static {
            move |_| {
                calls.fetch_add(1, Ordering::SeqCst);
                false
            }
        }

        let calls = Arc::new(AtomicUsize::new(0));
        let schema = FormSchema::new("count")
            .rule(FieldRule::new("a", "a1", counter(calls.clone())))
            .rule(FieldRule::new("a", "a2", counter(calls.clone())))
            .rule(FieldRule::new("b", "b1", counter(calls.clone())));

        let result = validate(&schema, &FormValues::new());

        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(result.get_error("a"), Some("a1"));
        assert_eq!(result.get_error("b"), Some("b1"));
    }

    #[test]
    fn test_deterministic() {
        let values = FormValues::new().with("name", "A");
        let first = validate(&contact_schema(), &values);
        let second = validate(&contact_schema(), &values);
        assert_eq!(first, second);
    }
}
