// File: src/rule.rs
// Purpose: Named field rules and the per-form schema that groups them

use crate::engine;
use crate::result::ValidationResult;
use crate::value::{FieldValue, FormValues};
use aqua_validation::{
    equals, is_accepted, is_one_of, is_present, is_valid_email, is_valid_optional_phone,
    validate_trimmed_min_length,
};
use std::fmt;
use std::sync::Arc;

type Check = dyn Fn(&FieldValue, &FormValues) -> Result<(), String> + Send + Sync;

/// A single named validation constraint applied to one form field
///
/// The check sees the field's own value plus the whole form, so cross-field
/// rules (password confirmation) fit the same shape as single-field ones.
#[derive(Clone)]
pub struct FieldRule {
    field: String,
    check: Arc<Check>,
}

impl FieldRule {
    /// Predicate rule with a fixed error message
    pub fn new<F>(field: impl Into<String>, message: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&FieldValue) -> bool + Send + Sync + 'static,
    {
        let message = message.into();
        Self::with_check(field, move |value, _| {
            if predicate(value) {
                Ok(())
            } else {
                Err(message.clone())
            }
        })
    }

    /// Predicate rule that can read other fields of the form
    pub fn across<F>(field: impl Into<String>, message: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&FieldValue, &FormValues) -> bool + Send + Sync + 'static,
    {
        let message = message.into();
        Self::with_check(field, move |value, form| {
            if predicate(value, form) {
                Ok(())
            } else {
                Err(message.clone())
            }
        })
    }

    /// Rule whose message comes from the check itself
    pub fn with_check<F>(field: impl Into<String>, check: F) -> Self
    where
        F: Fn(&FieldValue, &FormValues) -> Result<(), String> + Send + Sync + 'static,
    {
        Self {
            field: field.into(),
            check: Arc::new(check),
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    /// Runs the rule against `values`
    pub fn check(&self, values: &FormValues) -> Result<(), String> {
        (self.check)(values.get(&self.field), values)
    }
}

impl fmt::Debug for FieldRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldRule").field("field", &self.field).finish_non_exhaustive()
    }
}

/// Ordered rule list for one form
///
/// Rule order matters only within a field: the first failing rule for a
/// field supplies that field's message.
#[derive(Debug, Clone, Default)]
pub struct FormSchema {
    name: String,
    rules: Vec<FieldRule>,
}

impl FormSchema {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rules: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }

    pub fn rule(mut self, rule: FieldRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Required non-empty value
    pub fn required(self, field: &str, message: impl Into<String>) -> Self {
        self.rule(FieldRule::new(field, message, |v| !v.is_blank()))
    }

    /// Non-empty as typed; whitespace counts as a value (passwords)
    pub fn required_untrimmed(self, field: &str, message: impl Into<String>) -> Self {
        self.rule(FieldRule::new(field, message, |v| !v.to_text().is_empty()))
    }

    /// Minimum trimmed length; blank values are left to `required`
    pub fn min_length(self, field: &str, min: usize, message: impl Into<String>) -> Self {
        self.rule(FieldRule::new(field, message, move |v| {
            let text = v.to_text();
            !is_present(&text) || validate_trimmed_min_length(&text, min).is_ok()
        }))
    }

    /// `local@domain.tld` shape; blank values are left to `required`
    pub fn email(self, field: &str, message: impl Into<String>) -> Self {
        self.rule(FieldRule::new(field, message, |v| {
            v.is_blank() || is_valid_email(&v.to_text())
        }))
    }

    /// Optional phone: empty passes, anything else must look like a number
    pub fn optional_phone(self, field: &str, message: impl Into<String>) -> Self {
        self.rule(FieldRule::new(field, message, |v| {
            is_valid_optional_phone(&v.to_text())
        }))
    }

    /// Must equal another field of the same form
    pub fn matches_field(self, field: &str, other: &str, message: impl Into<String>) -> Self {
        let other = other.to_string();
        self.rule(FieldRule::across(field, message, move |v, form| {
            equals(&v.to_text(), &form.text(&other))
        }))
    }

    /// Checkbox must be ticked
    pub fn accepted(self, field: &str, message: impl Into<String>) -> Self {
        self.rule(FieldRule::new(field, message, |v| is_accepted(v.as_bool())))
    }

    /// Blank, or one of `allowed`
    pub fn one_of(self, field: &str, allowed: &[&str], message: impl Into<String>) -> Self {
        let allowed: Vec<String> = allowed.iter().map(|s| s.to_string()).collect();
        self.rule(FieldRule::new(field, message, move |v| {
            v.is_blank() || is_one_of(&v.to_text(), &allowed)
        }))
    }

    /// Runs a validator that reports its own message, on non-blank values only
    pub fn check<F>(self, field: &str, check: F) -> Self
    where
        F: Fn(&str) -> Result<(), String> + Send + Sync + 'static,
    {
        self.rule(FieldRule::with_check(field, move |v, _| {
            if v.is_blank() {
                Ok(())
            } else {
                check(&v.to_text())
            }
        }))
    }

    /// Like [`FormSchema::check`], but only an empty value is skipped
    pub fn check_untrimmed<F>(self, field: &str, check: F) -> Self
    where
        F: Fn(&str) -> Result<(), String> + Send + Sync + 'static,
    {
        self.rule(FieldRule::with_check(field, move |v, _| {
            let text = v.to_text();
            if text.is_empty() {
                Ok(())
            } else {
                check(&text)
            }
        }))
    }

    /// Validates `values` against every rule in this schema
    pub fn validate(&self, values: &FormValues) -> ValidationResult {
        engine::validate(self, values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_reports_fixed_message() {
        let rule = FieldRule::new("firstName", "Name is required", |v| !v.is_blank());
        let values = FormValues::new();
        assert_eq!(rule.check(&values), Err("Name is required".to_string()));

        let values = FormValues::new().with("firstName", "Ana");
        assert!(rule.check(&values).is_ok());
    }

    #[test]
    fn test_cross_field_rule() {
        let schema = FormSchema::new("t").matches_field("confirmPassword", "password", "mismatch");
        let rule = &schema.rules()[0];

        let same = FormValues::new().with("password", "Abcdefg1").with("confirmPassword", "Abcdefg1");
        let different = FormValues::new().with("password", "Abcdefg1").with("confirmPassword", "Abcdefg2");

        assert!(rule.check(&same).is_ok());
        assert!(rule.check(&different).is_err());
    }

    #[test]
    fn test_min_length_ignores_blank_and_trims() {
        let schema = FormSchema::new("t").min_length("lastName", 2, "too short");
        let rule = &schema.rules()[0];

        assert!(rule.check(&FormValues::new()).is_ok());
        assert!(rule.check(&FormValues::new().with("lastName", " R ")).is_err());
        assert!(rule.check(&FormValues::new().with("lastName", "Ruiz")).is_ok());
    }

    #[test]
    fn test_one_of_allows_blank() {
        let schema = FormSchema::new("t").one_of("role", &["client", "provider"], "bad role");
        let rule = &schema.rules()[0];

        assert!(rule.check(&FormValues::new()).is_ok());
        assert!(rule.check(&FormValues::new().with("role", "provider")).is_ok());
        assert!(rule.check(&FormValues::new().with("role", "admin")).is_err());
    }

    #[test]
    fn test_untrimmed_rules_see_whitespace() {
        let schema = FormSchema::new("t")
            .required_untrimmed("password", "required")
            .check_untrimmed("password", |p| Err(format!("checked {:?}", p)));

        let spaces = schema.validate(&FormValues::new().with("password", "   "));
        assert_eq!(spaces.get_error("password"), Some("checked \"   \""));

        let empty = schema.validate(&FormValues::new().with("password", ""));
        assert_eq!(empty.get_error("password"), Some("required"));
    }

    #[test]
    fn test_debug_names_field() {
        let rule = FieldRule::new("email", "msg", |_| true);
        assert!(format!("{:?}", rule).contains("email"));
    }
}
