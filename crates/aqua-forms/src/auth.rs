// File: src/auth.rs
// Purpose: Sign-in and registration forms and the authentication hand-off

use crate::rule::FormSchema;
use crate::state::{submit_message, FormState, SubmitOutcome};
use crate::value::{FieldValue, FormValues};
use aqua_validation::{validate_password, PasswordPattern};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Field names shared with the view layer
pub mod fields {
    pub const FIRST_NAME: &str = "firstName";
    pub const LAST_NAME: &str = "lastName";
    pub const EMAIL: &str = "email";
    pub const PHONE: &str = "phone";
    pub const PASSWORD: &str = "password";
    pub const CONFIRM_PASSWORD: &str = "confirmPassword";
    pub const ROLE: &str = "role";
    pub const ACCEPT_TERMS: &str = "acceptTerms";
}

/// External authentication collaborator
///
/// Token handling, HTTP and persistence all live behind this trait. Forms
/// only surface the error text it returns.
#[async_trait]
pub trait AuthService: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> anyhow::Result<()>;

    async fn register(&self, data: &RegisterData) -> anyhow::Result<()>;
}

/// Account type chosen at registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Client,
    Instructor,
    Provider,
}

impl UserRole {
    pub const ALL: [&'static str; 3] = ["client", "instructor", "provider"];

    pub fn as_str(self) -> &'static str {
        match self {
            UserRole::Client => "client",
            UserRole::Instructor => "instructor",
            UserRole::Provider => "provider",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "client" => Ok(UserRole::Client),
            "instructor" => Ok(UserRole::Instructor),
            "provider" => Ok(UserRole::Provider),
            other => anyhow::bail!("unknown user role: {other}"),
        }
    }
}

/// Payload handed to [`AuthService::register`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterData {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl RegisterData {
    /// Names are trimmed and an empty phone becomes `None`
    pub fn from_values(values: &FormValues) -> Self {
        let phone = values.text(fields::PHONE);
        Self {
            email: values.text(fields::EMAIL),
            password: values.text(fields::PASSWORD),
            first_name: values.text(fields::FIRST_NAME).trim().to_string(),
            last_name: values.text(fields::LAST_NAME).trim().to_string(),
            role: values.text(fields::ROLE).parse().unwrap_or_default(),
            phone: (!phone.is_empty()).then_some(phone),
        }
    }
}

/// Sign-in form rules: email shape, password of 6+ characters
pub fn login_schema() -> FormSchema {
    FormSchema::new("login")
        .required(fields::EMAIL, "Email is required")
        .email(fields::EMAIL, "Enter a valid email")
        .required_untrimmed(fields::PASSWORD, "Password is required")
        .check_untrimmed(fields::PASSWORD, |p| validate_password(p, PasswordPattern::Basic))
}

/// Registration form rules
pub fn register_schema() -> FormSchema {
    FormSchema::new("register")
        .required(fields::FIRST_NAME, "First name is required")
        .min_length(fields::FIRST_NAME, 2, "First name must be at least 2 characters")
        .required(fields::LAST_NAME, "Last name is required")
        .min_length(fields::LAST_NAME, 2, "Last name must be at least 2 characters")
        .required(fields::EMAIL, "Email is required")
        .email(fields::EMAIL, "Enter a valid email")
        .optional_phone(fields::PHONE, "Enter a valid phone number")
        .required_untrimmed(fields::PASSWORD, "Password is required")
        .check_untrimmed(fields::PASSWORD, |p| validate_password(p, PasswordPattern::Medium))
        .required_untrimmed(fields::CONFIRM_PASSWORD, "Confirm your password")
        .matches_field(fields::CONFIRM_PASSWORD, fields::PASSWORD, "Passwords do not match")
        .one_of(fields::ROLE, &UserRole::ALL, "Choose a valid account type")
        .accepted(fields::ACCEPT_TERMS, "You must accept the terms and conditions")
}

/// Sign-in form
#[derive(Debug, Clone)]
pub struct LoginForm {
    state: FormState,
    schema: FormSchema,
}

impl LoginForm {
    pub fn new() -> Self {
        Self {
            state: FormState::new(
                FormValues::new().with(fields::EMAIL, "").with(fields::PASSWORD, ""),
            ),
            schema: login_schema(),
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn set(&mut self, field: &str, value: impl Into<FieldValue>) -> bool {
        self.state.set(field, value)
    }

    /// Validates, then hands the credentials to `auth`
    pub async fn submit<A: AuthService>(&mut self, auth: &A) -> SubmitOutcome {
        if !self.state.validate(&self.schema).is_valid() {
            return SubmitOutcome::Invalid;
        }

        let email = self.state.values().text(fields::EMAIL);
        let password = self.state.values().text(fields::PASSWORD);

        self.state.begin_submit();
        match auth.login(&email, &password).await {
            Ok(()) => {
                self.state.finish_submit();
                tracing::info!(email = %email, "signed in");
                SubmitOutcome::Submitted
            }
            Err(err) => {
                let message = submit_message(&err, "Login failed");
                tracing::warn!(email = %email, error = %message, "sign-in rejected");
                self.state.fail_submit(message.clone());
                SubmitOutcome::Failed(message)
            }
        }
    }
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Registration form
#[derive(Debug, Clone)]
pub struct RegisterForm {
    state: FormState,
    schema: FormSchema,
}

impl RegisterForm {
    pub fn new() -> Self {
        let values = FormValues::new()
            .with(fields::FIRST_NAME, "")
            .with(fields::LAST_NAME, "")
            .with(fields::EMAIL, "")
            .with(fields::PHONE, "")
            .with(fields::PASSWORD, "")
            .with(fields::CONFIRM_PASSWORD, "")
            .with(fields::ROLE, UserRole::Client.as_str())
            .with(fields::ACCEPT_TERMS, false);

        Self {
            state: FormState::new(values),
            schema: register_schema(),
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn set(&mut self, field: &str, value: impl Into<FieldValue>) -> bool {
        self.state.set(field, value)
    }

    /// Validates, then hands the new account to `auth`
    pub async fn submit<A: AuthService>(&mut self, auth: &A) -> SubmitOutcome {
        if !self.state.validate(&self.schema).is_valid() {
            return SubmitOutcome::Invalid;
        }

        let data = RegisterData::from_values(self.state.values());

        self.state.begin_submit();
        match auth.register(&data).await {
            Ok(()) => {
                self.state.finish_submit();
                tracing::info!(email = %data.email, role = %data.role, "account registered");
                SubmitOutcome::Submitted
            }
            Err(err) => {
                let message = submit_message(&err, "Registration failed");
                tracing::warn!(email = %data.email, error = %message, "registration rejected");
                self.state.fail_submit(message.clone());
                SubmitOutcome::Failed(message)
            }
        }
    }
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn registration() -> FormValues {
        FormValues::new()
            .with(fields::FIRST_NAME, "  Ana ")
            .with(fields::LAST_NAME, "García")
            .with(fields::EMAIL, "ana@example.com")
            .with(fields::PHONE, "")
            .with(fields::PASSWORD, "Abcdefg1")
            .with(fields::CONFIRM_PASSWORD, "Abcdefg1")
            .with(fields::ROLE, "instructor")
            .with(fields::ACCEPT_TERMS, true)
    }

    #[test]
    fn test_register_data_normalization() {
        let data = RegisterData::from_values(&registration());
        assert_eq!(data.first_name, "Ana");
        assert_eq!(data.phone, None);
        assert_eq!(data.role, UserRole::Instructor);
    }

    #[test]
    fn test_register_data_serializes_camel_case_without_empty_phone() {
        let json = serde_json::to_value(RegisterData::from_values(&registration())).unwrap();
        assert_eq!(json["firstName"], "Ana");
        assert_eq!(json["role"], "instructor");
        assert!(json.get("phone").is_none());
    }

    #[test]
    fn test_login_schema_password_length() {
        let values = FormValues::new()
            .with(fields::EMAIL, "ana@example.com")
            .with(fields::PASSWORD, "12345");
        let result = login_schema().validate(&values);
        assert!(result.get_error(fields::PASSWORD).unwrap().contains('6'));
    }

    #[test]
    fn test_whitespace_password_is_not_missing() {
        let values = FormValues::new()
            .with(fields::EMAIL, "ana@example.com")
            .with(fields::PASSWORD, "   ");
        let result = login_schema().validate(&values);
        assert_eq!(
            result.get_error(fields::PASSWORD),
            Some("Password must be at least 6 characters")
        );
    }

    #[test]
    fn test_role_parse() {
        assert_eq!("provider".parse::<UserRole>().unwrap(), UserRole::Provider);
        assert!("admin".parse::<UserRole>().is_err());
    }
}
