//! Password validation functions

use crate::string::validate_min_length;

/// Password strength patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordPattern {
    /// 6+ characters minimum (sign-in form)
    Basic,
    /// 8+ chars with uppercase, lowercase, and digit (registration form)
    Medium,
}

impl PasswordPattern {
    /// Minimum number of characters for this pattern
    ///
    /// ```
    /// use aqua_validation::password::PasswordPattern;
    /// assert_eq!(PasswordPattern::Basic.min_length(), 6);
    /// assert_eq!(PasswordPattern::Medium.min_length(), 8);
    /// ```
    pub fn min_length(self) -> usize {
        match self {
            PasswordPattern::Basic => 6,
            PasswordPattern::Medium => 8,
        }
    }
}

/// Validates password against a pattern
///
/// # Patterns
/// - `Basic`: 6+ characters
/// - `Medium`: 8+ chars with uppercase, lowercase, digit
pub fn validate_password(password: &str, pattern: PasswordPattern) -> Result<(), String> {
    match pattern {
        PasswordPattern::Basic => validate_basic(password),
        PasswordPattern::Medium => validate_medium(password),
    }
}

/// True when the password contains a lowercase letter, an uppercase letter and a digit
pub fn has_mixed_case_and_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_lowercase())
        && password.chars().any(|c| c.is_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
}

fn validate_basic(password: &str) -> Result<(), String> {
    let min = PasswordPattern::Basic.min_length();
    validate_min_length(password, min)
        .map_err(|_| format!("Password must be at least {} characters", min))
}

/// Length first, then composition, so the user sees one message at a time
fn validate_medium(password: &str) -> Result<(), String> {
    let min = PasswordPattern::Medium.min_length();
    validate_min_length(password, min)
        .map_err(|_| format!("Password must be at least {} characters", min))?;

    if !has_mixed_case_and_digit(password) {
        return Err(
            "Password must contain at least one uppercase letter, one lowercase letter and one number"
                .to_string(),
        );
    }

    Ok(())
}
