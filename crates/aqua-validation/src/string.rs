//! String validation functions

/// Required non-empty string (whitespace-only counts as empty)
pub fn is_present(s: &str) -> bool {
    !s.trim().is_empty()
}

/// Validates minimum length, counted in characters
pub fn validate_min_length(s: &str, min: usize) -> Result<(), String> {
    if s.chars().count() >= min {
        Ok(())
    } else {
        Err(format!("Must be at least {} characters", min))
    }
}

/// Minimum length of the text with surrounding whitespace ignored
pub fn validate_trimmed_min_length(s: &str, min: usize) -> Result<(), String> {
    validate_min_length(s.trim(), min)
}

/// Equality validators
pub fn equals(value: &str, expected: &str) -> bool {
    value == expected
}

/// Enum/value restriction
pub fn is_one_of<S: AsRef<str>>(value: &str, allowed: &[S]) -> bool {
    allowed.iter().any(|a| a.as_ref() == value)
}

/// Boolean-must-be-true (terms acceptance)
pub fn is_accepted(flag: bool) -> bool {
    flag
}
