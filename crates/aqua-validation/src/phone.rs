//! Phone number validation

use once_cell::sync::Lazy;
use regex::Regex;

// Optional leading '+', then at least 10 digits/spaces/dashes/parens
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?[\d\s\-()]{10,}$").unwrap());

/// Loose international phone shape
///
/// Separators count towards the 10-character minimum, so
/// `"+34 123 456 789"` and `"(555) 123-4567"` both pass.
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone)
}

/// Optional phone: empty input never fails
pub fn is_valid_optional_phone(phone: &str) -> bool {
    phone.is_empty() || is_valid_phone(phone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_phones() {
        assert!(is_valid_phone("+34 123 456 789"));
        assert!(is_valid_phone("(555) 123-4567"));
        assert!(is_valid_phone("0123456789"));
    }

    #[test]
    fn test_invalid_phones() {
        assert!(!is_valid_phone("12345"));
        assert!(!is_valid_phone("+34 abc 456 789"));
        assert!(!is_valid_phone("++34123456789"));
    }

    #[test]
    fn test_optional_phone() {
        assert!(is_valid_optional_phone(""));
        assert!(!is_valid_optional_phone("123"));
    }
}
