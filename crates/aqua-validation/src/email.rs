//! Email validation functions

use once_cell::sync::Lazy;
use regex::Regex;

// local@domain.tld, no whitespace and exactly one '@' between the parts
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Validates the `local@domain.tld` shape
///
/// Deliberately loose: any non-blank, non-`@` run is accepted for each part,
/// as long as the domain contains a dot with something on both sides.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}
