//! Email validation functions

use once_cell::sync::Lazy;
use regex::Regex;

// Local part, '@', domain, '.', top-level domain. Each piece non-empty
// and free of line terminators.
static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[^\n\r\x{85}\x{2028}\x{2029}]+@[^\n\r\x{85}\x{2028}\x{2029}]+\.[^\n\r\x{85}\x{2028}\x{2029}]+$",
    )
    .expect("email pattern compiles")
});

/// Validates the basic shape of an email address
///
/// Deliberately loose: anything with a non-empty local part, an `@`, a
/// non-empty domain and a dotted suffix is accepted. `a@b.co` passes,
/// `a@b` does not.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

/// An email and its confirmation must both be well formed and identical
pub fn is_confirmed_email(email: &str, confirmation: &str) -> bool {
    is_valid_email(email) && email == confirmation
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("ada@x.com"));
        assert!(is_valid_email("test.user@example.co.uk"));
        assert!(is_valid_email("user+tag@example.com"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("@"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@example."));
        assert!(!is_valid_email("plainaddress"));
    }

    #[test]
    fn test_line_terminators_are_rejected() {
        assert!(!is_valid_email("a\r@b.co"));
        assert!(!is_valid_email("a@b\n.co"));
        assert!(!is_valid_email("a@b.co\u{85}x"));
        assert!(!is_valid_email("a@b\u{2028}.co"));
        assert!(!is_valid_email("a\u{2029}@b.co"));
        // Tabs are not line terminators
        assert!(is_valid_email("a\t@b.co"));
    }

    #[test]
    fn test_confirmation() {
        assert!(is_confirmed_email("a@b.co", "a@b.co"));
        assert!(!is_confirmed_email("a@b.co", "x@b.co"));
        // Matching but malformed still fails
        assert!(!is_confirmed_email("a@b", "a@b"));
    }
}
