//! Validated field types for a finished registration
//!
//! A [`StudentRecord`](crate::StudentRecord) is built from these types only,
//! so a record holding an empty name or a malformed email cannot exist.
//! Construction goes through `try_new`, which applies the same predicates
//! the form rules use.

use nutype::nutype;

/// First or last name: surrounding whitespace removed, never empty, and
/// a single line with no control characters
#[nutype(
    sanitize(trim),
    validate(not_empty, predicate = rollcall_validation::is_single_line),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        Deref,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct PersonName(String);

/// Email address with the basic `local@domain.tld` shape
#[nutype(
    sanitize(trim),
    validate(predicate = rollcall_validation::is_valid_email),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        Deref,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct EmailAddress(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_name() {
        let name = PersonName::try_new("  Ada ".to_string()).unwrap();
        assert_eq!(name.to_string(), "Ada");
        assert!(PersonName::try_new("   ".to_string()).is_err());
        assert!(PersonName::try_new(String::new()).is_err());
    }

    #[test]
    fn test_person_name_rejects_embedded_line_breaks() {
        assert!(PersonName::try_new("Ada\n2099-99999 | Forged".to_string()).is_err());
        assert!(PersonName::try_new("Ada\rLovelace".to_string()).is_err());
        assert!(PersonName::try_new("Ada\u{2029}Lovelace".to_string()).is_err());
        assert!(PersonName::try_new("A\u{7}da".to_string()).is_err());
        // Surrounding line breaks are trimmed away first
        assert_eq!(PersonName::try_new("Ada\n".to_string()).unwrap().to_string(), "Ada");
    }

    #[test]
    fn test_email_address() {
        let email = EmailAddress::try_new(" ada@x.com ".to_string()).unwrap();
        assert_eq!(email.to_string(), "ada@x.com");
        assert!(EmailAddress::try_new("a@b".to_string()).is_err());
    }
}
