//! Password validation functions

use crate::string::is_line_terminator;

/// Password policy: a length window plus required character classes
///
/// Letters and digits are ASCII only. Length is counted in characters,
/// not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub min_length: usize,
    pub max_length: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: 8,
            max_length: 20,
        }
    }
}

impl PasswordPolicy {
    /// Validates a password against the policy
    ///
    /// Returns the first unmet requirement as a human readable reason.
    pub fn validate(&self, password: &str) -> Result<(), String> {
        if password.chars().any(is_line_terminator) {
            return Err("Password must not contain line breaks".to_string());
        }

        let length = password.chars().count();

        if length < self.min_length || length > self.max_length {
            return Err(format!(
                "Password must be between {} and {} characters",
                self.min_length, self.max_length
            ));
        }
        if !password.chars().any(|c| c.is_ascii_alphabetic()) {
            return Err("Password must contain at least one letter".to_string());
        }
        if !password.chars().any(|c| c.is_ascii_digit()) {
            return Err("Password must contain at least one digit".to_string());
        }

        Ok(())
    }
}
