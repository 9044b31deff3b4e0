// File: src/form.rs
// Purpose: Form snapshot and the closed selection sets

use chrono::Month;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A selection value that is not one of the offered choices
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {field} '{value}' (expected one of: {expected})")]
pub struct UnknownChoice {
    pub field: &'static str,
    pub value: String,
    pub expected: String,
}

/// Gender radio group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

/// Department radio group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    Civil,
    #[serde(rename = "CSE")]
    Cse,
    Electrical,
    #[serde(rename = "E&C")]
    ElectronicsAndCommunication,
    Mechanical,
}

impl Department {
    pub const ALL: [Department; 5] = [
        Department::Civil,
        Department::Cse,
        Department::Electrical,
        Department::ElectronicsAndCommunication,
        Department::Mechanical,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Department::Civil => "Civil",
            Department::Cse => "CSE",
            Department::Electrical => "Electrical",
            Department::ElectronicsAndCommunication => "E&C",
            Department::Mechanical => "Mechanical",
        }
    }
}

macro_rules! label_traits {
    ($ty:ty, $field:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $ty {
            type Err = UnknownChoice;

            /// Matches a display label, ignoring case and surrounding whitespace
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                <$ty>::ALL
                    .into_iter()
                    .find(|choice| choice.label().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| UnknownChoice {
                        field: $field,
                        value: wanted.to_string(),
                        expected: <$ty>::ALL
                            .iter()
                            .map(|choice| choice.label())
                            .collect::<Vec<_>>()
                            .join(", "),
                    })
            }
        }
    };
}

label_traits!(Gender, "gender");
label_traits!(Department, "department");

/// Parses a birth month given as a number (1-12) or an English name
///
/// Full names and three-letter abbreviations are accepted in any case.
pub fn parse_month(s: &str) -> Option<Month> {
    let s = s.trim();
    match s.parse::<u8>() {
        Ok(number) => Month::try_from(number).ok(),
        Err(_) => s.parse::<Month>().ok(),
    }
}

/// Snapshot of every field on the registration form at submit time
///
/// Text fields hold exactly what was typed; trimming is the validator's
/// job. Selections are `None` until the user picks something.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub confirm_email: String,
    pub password: String,
    pub confirm_password: String,
    pub birth_year: Option<i32>,
    pub birth_month: Option<Month>,
    pub gender: Option<Gender>,
    pub department: Option<Department>,
}

impl fmt::Debug for FormInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormInput")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("confirm_email", &self.confirm_email)
            .field("password", &"<redacted>")
            .field("confirm_password", &"<redacted>")
            .field("birth_year", &self.birth_year)
            .field("birth_month", &self.birth_month)
            .field("gender", &self.gender)
            .field("department", &self.department)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Male", Gender::Male)]
    #[case("female", Gender::Female)]
    #[case("  FEMALE ", Gender::Female)]
    fn test_gender_from_label(#[case] input: &str, #[case] expected: Gender) {
        assert_eq!(input.parse::<Gender>(), Ok(expected));
    }

    #[rstest]
    #[case("Civil", Department::Civil)]
    #[case("cse", Department::Cse)]
    #[case("E&C", Department::ElectronicsAndCommunication)]
    #[case("mechanical", Department::Mechanical)]
    fn test_department_from_label(#[case] input: &str, #[case] expected: Department) {
        assert_eq!(input.parse::<Department>(), Ok(expected));
    }

    #[test]
    fn test_unknown_choice() {
        let err = "Biology".parse::<Department>().unwrap_err();
        assert_eq!(err.field, "department");
        assert_eq!(
            err.to_string(),
            "unknown department 'Biology' (expected one of: Civil, CSE, Electrical, E&C, Mechanical)"
        );
        assert!("".parse::<Gender>().is_err());
    }

    #[test]
    fn test_labels_round_trip_through_display() {
        for department in Department::ALL {
            assert_eq!(department.to_string().parse::<Department>(), Ok(department));
        }
        for gender in Gender::ALL {
            assert_eq!(gender.to_string().parse::<Gender>(), Ok(gender));
        }
    }

    #[rstest]
    #[case("5", Some(Month::May))]
    #[case("12", Some(Month::December))]
    #[case("May", Some(Month::May))]
    #[case("january", Some(Month::January))]
    #[case("sep", Some(Month::September))]
    #[case("0", None)]
    #[case("13", None)]
    #[case("Smarch", None)]
    fn test_parse_month(#[case] input: &str, #[case] expected: Option<Month>) {
        assert_eq!(parse_month(input), expected);
    }

    #[test]
    fn test_debug_hides_passwords() {
        let input = FormInput {
            password: "pass1234".to_string(),
            confirm_password: "pass1234".to_string(),
            ..Default::default()
        };
        let rendered = format!("{:?}", input);
        assert!(!rendered.contains("pass1234"));
        assert!(rendered.contains("<redacted>"));
    }
}
