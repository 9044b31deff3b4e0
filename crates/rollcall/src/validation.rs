// File: src/validation.rs
// Purpose: Registration rules and the validator that applies them

use chrono::NaiveDate;
use rollcall_validation::{
    age_from_month, all_present, is_confirmed_email, is_single_line, is_within, PasswordPolicy,
};
use std::fmt;
use tracing::debug;

use crate::form::{Department, FormInput, Gender};
use crate::record::StudentRecord;
use crate::sequence::SequenceGenerator;
use crate::types::{EmailAddress, PersonName};

/// One failed registration rule
///
/// The `Display` text is the message shown to the person filling the form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Name required")]
    NameRequired,
    #[error("Invalid or mismatched email")]
    InvalidEmail,
    #[error("Invalid or mismatched password")]
    InvalidPassword,
    #[error("DOB required")]
    BirthDateRequired,
    #[error("Select gender")]
    GenderRequired,
    #[error("Select department")]
    DepartmentRequired,
    #[error("Age must be {min}–{max}")]
    AgeOutOfRange { min: i32, max: i32 },
    #[error("Registration numbers exhausted")]
    SequenceExhausted,
}

/// Every rule that failed for one submission, in rule order. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    fn single(error: ValidationError) -> Self {
        Self(vec![error])
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    /// Human readable messages, one per failed rule
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }

    pub fn contains(&self, error: &ValidationError) -> bool {
        self.0.contains(error)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages().join("\n"))
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Outcome of validating a submission and, when it passes, issuing a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Rejected(ValidationErrors),
    Accepted(StudentRecord),
}

impl ValidationResult {
    pub fn into_result(self) -> Result<StudentRecord, ValidationErrors> {
        match self {
            ValidationResult::Accepted(record) => Ok(record),
            ValidationResult::Rejected(errors) => Err(errors),
        }
    }
}

/// Tunable limits applied by the validator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Policy {
    pub min_age: i32,
    pub max_age: i32,
    pub password: PasswordPolicy,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            min_age: 16,
            max_age: 60,
            password: PasswordPolicy::default(),
        }
    }
}

/// A submission that passed every rule and is waiting for its ID
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applicant {
    pub(crate) first_name: PersonName,
    pub(crate) last_name: PersonName,
    pub(crate) email: EmailAddress,
    pub(crate) gender: Gender,
    pub(crate) department: Department,
    pub(crate) birth_date: NaiveDate,
    pub(crate) age: i32,
}

impl Applicant {
    pub fn first_name(&self) -> &PersonName {
        &self.first_name
    }

    pub fn last_name(&self) -> &PersonName {
        &self.last_name
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn department(&self) -> Department {
        self.department
    }

    /// First day of the birth month
    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    pub fn age(&self) -> i32 {
        self.age
    }
}

/// Applies the registration rules under a [`Policy`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Validator {
    policy: Policy,
}

impl Validator {
    pub fn new(policy: Policy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    /// Runs every rule against the form without side effects
    ///
    /// All structural rules are evaluated and reported together. The age
    /// rule runs only once they all pass, and reports alone.
    pub fn check(&self, input: &FormInput, today: NaiveDate) -> Result<Applicant, ValidationErrors> {
        let first_name = input.first_name.trim();
        let last_name = input.last_name.trim();
        let email = input.email.trim();

        let mut errors = Vec::new();

        // A name must fit on its record line
        if !all_present(&[first_name, last_name])
            || !is_single_line(first_name)
            || !is_single_line(last_name)
        {
            errors.push(ValidationError::NameRequired);
        }

        if !is_confirmed_email(email, input.confirm_email.trim()) {
            errors.push(ValidationError::InvalidEmail);
        }

        let password_ok = match self.policy.password.validate(&input.password) {
            Ok(()) => true,
            Err(reason) => {
                debug!(%reason, "password does not meet policy");
                false
            }
        };
        if !password_ok || input.password != input.confirm_password {
            errors.push(ValidationError::InvalidPassword);
        }

        let birth = input.birth_year.zip(input.birth_month);
        if birth.is_none() {
            errors.push(ValidationError::BirthDateRequired);
        }

        if input.gender.is_none() {
            errors.push(ValidationError::GenderRequired);
        }

        if input.department.is_none() {
            errors.push(ValidationError::DepartmentRequired);
        }

        let (Some((year, month)), Some(gender), Some(department), true) =
            (birth, input.gender, input.department, errors.is_empty())
        else {
            return Err(ValidationErrors(errors));
        };

        let age_error = || {
            ValidationErrors::single(ValidationError::AgeOutOfRange {
                min: self.policy.min_age,
                max: self.policy.max_age,
            })
        };

        let month = month.number_from_month();
        let age = age_from_month(year, month, today)
            .filter(|age| is_within(*age, self.policy.min_age, self.policy.max_age))
            .ok_or_else(age_error)?;
        let birth_date = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(age_error)?;

        Ok(Applicant {
            first_name: PersonName::try_new(first_name.to_string())
                .map_err(|_| ValidationErrors::single(ValidationError::NameRequired))?,
            last_name: PersonName::try_new(last_name.to_string())
                .map_err(|_| ValidationErrors::single(ValidationError::NameRequired))?,
            email: EmailAddress::try_new(email.to_string())
                .map_err(|_| ValidationErrors::single(ValidationError::InvalidEmail))?,
            gender,
            department,
            birth_date,
            age,
        })
    }

    /// Checks the form and, when it passes, issues a record numbered from
    /// `sequence`. A rejected form leaves the sequence untouched.
    ///
    /// A form that passes every rule is still rejected once the sequence
    /// is exhausted.
    pub fn validate<S>(&self, input: &FormInput, today: NaiveDate, sequence: &S) -> ValidationResult
    where
        S: SequenceGenerator + ?Sized,
    {
        match self.check(input, today) {
            Ok(applicant) => match StudentRecord::issue(applicant, today, sequence) {
                Some(record) => ValidationResult::Accepted(record),
                None => ValidationResult::Rejected(ValidationErrors::single(
                    ValidationError::SequenceExhausted,
                )),
            },
            Err(errors) => ValidationResult::Rejected(errors),
        }
    }
}

/// [`Validator::check`] under the default policy
pub fn check(input: &FormInput, today: NaiveDate) -> Result<Applicant, ValidationErrors> {
    Validator::default().check(input, today)
}

/// [`Validator::validate`] under the default policy
pub fn validate<S>(input: &FormInput, today: NaiveDate, sequence: &S) -> ValidationResult
where
    S: SequenceGenerator + ?Sized,
{
    Validator::default().validate(input, today, sequence)
}
