// File: src/record.rs
// Purpose: Finished student records and their registration IDs

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::fmt;

use crate::form::{Department, Gender};
use crate::sequence::SequenceGenerator;
use crate::types::{EmailAddress, PersonName};
use crate::validation::Applicant;
use crate::FIELD_SEPARATOR;

/// Registration ID: the registration year and a per-process sequence
/// number, rendered as `2024-00001`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct RegistrationId {
    year: i32,
    sequence: u32,
}

impl RegistrationId {
    pub fn new(year: i32, sequence: u32) -> Self {
        Self { year, sequence }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn sequence(&self) -> u32 {
        self.sequence
    }
}

impl fmt::Display for RegistrationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:05}", self.year, self.sequence)
    }
}

impl From<RegistrationId> for String {
    fn from(id: RegistrationId) -> Self {
        id.to_string()
    }
}

/// One completed registration. Immutable once issued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentRecord {
    id: RegistrationId,
    first_name: PersonName,
    last_name: PersonName,
    gender: Gender,
    department: Department,
    registered_on: NaiveDate,
    email: EmailAddress,
}

impl StudentRecord {
    /// Turns an applicant into a record, taking the next number from
    /// `sequence`. This is the only way to build a record.
    ///
    /// `None` when the sequence has no numbers left.
    pub fn issue<S>(applicant: Applicant, today: NaiveDate, sequence: &S) -> Option<Self>
    where
        S: SequenceGenerator + ?Sized,
    {
        Some(Self {
            id: RegistrationId::new(today.year(), sequence.next_value()?),
            first_name: applicant.first_name,
            last_name: applicant.last_name,
            gender: applicant.gender,
            department: applicant.department,
            registered_on: today,
            email: applicant.email,
        })
    }

    pub fn id(&self) -> RegistrationId {
        self.id
    }

    pub fn first_name(&self) -> &PersonName {
        &self.first_name
    }

    pub fn last_name(&self) -> &PersonName {
        &self.last_name
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn department(&self) -> Department {
        self.department
    }

    pub fn registered_on(&self) -> NaiveDate {
        self.registered_on
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Display and storage form:
    /// `ID | First Last | Gender | Department | YYYY-MM-DD | email`
    ///
    /// Fields are not escaped. A name containing the separator produces a
    /// line with extra fields.
    pub fn line(&self) -> String {
        [
            self.id.to_string(),
            self.full_name(),
            self.gender.to_string(),
            self.department.to_string(),
            self.registered_on.format("%Y-%m-%d").to_string(),
            self.email.to_string(),
        ]
        .join(FIELD_SEPARATOR)
    }
}

impl fmt::Display for StudentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.line())
    }
}
