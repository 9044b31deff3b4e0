// File: src/registrar.rs
// Purpose: Submit handling between a form front end and the record store

use chrono::NaiveDate;
use tracing::{debug, error, info};

use crate::form::FormInput;
use crate::record::StudentRecord;
use crate::sequence::SequenceGenerator;
use crate::store::{RecordStore, StoreError};
use crate::validation::{Policy, ValidationErrors, ValidationResult, Validator};

/// What happened to one press of "Submit"
#[derive(Debug)]
pub enum Submission {
    /// The form failed one or more rules. Nothing was numbered or stored.
    Rejected(ValidationErrors),
    /// A record was issued. `persisted` says whether the store took it;
    /// the ID is spent either way.
    Registered {
        record: StudentRecord,
        persisted: Result<(), StoreError>,
    },
}

impl Submission {
    pub fn record(&self) -> Option<&StudentRecord> {
        match self {
            Submission::Registered { record, .. } => Some(record),
            Submission::Rejected(_) => None,
        }
    }

    pub fn errors(&self) -> Option<&ValidationErrors> {
        match self {
            Submission::Rejected(errors) => Some(errors),
            Submission::Registered { .. } => None,
        }
    }
}

/// Owns the sequence and the store for one form session
///
/// Submissions are handled synchronously: validate, number, append.
pub struct Registrar<S, R> {
    validator: Validator,
    sequence: S,
    store: R,
}

impl<S, R> Registrar<S, R>
where
    S: SequenceGenerator,
    R: RecordStore,
{
    pub fn new(sequence: S, store: R) -> Self {
        Self {
            validator: Validator::default(),
            sequence,
            store,
        }
    }

    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.validator = Validator::new(policy);
        self
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    pub fn sequence(&self) -> &S {
        &self.sequence
    }

    pub fn store(&self) -> &R {
        &self.store
    }

    /// Validates the form and, if it passes, issues and stores a record
    ///
    /// A store failure does not take the record back: the caller still
    /// gets it to show, along with the error to report.
    pub fn submit(&self, input: &FormInput, today: NaiveDate) -> Submission {
        match self.validator.validate(input, today, &self.sequence) {
            ValidationResult::Rejected(errors) => {
                debug!(errors = errors.len(), "registration rejected");
                Submission::Rejected(errors)
            }
            ValidationResult::Accepted(record) => {
                let persisted = self.store.append(&record.line());
                match &persisted {
                    Ok(()) => info!(id = %record.id(), store = self.store.name(), "student registered"),
                    Err(err) => error!(id = %record.id(), error = %err, "student registered but not stored"),
                }
                Submission::Registered { record, persisted }
            }
        }
    }

    /// Lines already in the store
    pub fn records(&self) -> Result<Vec<String>, StoreError> {
        self.store.read_all()
    }
}
