// File: rollcall/src/lib.rs
// Purpose: Main entry point for the rollcall library

//! # rollcall
//!
//! Student registration for a single-window form: validate a snapshot of the
//! form fields, issue a sequential registration ID, and append the finished
//! record to a pipe-delimited file.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rollcall::{FileStore, FormInput, LocalSequence, Registrar, Submission};
//!
//! let registrar = Registrar::new(LocalSequence::new(), FileStore::new("students.csv"));
//! match registrar.submit(&input, today) {
//!     Submission::Rejected(errors) => show_errors(errors.messages()),
//!     Submission::Registered { record, persisted } => show(record.line()),
//! }
//! ```
//!
//! The validator is usable on its own: [`check`] is pure and [`validate`]
//! only touches the sequence it is handed.

pub mod config;
pub mod form;
pub mod record;
pub mod registrar;
pub mod sequence;
pub mod store;
pub mod types;
pub mod validation;

// Re-export main types
pub use config::{Config, PolicyConfig, StoreConfig};
pub use form::{parse_month, Department, FormInput, Gender};
pub use record::{RegistrationId, StudentRecord};
pub use registrar::{Registrar, Submission};
pub use sequence::{AtomicSequence, LocalSequence, SequenceGenerator};
pub use store::{FileStore, MemoryStore, RecordStore, StoreError};
pub use types::{EmailAddress, PersonName};
pub use validation::{
    check, validate, Applicant, Policy, ValidationError, ValidationErrors, ValidationResult,
    Validator,
};

/// Store file used when nothing else is configured
pub const DEFAULT_STORE_PATH: &str = "students.csv";

/// Separator between fields of a stored record line
pub const FIELD_SEPARATOR: &str = " | ";
