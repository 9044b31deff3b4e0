//! Rollcall Validation Core
//!
//! Pure predicates over raw form values. Nothing in here keeps state or
//! touches the filesystem; the `rollcall` crate composes these into the
//! registration rules and decides which message each failure produces.

pub mod age;
pub mod email;
pub mod password;
pub mod string;

// Re-export all validators
pub use age::*;
pub use email::*;
pub use password::*;
pub use string::*;
