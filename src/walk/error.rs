//! Errors for misuse of the walk API.

use std::fmt;

/// A contract violation at the call site.
///
/// Data that is simply absent (nil pointers, missing fields, out-of-range
/// indices) never produces one of these; it produces no visit instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// The root is neither a record nor a pointer to one.
    InvalidRoot { found: &'static str },
    /// A leaf does not hold the type the caller asked for.
    TypeMismatch {
        path: String,
        expected: &'static str,
        found: &'static str,
    },
    /// The record exposes the leaf read-only.
    NotSettable { path: String },
}

impl fmt::Display for AccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessError::InvalidRoot { found } => {
                write!(f, "Invalid root {}, must be a record or a pointer to one", found)
            }
            AccessError::TypeMismatch {
                path,
                expected,
                found,
            } => write!(
                f,
                "Type mismatch at '{}': expected {}, found {}",
                path, expected, found
            ),
            AccessError::NotSettable { path } => {
                write!(f, "Field at '{}' is not settable", path)
            }
        }
    }
}

impl std::error::Error for AccessError {}
