//! Error types for ID lookup and table verification.

use std::fmt;

use crate::types::{AkUniqueID, Category};

/// Errors produced by registry lookups and table verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdError {
    /// No entry with this name exists in the category.
    UnknownName { category: Category, name: String },
    /// No entry with this ID exists in the category.
    UnknownId { category: Category, id: AkUniqueID },
    /// A table entry's value does not match the hash of its name.
    HashMismatch {
        name: &'static str,
        expected: AkUniqueID,
        actual: AkUniqueID,
    },
    /// The same name appears twice with different values.
    ConflictingValue {
        name: &'static str,
        first: AkUniqueID,
        second: AkUniqueID,
    },
}

impl fmt::Display for IdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownName { category, name } => {
                write!(f, "no {} named {:?} in the generated table", category, name)
            }
            Self::UnknownId { category, id } => {
                write!(f, "no {} with ID {} in the generated table", category, id)
            }
            Self::HashMismatch { name, expected, actual } => write!(
                f,
                "entry {:?} has value {} but its name hashes to {}",
                name, actual, expected
            ),
            Self::ConflictingValue { name, first, second } => write!(
                f,
                "name {:?} appears with conflicting values {} and {}",
                name, first, second
            ),
        }
    }
}

impl std::error::Error for IdError {}

/// Result type for registry operations.
pub type IdResult<T> = Result<T, IdError>;
