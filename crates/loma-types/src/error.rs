use std::fmt;

use crate::domain::ListingId;
use crate::validate::Violation;

/// Result type for loma-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Record shape is impossible (e.g. both an item and a lodging)
    Malformed(String),

    /// Record is well-formed but breaks a listing invariant
    InvalidRecord {
        id: ListingId,
        violations: Vec<Violation>,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Malformed(msg) => write!(f, "Malformed listing record: {}", msg),
            Error::InvalidRecord { id, violations } => {
                write!(f, "Invalid listing {}: ", id)?;
                for (i, violation) in violations.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{}", violation)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for Error {}
