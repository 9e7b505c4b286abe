use loma_types::ListingId;
use std::fmt;

/// Result type for loma-catalog operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the catalog layer
#[derive(Debug)]
pub enum Error {
    /// No listing with this id exists in the source
    NotFound(ListingId),

    /// Source could not answer right now; retrying may succeed
    Transient(String),

    /// Record failed listing validation
    Invalid(loma_types::Error),

    /// Two records in one catalog share an id
    DuplicateId(ListingId),

    /// Catalog file could not be decoded
    Parse(serde_json::Error),

    /// Collaborator is not wired up in this build
    Unavailable(String),

    /// IO operation failed
    Io(std::io::Error),

    /// Configuration error
    Config(String),
}

impl Error {
    /// Whether this error means "no such listing" rather than a failure
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotFound(id) => write!(f, "Listing {} does not exist", id),
            Error::Transient(msg) => write!(f, "Listing source unavailable: {}", msg),
            Error::Invalid(err) => write!(f, "{}", err),
            Error::DuplicateId(id) => write!(f, "Duplicate listing id {} in catalog", id),
            Error::Parse(err) => write!(f, "Catalog parse error: {}", err),
            Error::Unavailable(msg) => write!(f, "Unavailable: {}", msg),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Invalid(err) => Some(err),
            Error::Parse(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::NotFound(_)
            | Error::Transient(_)
            | Error::DuplicateId(_)
            | Error::Unavailable(_)
            | Error::Config(_) => None,
        }
    }
}

impl From<loma_types::Error> for Error {
    fn from(err: loma_types::Error) -> Self {
        Error::Invalid(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Parse(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
