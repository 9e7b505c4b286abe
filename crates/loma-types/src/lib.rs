pub mod attributes;
pub mod domain;
pub mod error;
pub mod validate;

pub use attributes::{AttributeValue, Attributes};
pub use domain::*;
pub use error::{Error, Result};
pub use validate::{Violation, validate_record, violations};
