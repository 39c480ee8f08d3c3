//! Error types for the filing data model.

use std::fmt;

/// Errors raised while constructing a [`FilingForm`](crate::FilingForm).
///
/// The mapper itself is total over any well-formed filing object; the only
/// failure mode at this layer is a payload that is not a JSON object at
/// the top level.
#[derive(Debug, Clone, PartialEq)]
pub enum FilingError {
    /// The filing payload was not a JSON object.
    InvalidInput(String),
}

impl fmt::Display for FilingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilingError::InvalidInput(msg) => write!(f, "invalid filing input: {msg}"),
        }
    }
}

impl std::error::Error for FilingError {}
