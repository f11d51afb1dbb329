use std::fmt::Display;
use std::num::{ParseFloatError, ParseIntError};

/// Error produced when a converter rejects a raw environment value.
///
/// Getters resolve this error locally by substituting the converter's
/// default, so it never crosses the public getter boundary. It exists so
/// converter failure stays explicit and testable on its own.
#[derive(Debug)]
pub enum ConvertError {
    InvalidInt(ParseIntError),
    InvalidFloat(ParseFloatError),
    InvalidBool(String),
    Invalid(String),
}

impl Display for ConvertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConvertError::InvalidInt(err) => write!(f, "Invalid integer: {}", err),
            ConvertError::InvalidFloat(err) => write!(f, "Invalid float: {}", err),
            ConvertError::InvalidBool(raw) => write!(f, "Invalid boolean: {:?}", raw),
            ConvertError::Invalid(err) => write!(f, "Invalid value: {}", err),
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConvertError::InvalidInt(err) => Some(err),
            ConvertError::InvalidFloat(err) => Some(err),
            ConvertError::InvalidBool(_) => None,
            ConvertError::Invalid(_) => None,
        }
    }
}
