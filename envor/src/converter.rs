use std::fmt::Display;
use std::str::FromStr;

use crate::error::ConvertError;

/// A Converter turns a raw environment variable value into a typed one.
///
/// Converters are stateless value objects built per call with an embedded
/// default. Implement this trait to feed custom types through
/// [`crate::get`]; `IntConverter` and `BoolConverter` show the shape.
///
/// The default value is returned as-is whenever the variable is missing,
/// empty or rejected by `convert`. It is never validated itself.
pub trait Converter {
    type Output;

    /// The value to fall back to when the lookup or conversion fails.
    fn default_value(&self) -> Self::Output;

    /// Attempt to parse the raw value into the target type.
    fn convert(&self, raw: &str) -> Result<Self::Output, ConvertError>;
}

/// Converts the raw value to an `i64`, base 10.
pub struct IntConverter {
    pub default: i64,
}

impl Converter for IntConverter {
    type Output = i64;

    fn default_value(&self) -> i64 {
        self.default
    }

    fn convert(&self, raw: &str) -> Result<i64, ConvertError> {
        raw.parse::<i64>().map_err(ConvertError::InvalidInt)
    }
}

/// Converts the raw value to a `bool`.
///
/// Accepts `1`, `t`, `T`, `TRUE`, `true`, `True` as true and `0`, `f`,
/// `F`, `FALSE`, `false`, `False` as false. Any other value is rejected.
pub struct BoolConverter {
    pub default: bool,
}

impl Converter for BoolConverter {
    type Output = bool;

    fn default_value(&self) -> bool {
        self.default
    }

    fn convert(&self, raw: &str) -> Result<bool, ConvertError> {
        match raw {
            "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
            "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
            other => Err(ConvertError::InvalidBool(other.to_string())),
        }
    }
}

/// Converts the raw value to an `f64`.
pub struct FloatConverter {
    pub default: f64,
}

impl Converter for FloatConverter {
    type Output = f64;

    fn default_value(&self) -> f64 {
        self.default
    }

    fn convert(&self, raw: &str) -> Result<f64, ConvertError> {
        raw.parse::<f64>().map_err(ConvertError::InvalidFloat)
    }
}

/// Bridges any `FromStr` type into a converter.
///
/// Covers the common case where the target type already knows how to parse
/// itself, without writing a dedicated converter for it.
pub struct ParseConverter<T> {
    pub default: T,
}

impl<T> Converter for ParseConverter<T>
where
    T: FromStr + Clone,
    T::Err: Display,
{
    type Output = T;

    fn default_value(&self) -> T {
        self.default.clone()
    }

    fn convert(&self, raw: &str) -> Result<T, ConvertError> {
        raw.parse::<T>()
            .map_err(|err| ConvertError::Invalid(err.to_string()))
    }
}
