//! Typed access to environment variables with default-value fallback,
//! following the flag package pattern of letting the caller name the
//! default up front.
//!
//! Every getter resolves to a value, never an error: an unset variable, an
//! empty value or a failed conversion all yield the caller-supplied
//! default. Custom target types plug in through the [`Converter`] trait.

pub mod converter;
pub mod error;

pub use converter::{BoolConverter, Converter, FloatConverter, IntConverter, ParseConverter};
pub use error::ConvertError;

use std::env;
use std::fmt::Display;
use std::str::FromStr;

/// Resolves the variable `key` to a typed value through `converter`.
///
/// If the variable is unset, empty or not valid unicode, the converter's
/// default is returned without invoking conversion. If conversion fails,
/// the failure is logged at debug level and the default is returned. This
/// getter cannot fail; it can only hand back a less precise value than the
/// caller asked for.
pub fn get<C: Converter>(key: &str, converter: C) -> C::Output {
    let raw = match env::var(key) {
        Ok(value) if !value.is_empty() => value,
        // unset, empty and non-unicode all resolve to the default
        _ => return converter.default_value(),
    };

    match converter.convert(&raw) {
        Ok(value) => value,
        Err(err) => {
            log::debug!("{}: falling back to default, {}", key, err);
            converter.default_value()
        }
    }
}

/// Returns the raw value of `key`, or `default` when unset or empty.
pub fn get_string(key: &str, default: &str) -> String {
    match env::var(key) {
        Ok(value) if !value.is_empty() => value,
        _ => default.to_string(),
    }
}

/// Returns the value of `key` parsed as a base-10 `i64`, or `default`
/// when unset, empty or not a valid integer.
pub fn get_int(key: &str, default: i64) -> i64 {
    get(key, IntConverter { default })
}

/// Returns the value of `key` parsed as a `bool`, or `default` when unset,
/// empty or outside the accepted literal set.
///
/// Accepts `1`, `t`, `T`, `TRUE`, `true`, `True` as true and `0`, `f`,
/// `F`, `FALSE`, `false`, `False` as false.
pub fn get_bool(key: &str, default: bool) -> bool {
    get(key, BoolConverter { default })
}

/// Returns the value of `key` parsed as an `f64`, or `default` when unset,
/// empty or not a valid float.
pub fn get_float(key: &str, default: f64) -> f64 {
    get(key, FloatConverter { default })
}

/// Returns the value of `key` parsed through `T`'s `FromStr`, or `default`
/// when unset, empty or rejected by the parse.
pub fn get_parsed<T>(key: &str, default: T) -> T
where
    T: FromStr + Clone,
    T::Err: Display,
{
    get(key, ParseConverter { default })
}
