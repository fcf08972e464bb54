//! # Input Parser Module
//!
//! Turns raw chat answers into validated values. Decimal answers accept
//! either `.` or `,` as the fractional separator.

use crate::errors::InputError;
use crate::measurement_types::{ActivityLevel, Field, Gender, Module};

const MALE_ALIASES: [&str; 2] = ["м", "m"];
const FEMALE_ALIASES: [&str; 2] = ["ж", "f"];

/// Replace a decimal comma with a point
pub fn normalize_decimal(raw: &str) -> String {
    raw.trim().replace(',', ".")
}

/// Parse a strictly positive measurement (weight, height, neck, waist, hip)
///
/// # Examples
///
/// ```rust
/// use bodycomp_bot::input_parser::parse_measurement;
/// use bodycomp_bot::measurement_types::Field;
///
/// assert_eq!(parse_measurement(Field::Weight, "72,5"), Ok(72.5));
/// assert!(parse_measurement(Field::Weight, "0").is_err());
/// ```
pub fn parse_measurement(field: Field, raw: &str) -> Result<f64, InputError> {
    let value: f64 = normalize_decimal(raw)
        .parse()
        .map_err(|_| InputError::InvalidNumber { field })?;

    if !value.is_finite() || value <= 0.0 {
        return Err(InputError::InvalidNumber { field });
    }

    Ok(value)
}

/// Parse a positive whole number of years
pub fn parse_age(raw: &str) -> Result<u32, InputError> {
    match raw.trim().parse::<u32>() {
        Ok(age) if age > 0 => Ok(age),
        _ => Err(InputError::InvalidNumber { field: Field::Age }),
    }
}

/// Case-insensitive match against the Cyrillic and Latin gender letters
pub fn parse_gender(raw: &str) -> Result<Gender, InputError> {
    let input = raw.trim().to_lowercase();

    if MALE_ALIASES.contains(&input.as_str()) {
        Ok(Gender::Male)
    } else if FEMALE_ALIASES.contains(&input.as_str()) {
        Ok(Gender::Female)
    } else {
        Err(InputError::InvalidGender)
    }
}

/// Exact match against the ten activity tokens
pub fn parse_activity(raw: &str) -> Result<ActivityLevel, InputError> {
    ActivityLevel::from_token(raw).ok_or(InputError::InvalidActivity)
}

pub fn parse_module(raw: &str) -> Result<Module, InputError> {
    Module::from_token(raw.trim()).ok_or(InputError::InvalidModule)
}
