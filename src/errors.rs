//! # Error Types Module
//!
//! Error types for the questionnaire. Input errors are recoverable and lead
//! to a re-prompt of the same question; measurement errors end the session.

use crate::measurement_types::Field;

/// Rejection of a single raw answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// Not a number, or not strictly positive
    InvalidNumber { field: Field },
    /// Not one of the gender aliases
    InvalidGender,
    /// Not one of the ten activity tokens
    InvalidActivity,
    /// Not one of the module tokens
    InvalidModule,
}

impl InputError {
    /// Catalog key of the corrective message shown to the user
    pub fn message_key(&self) -> &'static str {
        match self {
            InputError::InvalidNumber { field } => field.error_key(),
            InputError::InvalidGender => "error-gender",
            InputError::InvalidActivity => "error-activity",
            InputError::InvalidModule => "error-module",
        }
    }
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::InvalidNumber { field } => {
                write!(f, "Invalid number for {}", field.name())
            }
            InputError::InvalidGender => write!(f, "Invalid gender"),
            InputError::InvalidActivity => write!(f, "Invalid activity level"),
            InputError::InvalidModule => write!(f, "Invalid module choice"),
        }
    }
}

impl std::error::Error for InputError {}

/// Body-fat formula evaluated outside its domain
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeasurementError {
    /// A logarithm argument was zero or negative
    LogDomain { quantity: &'static str, value: f64 },
    /// The formula produced no finite value
    Undefined,
}

impl std::fmt::Display for MeasurementError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MeasurementError::LogDomain { quantity, value } => {
                write!(f, "Measurement error: {quantity} must be positive, got {value}")
            }
            MeasurementError::Undefined => {
                write!(f, "Measurement error: body-fat estimate is undefined")
            }
        }
    }
}

impl std::error::Error for MeasurementError {}

/// The final step was reached with an answer missing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IncompleteAnswers {
    pub field: &'static str,
}

impl std::fmt::Display for IncompleteAnswers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Questionnaire incomplete: missing {}", self.field)
    }
}

impl std::error::Error for IncompleteAnswers {}
