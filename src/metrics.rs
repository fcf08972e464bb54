//! # Metrics Module
//!
//! Pure body-composition calculations: Body Mass Index and the U.S. Navy
//! circumference estimate of body-fat percentage. Results are rounded to
//! two decimal places.

use crate::errors::MeasurementError;
use crate::measurement_types::{Gender, Girths, Questionnaire};

/// Coefficients of the Navy formula
/// `495 / (intercept - girth * log10(g) + height * log10(h)) - 450`
#[derive(Debug, Clone, Copy)]
struct NavyCoefficients {
    intercept: f64,
    girth: f64,
    height: f64,
}

const NAVY_MALE: NavyCoefficients = NavyCoefficients {
    intercept: 1.0324,
    girth: 0.19077,
    height: 0.15456,
};

const NAVY_FEMALE: NavyCoefficients = NavyCoefficients {
    intercept: 1.29579,
    girth: 0.35004,
    height: 0.221,
};

/// A computed metric
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Metric {
    Bmi(f64),
    BodyFat { percent: f64, gender: Gender },
}

impl Metric {
    pub fn value(&self) -> f64 {
        match self {
            Metric::Bmi(value) => *value,
            Metric::BodyFat { percent, .. } => *percent,
        }
    }
}

/// Round half away from zero to two decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Body Mass Index from weight in kilograms and height in centimetres
///
/// # Examples
///
/// ```rust
/// use bodycomp_bot::metrics::bmi;
///
/// assert_eq!(bmi(80.0, 180.0), 24.69);
/// ```
pub fn bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    round2(weight_kg / (height_m * height_m))
}

/// Navy-method body-fat percentage
///
/// The girth term is `waist - neck` for men and `waist + hip - neck` for
/// women. Fails when a logarithm argument is not strictly positive.
pub fn body_fat_percentage(height_cm: f64, girths: &Girths) -> Result<f64, MeasurementError> {
    let (coefficients, girth, quantity) = match *girths {
        Girths::Male { neck_cm, waist_cm } => (NAVY_MALE, waist_cm - neck_cm, "waist - neck"),
        Girths::Female {
            neck_cm,
            waist_cm,
            hip_cm,
        } => (
            NAVY_FEMALE,
            waist_cm + hip_cm - neck_cm,
            "waist + hip - neck",
        ),
    };

    let girth_log = checked_log10(girth, quantity)?;
    let height_log = checked_log10(height_cm, "height")?;

    let density = coefficients.intercept - coefficients.girth * girth_log
        + coefficients.height * height_log;
    let percent = 495.0 / density - 450.0;

    if !percent.is_finite() {
        return Err(MeasurementError::Undefined);
    }

    Ok(round2(percent))
}

fn checked_log10(value: f64, quantity: &'static str) -> Result<f64, MeasurementError> {
    if value > 0.0 {
        Ok(value.log10())
    } else {
        Err(MeasurementError::LogDomain { quantity, value })
    }
}

/// Compute the metric the questionnaire asked for
pub fn evaluate(questionnaire: &Questionnaire) -> Result<Metric, MeasurementError> {
    match questionnaire {
        Questionnaire::Bmi {
            weight_kg,
            height_cm,
            ..
        } => {
            let value = bmi(*weight_kg, *height_cm);
            if !value.is_finite() {
                return Err(MeasurementError::Undefined);
            }
            Ok(Metric::Bmi(value))
        }
        Questionnaire::BodyFat {
            height_cm, girths, ..
        } => Ok(Metric::BodyFat {
            percent: body_fat_percentage(*height_cm, girths)?,
            gender: girths.gender(),
        }),
    }
}
