//! # Measurement Types Module
//!
//! This module defines the core value types collected by the questionnaire
//! and consumed by the metric calculator.

use serde::{Deserialize, Serialize};

/// Which metric the user asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Module {
    Bmi,
    BodyFat,
}

impl Module {
    pub const ALL: [Module; 2] = [Module::Bmi, Module::BodyFat];

    /// Callback token carried by the module keyboard
    pub fn token(self) -> &'static str {
        match self {
            Module::Bmi => "BMI",
            Module::BodyFat => "BF",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|module| module.token() == token)
    }

    pub fn label_key(self) -> &'static str {
        match self {
            Module::Bmi => "module-bmi-button",
            Module::BodyFat => "module-body-fat-button",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

/// Daily activity level, one of ten fixed coefficients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityLevel {
    OfficeNoBreaks,
    OfficeRareBreaks,
    OfficeRegularWalks,
    OfficeLightTraining,
    OfficeRegularTraining,
    WalkingJob,
    MovingJobPeriodicTraining,
    PhysicalJobLightTraining,
    ActiveJobIntenseTraining,
    ProfessionalSport,
}

impl ActivityLevel {
    /// All levels in keyboard order
    pub const ALL: [ActivityLevel; 10] = [
        ActivityLevel::OfficeNoBreaks,
        ActivityLevel::OfficeRareBreaks,
        ActivityLevel::OfficeRegularWalks,
        ActivityLevel::OfficeLightTraining,
        ActivityLevel::OfficeRegularTraining,
        ActivityLevel::WalkingJob,
        ActivityLevel::MovingJobPeriodicTraining,
        ActivityLevel::PhysicalJobLightTraining,
        ActivityLevel::ActiveJobIntenseTraining,
        ActivityLevel::ProfessionalSport,
    ];

    pub fn coefficient(self) -> f64 {
        match self {
            ActivityLevel::OfficeNoBreaks => 1.20,
            ActivityLevel::OfficeRareBreaks => 1.25,
            ActivityLevel::OfficeRegularWalks => 1.30,
            ActivityLevel::OfficeLightTraining => 1.35,
            ActivityLevel::OfficeRegularTraining => 1.40,
            ActivityLevel::WalkingJob => 1.45,
            ActivityLevel::MovingJobPeriodicTraining => 1.50,
            ActivityLevel::PhysicalJobLightTraining => 1.60,
            ActivityLevel::ActiveJobIntenseTraining => 1.70,
            ActivityLevel::ProfessionalSport => 1.80,
        }
    }

    /// Callback token, the coefficient written with two decimals
    pub fn token(self) -> &'static str {
        match self {
            ActivityLevel::OfficeNoBreaks => "1.20",
            ActivityLevel::OfficeRareBreaks => "1.25",
            ActivityLevel::OfficeRegularWalks => "1.30",
            ActivityLevel::OfficeLightTraining => "1.35",
            ActivityLevel::OfficeRegularTraining => "1.40",
            ActivityLevel::WalkingJob => "1.45",
            ActivityLevel::MovingJobPeriodicTraining => "1.50",
            ActivityLevel::PhysicalJobLightTraining => "1.60",
            ActivityLevel::ActiveJobIntenseTraining => "1.70",
            ActivityLevel::ProfessionalSport => "1.80",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.token() == token)
    }

    pub fn label_key(self) -> &'static str {
        match self {
            ActivityLevel::OfficeNoBreaks => "activity-120",
            ActivityLevel::OfficeRareBreaks => "activity-125",
            ActivityLevel::OfficeRegularWalks => "activity-130",
            ActivityLevel::OfficeLightTraining => "activity-135",
            ActivityLevel::OfficeRegularTraining => "activity-140",
            ActivityLevel::WalkingJob => "activity-145",
            ActivityLevel::MovingJobPeriodicTraining => "activity-150",
            ActivityLevel::PhysicalJobLightTraining => "activity-160",
            ActivityLevel::ActiveJobIntenseTraining => "activity-170",
            ActivityLevel::ProfessionalSport => "activity-180",
        }
    }
}

/// Numeric questionnaire fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Field {
    Weight,
    Height,
    Age,
    Neck,
    Waist,
    Hip,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Field::Weight => "weight",
            Field::Height => "height",
            Field::Age => "age",
            Field::Neck => "neck",
            Field::Waist => "waist",
            Field::Hip => "hip",
        }
    }

    pub fn error_key(self) -> &'static str {
        match self {
            Field::Weight => "error-weight",
            Field::Height => "error-height",
            Field::Age => "error-age",
            Field::Neck => "error-neck",
            Field::Waist => "error-waist",
            Field::Hip => "error-hip",
        }
    }
}

/// Circumferences used by the Navy formula, in centimetres
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Girths {
    Male { neck_cm: f64, waist_cm: f64 },
    Female { neck_cm: f64, waist_cm: f64, hip_cm: f64 },
}

impl Girths {
    pub fn gender(&self) -> Gender {
        match self {
            Girths::Male { .. } => Gender::Male,
            Girths::Female { .. } => Gender::Female,
        }
    }
}

/// A fully answered questionnaire, ready for computation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Questionnaire {
    Bmi {
        weight_kg: f64,
        height_cm: f64,
        age: u32,
        activity: ActivityLevel,
    },
    BodyFat {
        weight_kg: f64,
        height_cm: f64,
        age: u32,
        girths: Girths,
        activity: ActivityLevel,
    },
}

impl Questionnaire {
    pub fn module(&self) -> Module {
        match self {
            Questionnaire::Bmi { .. } => Module::Bmi,
            Questionnaire::BodyFat { .. } => Module::BodyFat,
        }
    }

    pub fn activity(&self) -> ActivityLevel {
        match self {
            Questionnaire::Bmi { activity, .. } | Questionnaire::BodyFat { activity, .. } => *activity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_tokens_cover_all_coefficients() {
        let coefficients: Vec<f64> = ActivityLevel::ALL.iter().map(|l| l.coefficient()).collect();
        assert_eq!(
            coefficients,
            vec![1.20, 1.25, 1.30, 1.35, 1.40, 1.45, 1.50, 1.60, 1.70, 1.80]
        );

        for level in ActivityLevel::ALL {
            let parsed: f64 = level.token().parse().unwrap();
            assert_eq!(parsed, level.coefficient());
            assert_eq!(ActivityLevel::from_token(level.token()), Some(level));
        }
    }

    #[test]
    fn test_module_tokens() {
        assert_eq!(Module::from_token("BMI"), Some(Module::Bmi));
        assert_eq!(Module::from_token("BF"), Some(Module::BodyFat));
        assert_eq!(Module::from_token("bmi"), None);
    }
}
