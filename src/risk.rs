//! # Risk Module
//!
//! Maps a computed metric and the chosen activity level to risk tiers and
//! to the catalog keys of the matching risk statement and recommendations.
//! Every table is a chain of inclusive upper bounds, so a value sitting on
//! a boundary belongs to the lower tier.

use crate::measurement_types::{ActivityLevel, Gender};
use crate::metrics::Metric;

pub const BMI_UNDERWEIGHT_BELOW: f64 = 18.5;
pub const BMI_NORMAL_MAX: f64 = 24.9;
pub const BMI_OVERWEIGHT_MAX: f64 = 29.9;

pub const ACTIVITY_SEDENTARY_MAX: f64 = 1.30;
pub const ACTIVITY_MODERATE_MAX: f64 = 1.50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiTier {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiTier {
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < BMI_UNDERWEIGHT_BELOW {
            BmiTier::Underweight
        } else if bmi <= BMI_NORMAL_MAX {
            BmiTier::Normal
        } else if bmi <= BMI_OVERWEIGHT_MAX {
            BmiTier::Overweight
        } else {
            BmiTier::Obese
        }
    }

    fn advice(self) -> (&'static str, &'static str, &'static str) {
        match self {
            BmiTier::Underweight => (
                "bmi-underweight-risk",
                "bmi-underweight-diet",
                "bmi-underweight-activity",
            ),
            BmiTier::Normal => ("bmi-normal-risk", "bmi-normal-diet", "bmi-normal-activity"),
            BmiTier::Overweight => (
                "bmi-overweight-risk",
                "bmi-overweight-diet",
                "bmi-overweight-activity",
            ),
            BmiTier::Obese => ("bmi-obese-risk", "bmi-obese-diet", "bmi-obese-activity"),
        }
    }
}

/// Gender-specific body-fat bounds, in percent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyFatThresholds {
    /// Below this the level is too low
    pub too_low_below: f64,
    /// Inside the normal range, below this the hormonal caution applies
    pub low_normal_below: f64,
    /// Upper inclusive bound of the normal range
    pub normal_max: f64,
}

pub const MALE_BODY_FAT: BodyFatThresholds = BodyFatThresholds {
    too_low_below: 6.0,
    low_normal_below: 10.0,
    normal_max: 24.0,
};

pub const FEMALE_BODY_FAT: BodyFatThresholds = BodyFatThresholds {
    too_low_below: 14.0,
    low_normal_below: 20.0,
    normal_max: 31.0,
};

impl BodyFatThresholds {
    pub fn for_gender(gender: Gender) -> Self {
        match gender {
            Gender::Male => MALE_BODY_FAT,
            Gender::Female => FEMALE_BODY_FAT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyFatTier {
    TooLow,
    /// Normal, but low enough to warrant the hormonal caution
    LowNormal,
    Normal,
    High,
}

impl BodyFatTier {
    pub fn from_percentage(percent: f64, gender: Gender) -> Self {
        let thresholds = BodyFatThresholds::for_gender(gender);

        if percent < thresholds.too_low_below {
            BodyFatTier::TooLow
        } else if percent <= thresholds.normal_max {
            if percent < thresholds.low_normal_below {
                BodyFatTier::LowNormal
            } else {
                BodyFatTier::Normal
            }
        } else {
            BodyFatTier::High
        }
    }
}

/// Which sedentary-mitigation addendum follows the recommendations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityBand {
    Sedentary,
    Moderate,
    Active,
}

impl ActivityBand {
    pub fn from_coefficient(coefficient: f64) -> Self {
        if coefficient <= ACTIVITY_SEDENTARY_MAX {
            ActivityBand::Sedentary
        } else if coefficient <= ACTIVITY_MODERATE_MAX {
            ActivityBand::Moderate
        } else {
            ActivityBand::Active
        }
    }

    pub fn addendum_key(self) -> &'static str {
        match self {
            ActivityBand::Sedentary => "addendum-sedentary",
            ActivityBand::Moderate => "addendum-moderate",
            ActivityBand::Active => "addendum-active",
        }
    }
}

/// Resolved tier of a metric
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Bmi(BmiTier),
    BodyFat(BodyFatTier),
}

/// Catalog keys for every text part of the final report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assessment {
    pub tier: Tier,
    pub risk: &'static str,
    pub diet: &'static str,
    pub activity: &'static str,
    /// Low-normal body-fat hormonal caution
    pub caution: Option<&'static str>,
    pub band: ActivityBand,
    pub addendum: &'static str,
}

pub fn assess(metric: &Metric, activity: ActivityLevel) -> Assessment {
    let band = ActivityBand::from_coefficient(activity.coefficient());

    let (tier, (risk, diet, movement), caution) = match *metric {
        Metric::Bmi(bmi) => {
            let tier = BmiTier::from_bmi(bmi);
            (Tier::Bmi(tier), tier.advice(), None)
        }
        Metric::BodyFat { percent, gender } => {
            let tier = BodyFatTier::from_percentage(percent, gender);
            (Tier::BodyFat(tier), body_fat_advice(tier), body_fat_caution(tier, gender))
        }
    };

    Assessment {
        tier,
        risk,
        diet,
        activity: movement,
        caution,
        band,
        addendum: band.addendum_key(),
    }
}

fn body_fat_advice(tier: BodyFatTier) -> (&'static str, &'static str, &'static str) {
    match tier {
        BodyFatTier::TooLow => ("bf-low-risk", "bf-low-diet", "bf-low-activity"),
        BodyFatTier::LowNormal | BodyFatTier::Normal => {
            ("bf-normal-risk", "bf-normal-diet", "bf-normal-activity")
        }
        BodyFatTier::High => ("bf-high-risk", "bf-high-diet", "bf-high-activity"),
    }
}

fn body_fat_caution(tier: BodyFatTier, gender: Gender) -> Option<&'static str> {
    match (tier, gender) {
        (BodyFatTier::LowNormal, Gender::Male) => Some("bf-caution-male"),
        (BodyFatTier::LowNormal, Gender::Female) => Some("bf-caution-female"),
        _ => None,
    }
}
