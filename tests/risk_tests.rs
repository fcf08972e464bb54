//! # Risk Tests
//!
//! Table-driven tests for the tier boundaries and the text keys they select.

use bodycomp_bot::measurement_types::{ActivityLevel, Gender};
use bodycomp_bot::metrics::Metric;
use bodycomp_bot::risk::{assess, ActivityBand, BmiTier, BodyFatTier, Tier};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi_tier_boundaries() {
        let cases = [
            (15.0, BmiTier::Underweight),
            (18.49, BmiTier::Underweight),
            (18.5, BmiTier::Normal),
            (22.0, BmiTier::Normal),
            (24.9, BmiTier::Normal),
            (25.0, BmiTier::Overweight),
            (29.9, BmiTier::Overweight),
            (30.0, BmiTier::Obese),
            (41.2, BmiTier::Obese),
        ];

        for (bmi, expected) in cases {
            assert_eq!(BmiTier::from_bmi(bmi), expected, "bmi = {bmi}");
        }
    }

    #[test]
    fn test_male_body_fat_tiers() {
        let cases = [
            (5.99, BodyFatTier::TooLow),
            (6.0, BodyFatTier::LowNormal),
            (9.99, BodyFatTier::LowNormal),
            (10.0, BodyFatTier::Normal),
            (24.0, BodyFatTier::Normal),
            (24.01, BodyFatTier::High),
        ];

        for (percent, expected) in cases {
            assert_eq!(
                BodyFatTier::from_percentage(percent, Gender::Male),
                expected,
                "percent = {percent}"
            );
        }
    }

    #[test]
    fn test_female_body_fat_tiers() {
        let cases = [
            (13.99, BodyFatTier::TooLow),
            (14.0, BodyFatTier::LowNormal),
            (19.99, BodyFatTier::LowNormal),
            (20.0, BodyFatTier::Normal),
            (31.0, BodyFatTier::Normal),
            (31.01, BodyFatTier::High),
        ];

        for (percent, expected) in cases {
            assert_eq!(
                BodyFatTier::from_percentage(percent, Gender::Female),
                expected,
                "percent = {percent}"
            );
        }
    }

    #[test]
    fn test_activity_band_ties_go_to_lower_band() {
        let expected = [
            ActivityBand::Sedentary,
            ActivityBand::Sedentary,
            ActivityBand::Sedentary,
            ActivityBand::Moderate,
            ActivityBand::Moderate,
            ActivityBand::Moderate,
            ActivityBand::Moderate,
            ActivityBand::Active,
            ActivityBand::Active,
            ActivityBand::Active,
        ];

        for (level, band) in ActivityLevel::ALL.into_iter().zip(expected) {
            assert_eq!(
                ActivityBand::from_coefficient(level.coefficient()),
                band,
                "level = {level:?}"
            );
        }
    }

    #[test]
    fn test_assess_bmi_selects_tier_texts() {
        let assessment = assess(&Metric::Bmi(27.3), ActivityLevel::OfficeNoBreaks);

        assert_eq!(assessment.tier, Tier::Bmi(BmiTier::Overweight));
        assert_eq!(assessment.risk, "bmi-overweight-risk");
        assert_eq!(assessment.diet, "bmi-overweight-diet");
        assert_eq!(assessment.activity, "bmi-overweight-activity");
        assert_eq!(assessment.caution, None);
        assert_eq!(assessment.addendum, "addendum-sedentary");
    }

    #[test]
    fn test_assess_body_fat_female_low_normal() {
        let metric = Metric::BodyFat {
            percent: 18.2,
            gender: Gender::Female,
        };
        let assessment = assess(&metric, ActivityLevel::ProfessionalSport);

        assert_eq!(assessment.tier, Tier::BodyFat(BodyFatTier::LowNormal));
        assert_eq!(assessment.risk, "bf-normal-risk");
        assert_eq!(assessment.caution, Some("bf-caution-female"));
        assert_eq!(assessment.band, ActivityBand::Active);
        assert_eq!(assessment.addendum, "addendum-active");
    }

    #[test]
    fn test_assess_body_fat_high_and_too_low() {
        let high = assess(
            &Metric::BodyFat {
                percent: 28.0,
                gender: Gender::Male,
            },
            ActivityLevel::WalkingJob,
        );
        assert_eq!(high.tier, Tier::BodyFat(BodyFatTier::High));
        assert_eq!(high.risk, "bf-high-risk");
        assert_eq!(high.caution, None);

        let too_low = assess(
            &Metric::BodyFat {
                percent: 12.0,
                gender: Gender::Female,
            },
            ActivityLevel::WalkingJob,
        );
        assert_eq!(too_low.tier, Tier::BodyFat(BodyFatTier::TooLow));
        assert_eq!(too_low.diet, "bf-low-diet");
        assert_eq!(too_low.caution, None);
    }
}
