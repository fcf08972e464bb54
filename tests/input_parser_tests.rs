use bodycomp_bot::errors::InputError;
use bodycomp_bot::input_parser::{parse_activity, parse_age, parse_gender, parse_measurement, parse_module};
use bodycomp_bot::measurement_types::{ActivityLevel, Field, Gender, Module};

const MEASUREMENT_FIELDS: [Field; 5] = [Field::Weight, Field::Height, Field::Neck, Field::Waist, Field::Hip];

#[test]
fn test_decimal_comma_and_point_agree() {
    for field in MEASUREMENT_FIELDS {
        assert_eq!(parse_measurement(field, "72,5"), Ok(72.5));
        assert_eq!(parse_measurement(field, "72.5"), Ok(72.5));
        assert_eq!(parse_measurement(field, " 72.5\n"), Ok(72.5));
    }
}

#[test]
fn test_invalid_measurements_name_their_field() {
    for field in MEASUREMENT_FIELDS {
        for raw in ["0", "-5", "abc", "", "0,0", "1,2,3"] {
            assert_eq!(
                parse_measurement(field, raw),
                Err(InputError::InvalidNumber { field }),
                "field = {field:?}, raw = {raw:?}"
            );
        }
    }
}

#[test]
fn test_age_must_be_positive_integer() {
    assert_eq!(parse_age("35"), Ok(35));
    assert_eq!(parse_age(" 7 "), Ok(7));

    for raw in ["0", "-3", "30.5", "thirty", ""] {
        assert_eq!(
            parse_age(raw),
            Err(InputError::InvalidNumber { field: Field::Age }),
            "raw = {raw:?}"
        );
    }
}

#[test]
fn test_gender_aliases_both_alphabets() {
    for raw in ["м", "М", "m", "M", " m "] {
        assert_eq!(parse_gender(raw), Ok(Gender::Male), "raw = {raw:?}");
    }
    for raw in ["ж", "Ж", "f", "F"] {
        assert_eq!(parse_gender(raw), Ok(Gender::Female), "raw = {raw:?}");
    }
    for raw in ["male", "w", "", "мж"] {
        assert_eq!(parse_gender(raw), Err(InputError::InvalidGender), "raw = {raw:?}");
    }
}

#[test]
fn test_activity_requires_exact_token() {
    assert_eq!(parse_activity("1.20"), Ok(ActivityLevel::OfficeNoBreaks));
    assert_eq!(parse_activity("1.80"), Ok(ActivityLevel::ProfessionalSport));

    for raw in ["1.2", "1,20", "1.55", "2.00", "1.20 ", "active"] {
        assert_eq!(parse_activity(raw), Err(InputError::InvalidActivity), "raw = {raw:?}");
    }
}

#[test]
fn test_module_tokens() {
    assert_eq!(parse_module("BMI"), Ok(Module::Bmi));
    assert_eq!(parse_module("BF"), Ok(Module::BodyFat));
    assert_eq!(parse_module("body fat"), Err(InputError::InvalidModule));
}
