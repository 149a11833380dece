// Field validation: raw text in, well-formed Record out

use crate::error::ValidationError;
use crate::record::{RawFields, Record};
use chrono::NaiveDate;

/// The one date format accepted anywhere in the journal
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validate and normalize raw fields into a [`Record`]
///
/// Fields are checked in order date, exercise, weight, reps and the first
/// failure is returned. Surrounding whitespace is ignored on every field and
/// stripped from the stored exercise name.
pub fn validate(fields: &RawFields<'_>) -> Result<Record, ValidationError> {
    let date = parse_date(fields.date)?;
    let exercise = parse_exercise(fields.exercise)?;
    let weight = parse_weight(fields.weight)?;
    let reps = parse_reps(fields.reps)?;

    Ok(Record::from_parts(date, exercise, weight, reps))
}

pub fn parse_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    let raw = raw.trim();
    // chrono also takes signed years and space-padded fields; only exact YYYY-MM-DD survives a save
    if !is_iso_date_shape(raw) {
        return Err(ValidationError::InvalidDate(raw.to_string()));
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| ValidationError::InvalidDate(raw.to_string()))
}

fn is_iso_date_shape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

fn parse_exercise(raw: &str) -> Result<String, ValidationError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyExercise);
    }
    Ok(name.to_string())
}

fn parse_weight(raw: &str) -> Result<f64, ValidationError> {
    let raw = raw.trim();
    let weight: f64 = raw
        .parse()
        .map_err(|_| ValidationError::InvalidWeight(raw.to_string()))?;

    // "inf" and "NaN" parse as f64 but are not weights
    if !weight.is_finite() {
        return Err(ValidationError::InvalidWeight(raw.to_string()));
    }
    if weight < 0.0 {
        return Err(ValidationError::NegativeWeight(weight));
    }

    // Normalize -0.0
    Ok(weight + 0.0)
}

fn parse_reps(raw: &str) -> Result<u32, ValidationError> {
    let raw = raw.trim();
    let reps: i64 = raw.parse().map_err(|_| ValidationError::InvalidReps(raw.to_string()))?;

    if reps <= 0 {
        return Err(ValidationError::NonPositiveReps(reps));
    }
    u32::try_from(reps).map_err(|_| ValidationError::InvalidReps(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{arb_date, arb_fields, validated};
    use proptest::prelude::*;

    fn fields<'a>(date: &'a str, exercise: &'a str, weight: &'a str, reps: &'a str) -> RawFields<'a> {
        RawFields::new(date, exercise, weight, reps)
    }

    #[test]
    fn test_validate_ok() {
        let record = validate(&fields("2024-01-03", "  Bench Press ", "62.5", "5")).unwrap();
        assert_eq!(record.date(), NaiveDate::from_ymd_opt(2024, 1, 3).unwrap());
        assert_eq!(record.exercise(), "Bench Press");
        assert_eq!(record.weight(), 62.5);
        assert_eq!(record.reps(), 5);
    }

    #[test]
    fn test_validate_zero_weight_allowed() {
        let record = validate(&fields("2024-01-03", "Pull-up", "0", "10")).unwrap();
        assert_eq!(record.weight(), 0.0);
        assert!(record.weight().is_sign_positive());

        let record = validate(&fields("2024-01-03", "Pull-up", "-0", "10")).unwrap();
        assert!(record.weight().is_sign_positive());
    }

    #[test]
    fn test_invalid_date() {
        for bad in [
            "",
            "2024/01/01",
            "01-01-2024",
            "2024-1-1",
            "2024-02-30",
            "2024-01-01 10:00:00",
            "yesterday",
            "+2024-1-01",
            "-2024-1-01",
            "2024- 1-01",
            "2024-01- 1",
            "２０２４-01-01",
        ] {
            assert_eq!(
                validate(&fields(bad, "Squat", "80", "5")),
                Err(ValidationError::InvalidDate(bad.trim().to_string())),
                "date {bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_empty_exercise() {
        assert_eq!(
            validate(&fields("2024-01-01", "   ", "80", "5")),
            Err(ValidationError::EmptyExercise)
        );
    }

    #[test]
    fn test_weight_errors() {
        assert_eq!(
            validate(&fields("2024-01-01", "Squat", "heavy", "5")),
            Err(ValidationError::InvalidWeight("heavy".to_string()))
        );
        assert_eq!(
            validate(&fields("2024-01-01", "Squat", "inf", "5")),
            Err(ValidationError::InvalidWeight("inf".to_string()))
        );
        assert_eq!(
            validate(&fields("2024-01-01", "Squat", "-2.5", "5")),
            Err(ValidationError::NegativeWeight(-2.5))
        );
    }

    #[test]
    fn test_reps_errors() {
        assert_eq!(
            validate(&fields("2024-01-01", "Squat", "80", "5.5")),
            Err(ValidationError::InvalidReps("5.5".to_string()))
        );
        assert_eq!(
            validate(&fields("2024-01-01", "Squat", "80", "")),
            Err(ValidationError::InvalidReps(String::new()))
        );
        assert_eq!(
            validate(&fields("2024-01-01", "Squat", "80", "0")),
            Err(ValidationError::NonPositiveReps(0))
        );
        assert_eq!(
            validate(&fields("2024-01-01", "Squat", "80", "-3")),
            Err(ValidationError::NonPositiveReps(-3))
        );
        assert_eq!(
            validate(&fields("2024-01-01", "Squat", "80", "99999999999")),
            Err(ValidationError::InvalidReps("99999999999".to_string()))
        );
    }

    #[test]
    fn test_first_failing_field_wins() {
        assert_eq!(
            validate(&fields("bad", "", "-1", "0")),
            Err(ValidationError::InvalidDate("bad".to_string()))
        );
        assert_eq!(
            validate(&fields("2024-01-01", "", "-1", "0")),
            Err(ValidationError::EmptyExercise)
        );
        assert_eq!(
            validate(&fields("2024-01-01", "Squat", "-1", "0")),
            Err(ValidationError::NegativeWeight(-1.0))
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_generated_dates_validate(date in arb_date()) {
            let parsed = parse_date(&date).unwrap();
            prop_assert_eq!(parsed.format(DATE_FORMAT).to_string(), date);
        }

        #[test]
        fn prop_accepted_dates_print_back_unchanged(raw in prop_oneof!["[-+ 0-9]{8,11}", "\\PC{0,12}"]) {
            if let Ok(date) = parse_date(&raw) {
                prop_assert_eq!(date.format(DATE_FORMAT).to_string(), raw.trim());
            }
        }

        #[test]
        fn prop_validated_fields_keep_their_values(fields in arb_fields()) {
            let record = validated(&fields);
            let (date, exercise, weight, reps) = &fields;
            prop_assert_eq!(record.date().format(DATE_FORMAT).to_string(), date.as_str());
            prop_assert_eq!(record.exercise(), exercise.trim());
            prop_assert_eq!(record.weight().to_string(), weight.as_str());
            prop_assert_eq!(record.reps().to_string(), reps.as_str());
        }
    }
}
