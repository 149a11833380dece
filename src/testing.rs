// Property-test generators shared by the unit tests

use crate::record::{RawFields, Record};
use crate::validate::{DATE_FORMAT, validate};
use chrono::NaiveDate;
use proptest::prelude::*;

/// Owned raw field text: (date, exercise, weight, reps)
pub(crate) type Fields = (String, String, String, String);

/// Any calendar date the journal can hold, as `YYYY-MM-DD`
pub(crate) fn arb_date() -> impl Strategy<Value = String> {
    (0i32..=9999, 1u32..=365).prop_map(|(year, ordinal)| {
        NaiveDate::from_yo_opt(year, ordinal)
            .unwrap()
            .format(DATE_FORMAT)
            .to_string()
    })
}

/// Exercise names, including CSV-hostile and non-ASCII text
pub(crate) fn arb_exercise() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Za-z][A-Za-z -]{0,20}",
        "[a-z ,\"\n\r']{1,12}",
        "\\PC{1,16}",
        Just("Жим лёжа, \"узкий\"".to_string()),
    ]
    .prop_filter("exercise must be non-empty after trimming", |s| !s.trim().is_empty())
}

/// Weights in quarter-kilogram steps up to 100 t
pub(crate) fn arb_weight() -> impl Strategy<Value = String> {
    (0u32..400_000).prop_map(|quarters| (f64::from(quarters) / 4.0).to_string())
}

pub(crate) fn arb_reps() -> impl Strategy<Value = String> {
    (1u32..=1000).prop_map(|reps| reps.to_string())
}

pub(crate) fn arb_fields() -> impl Strategy<Value = Fields> {
    (arb_date(), arb_exercise(), arb_weight(), arb_reps())
}

pub(crate) fn validated(fields: &Fields) -> Record {
    let (date, exercise, weight, reps) = fields;
    validate(&RawFields::new(date, exercise, weight, reps)).unwrap()
}
