// Training record types

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Field names of a record, in journal and CSV column order
pub const COLUMNS: [&str; 4] = ["date", "exercise", "weight", "reps"];

/// One logged training set
///
/// Fields are private: the only way to obtain a `Record` is through
/// [`validate`](crate::validate::validate), so every value in circulation
/// satisfies the validation rules (trimmed, non-empty exercise; weight >= 0;
/// reps >= 1).
///
/// Serializes as `{date, exercise, weight, reps}` with an ISO date, which is
/// exactly the JSON journal row layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    date: NaiveDate,
    exercise: String,
    weight: f64,
    reps: u32,
}

impl Record {
    pub(crate) fn from_parts(date: NaiveDate, exercise: String, weight: f64, reps: u32) -> Self {
        Self {
            date,
            exercise,
            weight,
            reps,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn exercise(&self) -> &str {
        &self.exercise
    }

    /// Weight in kilograms
    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn reps(&self) -> u32 {
        self.reps
    }

    /// Case-insensitive substring match on the exercise name
    pub fn exercise_contains(&self, keyword: &str) -> bool {
        self.exercise.to_lowercase().contains(&keyword.to_lowercase())
    }

    /// Case-insensitive exact match on the exercise name
    pub fn exercise_is(&self, name: &str) -> bool {
        self.exercise.to_lowercase() == name.trim().to_lowercase()
    }
}

/// Store-assigned identifier, unique within one [`RecordStore`](crate::RecordStore)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordId(u64);

impl RecordId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = std::num::ParseIntError;

    /// Accepts both `7` and `#7`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        s.strip_prefix('#').unwrap_or(s).parse().map(RecordId)
    }
}

/// A record together with the id the store gave it
#[derive(Debug, Clone, PartialEq)]
pub struct StoredRecord {
    pub id: RecordId,
    pub record: Record,
}

/// Raw, unvalidated field text as collected by a form or command line
///
/// This is the only shape of input the validator accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawFields<'a> {
    pub date: &'a str,
    pub exercise: &'a str,
    pub weight: &'a str,
    pub reps: &'a str,
}

impl<'a> RawFields<'a> {
    pub fn new(date: &'a str, exercise: &'a str, weight: &'a str, reps: &'a str) -> Self {
        Self {
            date,
            exercise,
            weight,
            reps,
        }
    }
}
