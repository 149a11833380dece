// Per-exercise progress series for charting

use crate::store::RecordStore;
use chrono::NaiveDate;
use serde::Serialize;

/// One chart point: the weight of one logged set on its date
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProgressPoint {
    pub date: NaiveDate,
    pub weight: f64,
}

/// Date-ordered (date, weight) points for every record of `exercise`
///
/// Matching is case-insensitive and exact. One point per record: same-day
/// sets are all kept, in insertion order. No match yields an empty series.
pub fn series_for(store: &RecordStore, exercise: &str) -> Vec<ProgressPoint> {
    let mut points: Vec<ProgressPoint> = store
        .records()
        .filter(|record| record.exercise_is(exercise))
        .map(|record| ProgressPoint {
            date: record.date(),
            weight: record.weight(),
        })
        .collect();

    // sort_by_key is stable
    points.sort_by_key(|point| point.date);
    points
}

/// Distinct exercise names in first-seen order, ignoring case
pub fn exercise_names(store: &RecordStore) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    store
        .records()
        .filter(|record| seen.insert(record.exercise().to_lowercase()))
        .map(|record| record.exercise().to_string())
        .collect()
}
