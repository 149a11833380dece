// In-memory record store

use crate::error::StoreError;
use crate::query::View;
use crate::record::{RawFields, Record, RecordId, StoredRecord};
use crate::validate::validate;
use chrono::NaiveDate;
use tracing::debug;

/// Owns the session's training records in insertion order
///
/// Ids are assigned on insertion, start at 1 and are never reused, even
/// after the record holding one is deleted. Every failing operation leaves
/// the store exactly as it was.
#[derive(Debug, Clone)]
pub struct RecordStore {
    records: Vec<StoredRecord>,
    next_id: u64,
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// Build a store from already-validated records, assigning ids in order
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = Record>,
    {
        let mut store = Self::new();
        store.extend(records);
        store
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Append a record and return its new id
    pub fn add(&mut self, record: Record) -> RecordId {
        let id = RecordId::new(self.next_id);
        self.next_id += 1;

        debug!(%id, exercise = record.exercise(), date = %record.date(), "add: appending record");
        self.records.push(StoredRecord { id, record });
        id
    }

    /// Append several already-validated records, returning their ids in order
    pub fn extend<I>(&mut self, records: I) -> Vec<RecordId>
    where
        I: IntoIterator<Item = Record>,
    {
        records.into_iter().map(|record| self.add(record)).collect()
    }

    /// Re-validate `fields` and replace the record at `id` in place
    pub fn update(&mut self, id: RecordId, fields: &RawFields<'_>) -> Result<(), StoreError> {
        let position = self.position(id)?;
        let record = validate(fields)?;

        debug!(%id, "update: replacing record");
        self.records[position].record = record;
        Ok(())
    }

    /// Remove the record at `id` and hand it back
    pub fn delete(&mut self, id: RecordId) -> Result<Record, StoreError> {
        let position = self.position(id)?;

        debug!(%id, "delete: removing record");
        Ok(self.records.remove(position).record)
    }

    // ========================================================================
    // Reads
    // ========================================================================

    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.records.iter().find(|stored| stored.id == id).map(|stored| &stored.record)
    }

    /// Every record in insertion order
    pub fn all(&self) -> &[StoredRecord] {
        &self.records
    }

    /// Records without their ids, in insertion order
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter().map(|stored| &stored.record)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Unfiltered view in store order, the starting point for composed queries
    pub fn view(&self) -> View<'_> {
        View::new(self.records.iter().collect())
    }

    /// Records with `from <= date <= to`; empty when `from > to`
    pub fn filter_by_date_range(&self, from: NaiveDate, to: NaiveDate) -> View<'_> {
        self.view().in_date_range(from, to)
    }

    /// Case-insensitive substring search on the exercise name; "" matches all
    pub fn search_by_exercise(&self, keyword: &str) -> View<'_> {
        self.view().matching(keyword)
    }

    /// Stable sort by date; same-day records keep insertion order
    pub fn sorted_by_date(&self, ascending: bool) -> View<'_> {
        self.view().sorted_by_date(ascending)
    }

    fn position(&self, id: RecordId) -> Result<usize, StoreError> {
        self.records
            .iter()
            .position(|stored| stored.id == id)
            .ok_or(StoreError::NotFound(id))
    }
}
