// Composable read-only queries over a store snapshot

use crate::record::{Record, StoredRecord};
use crate::store::RecordStore;
use chrono::NaiveDate;

/// Ordered, read-only selection of records borrowed from a [`RecordStore`]
///
/// Each step returns a new view, so callers pick the composition order
/// (filter then sort, or sort then filter; the result is the same).
#[derive(Debug, Clone)]
pub struct View<'a> {
    rows: Vec<&'a StoredRecord>,
}

impl<'a> View<'a> {
    pub(crate) fn new(rows: Vec<&'a StoredRecord>) -> Self {
        Self { rows }
    }

    /// Keep records with `from <= date <= to`
    pub fn in_date_range(self, from: NaiveDate, to: NaiveDate) -> Self {
        self.retain(|record| from <= record.date() && record.date() <= to)
    }

    /// Keep records whose exercise contains `keyword`, ignoring case
    pub fn matching(self, keyword: &str) -> Self {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return self;
        }
        self.retain(|record| record.exercise_contains(keyword))
    }

    /// Stable sort by date; equal dates keep their current relative order
    pub fn sorted_by_date(mut self, ascending: bool) -> Self {
        self.rows.sort_by(|a, b| {
            let ord = a.record.date().cmp(&b.record.date());
            if ascending { ord } else { ord.reverse() }
        });
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a StoredRecord> + '_ {
        self.rows.iter().copied()
    }

    pub fn records(&self) -> impl Iterator<Item = &'a Record> + '_ {
        self.rows.iter().map(|stored| &stored.record)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn retain(mut self, keep: impl Fn(&Record) -> bool) -> Self {
        self.rows.retain(|stored| keep(&stored.record));
        self
    }
}

impl<'a> IntoIterator for View<'a> {
    type Item = &'a StoredRecord;
    type IntoIter = std::vec::IntoIter<&'a StoredRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

/// Sort direction for date ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Store (insertion) order
    #[default]
    Insertion,
    Ascending,
    Descending,
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOrder::Insertion => write!(f, "insertion"),
            SortOrder::Ascending => write!(f, "asc"),
            SortOrder::Descending => write!(f, "desc"),
        }
    }
}

/// A reusable record query: optional date bounds, keyword and ordering
///
/// Open bounds are unbounded on that side. An inverted range yields nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub keyword: Option<String>,
    pub order: SortOrder,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from(mut self, date: NaiveDate) -> Self {
        self.from = Some(date);
        self
    }

    pub fn to(mut self, date: NaiveDate) -> Self {
        self.to = Some(date);
        self
    }

    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    pub fn order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    /// Run the query against the current contents of `store`
    pub fn apply<'a>(&self, store: &'a RecordStore) -> View<'a> {
        let mut view = store.view();

        if self.from.is_some() || self.to.is_some() {
            let from = self.from.unwrap_or(NaiveDate::MIN);
            let to = self.to.unwrap_or(NaiveDate::MAX);
            view = view.in_date_range(from, to);
        }

        if let Some(keyword) = &self.keyword {
            view = view.matching(keyword);
        }

        match self.order {
            SortOrder::Insertion => view,
            SortOrder::Ascending => view.sorted_by_date(true),
            SortOrder::Descending => view.sorted_by_date(false),
        }
    }
}

/// One-line description, e.g. `from=2024-01-01 keyword="bench" order=asc`
impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut parts = Vec::new();
        if let Some(from) = self.from {
            parts.push(format!("from={}", from));
        }
        if let Some(to) = self.to {
            parts.push(format!("to={}", to));
        }
        if let Some(keyword) = &self.keyword {
            parts.push(format!("keyword={:?}", keyword));
        }
        parts.push(format!("order={}", self.order));
        write!(f, "{}", parts.join(" "))
    }
}
