//! Address book model
//!
//! Records are grouped into buckets keyed by name. Several records may share a
//! name; they are kept side by side and never merged. Buckets iterate in the
//! order their names were first inserted.

use chrono::NaiveDate;
use indexmap::IndexMap;

use super::Record;
use crate::services::birthdays::{self, WeeklyReport};

/// In-memory collection of contact records
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    data: IndexMap<String, Vec<Record>>,
}

impl AddressBook {
    /// Create an empty address book
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to the bucket for its name
    pub fn add_record(&mut self, record: Record) {
        self.bucket_mut(record.name().as_str()).push(record);
    }

    /// Records stored under `name`, in insertion order
    ///
    /// Never creates a bucket; an unknown name is `None`.
    pub fn find(&self, name: &str) -> Option<&[Record]> {
        self.data.get(name).map(Vec::as_slice)
    }

    /// Mutable access to the records stored under `name`
    pub fn find_mut(&mut self, name: &str) -> Option<&mut [Record]> {
        self.data.get_mut(name).map(Vec::as_mut_slice)
    }

    /// Remove every record stored under `name`
    ///
    /// Returns the removed records, or `None` if the name was unknown.
    pub fn delete(&mut self, name: &str) -> Option<Vec<Record>> {
        self.data.shift_remove(name)
    }

    /// All records: buckets in insertion order, then records within a bucket
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.data.values().flatten()
    }

    /// Names that have at least one record, in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(String::as_str)
    }

    /// Total number of records
    pub fn len(&self) -> usize {
        self.data.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Birthdays in the seven days starting at `today`, bucketed by weekday
    pub fn get_birthdays_per_week(&self, today: NaiveDate) -> WeeklyReport {
        birthdays::weekly_report(self, today)
    }

    /// Get or create the bucket for `name`
    fn bucket_mut(&mut self, name: &str) -> &mut Vec<Record> {
        self.data.entry(name.to_string()).or_default()
    }
}
