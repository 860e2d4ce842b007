//! Contact service
//!
//! Provides the operations a command dispatcher calls on the address book.
//! Every operation either fully applies or fails before touching the book.

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{AssistantError, AssistantResult};
use crate::models::{AddressBook, Birthday, BirthdayOutcome, Phone, Record};
use crate::services::birthdays::WeeklyReport;

/// Counts of what happened when a birthday was applied to a name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BirthdayUpdate {
    /// Records whose birthday was set
    pub added: usize,
    /// Records that already had a birthday and were left unchanged
    pub already_set: usize,
}

/// Service for contact management
pub struct ContactService<'a> {
    book: &'a mut AddressBook,
}

impl<'a> ContactService<'a> {
    /// Create a new contact service
    pub fn new(book: &'a mut AddressBook) -> Self {
        Self { book }
    }

    /// Add a new record with the given phones
    ///
    /// A name that already exists gets a second, separate record.
    pub fn create_record(&mut self, name: &str, phones: &[&str]) -> AssistantResult<()> {
        let mut record = Record::new(name)?;
        for phone in phones {
            record.add_phone(phone)?;
        }

        debug!(name, phones = phones.len(), "record added");
        self.book.add_record(record);
        Ok(())
    }

    /// Replace `old` with `new` on every record stored under `name`
    pub fn set_phone(&mut self, name: &str, old: &str, new: &str) -> AssistantResult<()> {
        Phone::new(new)?;
        let records = self.records_mut(name)?;
        for record in records.iter_mut() {
            record.edit_phone(old, new)?;
        }

        debug!(name, old, new, records = records.len(), "phone edited");
        Ok(())
    }

    /// Replace the first phone of every record stored under `name`
    ///
    /// A record with no phones gets `new` appended.
    pub fn replace_first_phone(&mut self, name: &str, new: &str) -> AssistantResult<()> {
        Phone::new(new)?;
        let records = self.records_mut(name)?;
        for record in records.iter_mut() {
            match record.phones().first().map(|p| p.as_str().to_string()) {
                Some(old) => record.edit_phone(&old, new)?,
                None => record.add_phone(new)?,
            }
        }

        debug!(name, new, records = records.len(), "first phone replaced");
        Ok(())
    }

    /// Remove `phone` from every record stored under `name`
    ///
    /// Returns how many phone entries were removed.
    pub fn remove_phone(&mut self, name: &str, phone: &str) -> AssistantResult<usize> {
        let removed: usize = self
            .records_mut(name)?
            .iter_mut()
            .map(|record| record.remove_phone(phone))
            .sum();

        if removed == 0 {
            return Err(AssistantError::phone_not_found(phone));
        }

        debug!(name, phone, removed, "phone removed");
        Ok(removed)
    }

    /// The first phone of the first record stored under `name`
    pub fn get_phone(&self, name: &str) -> AssistantResult<&Phone> {
        self.first_record(name)?
            .phones()
            .first()
            .ok_or_else(|| AssistantError::phone_not_found(name))
    }

    /// Display lines for every record, in book order
    pub fn list_all(&self) -> AssistantResult<Vec<String>> {
        if self.book.is_empty() {
            return Err(AssistantError::EmptyBook);
        }
        Ok(self.book.records().map(Record::to_string).collect())
    }

    /// Set the birthday on every record stored under `name` that has none
    pub fn set_birthday(&mut self, name: &str, date: &str) -> AssistantResult<BirthdayUpdate> {
        Birthday::new(date)?;
        let mut update = BirthdayUpdate::default();
        for record in self.records_mut(name)?.iter_mut() {
            match record.add_birthday(date)? {
                BirthdayOutcome::Added => update.added += 1,
                BirthdayOutcome::AlreadySet => update.already_set += 1,
            }
        }

        debug!(
            name,
            date,
            added = update.added,
            already_set = update.already_set,
            "birthday applied"
        );
        Ok(update)
    }

    /// The birthday of the first record stored under `name`
    pub fn get_birthday(&self, name: &str) -> AssistantResult<&Birthday> {
        self.first_record(name)?
            .birthday()
            .ok_or_else(|| AssistantError::birthday_not_found(name))
    }

    /// Remove every record stored under `name`
    pub fn delete(&mut self, name: &str) -> AssistantResult<usize> {
        let removed = self
            .book
            .delete(name)
            .ok_or_else(|| AssistantError::contact_not_found(name))?;

        debug!(name, records = removed.len(), "contact deleted");
        Ok(removed.len())
    }

    /// Birthdays in the seven days starting at `today`
    pub fn weekly_birthdays(&self, today: NaiveDate) -> WeeklyReport {
        self.book.get_birthdays_per_week(today)
    }

    fn first_record(&self, name: &str) -> AssistantResult<&Record> {
        self.book
            .find(name)
            .and_then(|records| records.first())
            .ok_or_else(|| AssistantError::contact_not_found(name))
    }

    fn records_mut(&mut self, name: &str) -> AssistantResult<&mut [Record]> {
        self.book
            .find_mut(name)
            .ok_or_else(|| AssistantError::contact_not_found(name))
    }
}
