//! Contact record model
//!
//! A record is one person entry: a name, any number of phones in the order
//! they were added, and at most one birthday.

use std::fmt;

use super::{Birthday, Name, Phone, ValidationError};

/// Result of trying to set a birthday on a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BirthdayOutcome {
    /// The birthday was unset and now holds the new value
    Added,
    /// A birthday was already present and was left unchanged
    AlreadySet,
}

/// A single contact entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    /// Create a record with an optional birthday
    pub fn with_birthday(name: &str, birthday: Option<&str>) -> Result<Self, ValidationError> {
        let mut record = Self::new(name)?;
        record.birthday = birthday.map(Birthday::new).transpose()?;
        Ok(record)
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Phones in insertion order
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone. Duplicates are kept.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        let phone = Phone::new(phone)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Remove every phone equal to `phone`, returning how many were removed
    pub fn remove_phone(&mut self, phone: &str) -> usize {
        let before = self.phones.len();
        self.phones.retain(|p| p.as_str() != phone);
        before - self.phones.len()
    }

    /// Remove every phone equal to `old` and append one `new` phone
    ///
    /// `new` is validated before anything is removed, so a malformed value
    /// leaves the record untouched.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<(), ValidationError> {
        let new = Phone::new(new)?;
        self.remove_phone(old);
        self.phones.push(new);
        Ok(())
    }

    /// First phone equal to `phone`
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Set the birthday if it is not set yet
    pub fn add_birthday(&mut self, birthday: &str) -> Result<BirthdayOutcome, ValidationError> {
        let birthday = Birthday::new(birthday)?;
        if self.birthday.is_some() {
            return Ok(BirthdayOutcome::AlreadySet);
        }
        self.birthday = Some(birthday);
        Ok(BirthdayOutcome::Added)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            phones.join("; ")
        )
    }
}
