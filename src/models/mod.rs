//! Core data models for the contact assistant
//!
//! This module contains the validated field types and the structures built
//! from them: contact records and the address book that owns them.

pub mod birthday;
pub mod book;
pub mod field;
pub mod name;
pub mod phone;
pub mod record;

pub use birthday::{Birthday, DATE_FORMAT};
pub use book::AddressBook;
pub use field::{Field, ValidationError};
pub use name::Name;
pub use phone::Phone;
pub use record::{BirthdayOutcome, Record};
