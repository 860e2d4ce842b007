//! Service layer for the contact assistant
//!
//! The service layer provides the operations the command dispatcher calls,
//! on top of the address book model.

pub mod birthdays;
pub mod contact;

pub use birthdays::{DayEntry, WeeklyReport};
pub use contact::{BirthdayUpdate, ContactService};
