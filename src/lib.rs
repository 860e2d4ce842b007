//! Contact Assistant - interactive command-line contact book
//!
//! This library provides the core functionality for the contact assistant:
//! validated contact fields, an in-memory address book, and a weekly
//! birthday report that greets weekend birthdays on Monday.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (fields, records, the address book)
//! - `services`: Business logic layer (contact operations, birthday scheduling)
//! - `cli`: Command table, dispatcher and interactive session
//! - `display`: Terminal output formatting
//!
//! # Example
//!
//! ```rust
//! use assistant::models::{AddressBook, Record};
//! use chrono::{NaiveDate, Weekday};
//!
//! let mut book = AddressBook::new();
//! book.add_record(Record::with_birthday("Alice", Some("06.01.1990")).unwrap());
//!
//! // Wednesday; Alice's Saturday birthday is greeted on Monday
//! let today = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
//! let report = book.get_birthdays_per_week(today);
//! assert_eq!(report.names_for(Weekday::Mon), ["Alice"]);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;

pub use error::{AssistantError, AssistantResult};
