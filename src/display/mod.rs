//! Display formatting for terminal output
//!
//! Turns service results into the lines the interactive session prints.

pub mod birthdays;
pub mod help;

pub use birthdays::{format_weekly_report, weekday_name};
pub use help::format_command_help;
