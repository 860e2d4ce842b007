//! Interactive read-print loop
//!
//! Reads one command per line, prints the reply, and keeps going until an
//! exit command or end of input. Errors are shown to the user and never end
//! the session.

use std::io::{BufRead, Write};

use chrono::{Local, NaiveDate};
use tracing::{debug, info};

use super::handler::{dispatch, error_message, parse_input};
use crate::config::Settings;
use crate::error::AssistantResult;
use crate::models::AddressBook;

/// One interactive conversation with its own address book
pub struct Session {
    book: AddressBook,
    settings: Settings,
    today: Option<NaiveDate>,
}

impl Session {
    /// Create a session with an empty book
    pub fn new(settings: Settings) -> Self {
        Self {
            book: AddressBook::new(),
            settings,
            today: None,
        }
    }

    /// Pin the reference date for birthday reports instead of the local date
    pub fn with_today(mut self, today: Option<NaiveDate>) -> Self {
        self.today = today;
        self
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Run until `exit`/`close` or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> AssistantResult<()> {
        writeln!(output, "{}", self.settings.greeting)?;

        let mut lines = input.lines();
        loop {
            write!(output, "{}", self.settings.prompt)?;
            output.flush()?;

            let Some(line) = lines.next() else {
                writeln!(output)?;
                info!("input closed");
                break;
            };
            let line = line?;

            let Some((command, args)) = parse_input(&line) else {
                continue;
            };

            let today = self.today.unwrap_or_else(|| Local::now().date_naive());
            match dispatch(&mut self.book, today, &command, &args) {
                Ok(reply) => {
                    for text in reply.lines() {
                        writeln!(output, "{}", text)?;
                    }
                    if reply.is_exit() {
                        info!("session closed by user");
                        break;
                    }
                }
                Err(err) => {
                    debug!(command = %command, error = %err, "command failed");
                    writeln!(output, "{}", error_message(&err))?;
                }
            }
        }

        Ok(())
    }
}
