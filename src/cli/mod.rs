//! Interactive command layer
//!
//! This module contains the command table, the dispatcher that routes a
//! tokenized line to the service layer, and the read-print loop.

pub mod commands;
pub mod handler;
pub mod session;

pub use commands::{find_command, Command, CommandAction, COMMANDS};
pub use handler::{dispatch, error_message, parse_input, Reply};
pub use session::Session;
