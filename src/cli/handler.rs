//! Command dispatch
//!
//! Routes a tokenized input line to the contact service and turns the
//! outcome, success or error, into the text the user sees.

use chrono::NaiveDate;

use super::commands::{find_command, CommandAction, COMMANDS};
use crate::display::{format_command_help, format_weekly_report};
use crate::error::{AssistantError, AssistantResult};
use crate::models::AddressBook;
use crate::services::ContactService;

/// What the session should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print these lines and keep reading
    Lines(Vec<String>),
    /// Print these lines and end the session
    Exit(Vec<String>),
}

impl Reply {
    fn line(text: impl Into<String>) -> Self {
        Self::Lines(vec![text.into()])
    }

    /// The lines to print
    pub fn lines(&self) -> &[String] {
        match self {
            Self::Lines(lines) | Self::Exit(lines) => lines,
        }
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Self::Exit(_))
    }
}

/// Split an input line into a lower-cased command and its arguments
///
/// Returns `None` for a blank line.
pub fn parse_input(line: &str) -> Option<(String, Vec<&str>)> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next()?.to_lowercase();
    Some((command, tokens.collect()))
}

/// Run one command against the book
///
/// `today` is the reference date for the weekly birthday report.
pub fn dispatch(
    book: &mut AddressBook,
    today: NaiveDate,
    command: &str,
    args: &[&str],
) -> AssistantResult<Reply> {
    let cmd =
        find_command(command).ok_or_else(|| AssistantError::UnknownCommand(command.to_string()))?;
    cmd.check_arity(args.len())?;

    let mut service = ContactService::new(book);

    let reply = match cmd.action {
        CommandAction::Hello => Reply::line("How can I help you?"),
        CommandAction::Help => Reply::Lines(format_command_help(COMMANDS)),
        CommandAction::Exit => Reply::Exit(vec!["Good bye!".to_string()]),

        CommandAction::Add => {
            service.create_record(args[0], &args[1..])?;
            Reply::line("Contact added.")
        }
        CommandAction::Change => {
            if let [name, old, new] = args {
                service.set_phone(name, old, new)?;
            } else {
                service.replace_first_phone(args[0], args[1])?;
            }
            Reply::line("Contact updated.")
        }
        CommandAction::Phone => Reply::line(service.get_phone(args[0])?.to_string()),
        CommandAction::RemovePhone => {
            service.remove_phone(args[0], args[1])?;
            Reply::line("Phone removed.")
        }
        CommandAction::Delete => {
            service.delete(args[0])?;
            Reply::line("Contact deleted.")
        }
        CommandAction::All => Reply::Lines(service.list_all()?),

        CommandAction::AddBirthday => {
            let update = service.set_birthday(args[0], args[1])?;
            let mut lines = Vec::new();
            if update.already_set > 0 {
                lines.push("Birthday already exists.".to_string());
            }
            if update.added > 0 {
                lines.push("Birthday added.".to_string());
            }
            Reply::Lines(lines)
        }
        CommandAction::ShowBirthday => Reply::line(service.get_birthday(args[0])?.to_string()),
        CommandAction::Birthdays => {
            Reply::Lines(format_weekly_report(&service.weekly_birthdays(today)))
        }
    };

    Ok(reply)
}

/// The user-facing message for an error raised by a command
pub fn error_message(err: &AssistantError) -> String {
    match err {
        AssistantError::Validation(e) => e.to_string(),
        AssistantError::NotFound { entity_type, .. } => match *entity_type {
            "Phone" => "Phone not found.".to_string(),
            "Birthday" => "Birthday not set.".to_string(),
            _ => "Contact not found.".to_string(),
        },
        AssistantError::Arity { usage, .. } => format!("Invalid command. Usage: {}", usage),
        AssistantError::EmptyBook => "No contacts.".to_string(),
        AssistantError::UnknownCommand(_) => "Invalid command.".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        // Wednesday
        NaiveDate::from_ymd_opt(2024, 1, 3).unwrap()
    }

    fn run(book: &mut AddressBook, line: &str) -> Vec<String> {
        let (command, args) = parse_input(line).unwrap();
        match dispatch(book, today(), &command, &args) {
            Ok(reply) => reply.lines().to_vec(),
            Err(err) => vec![error_message(&err)],
        }
    }

    #[test]
    fn test_parse_input() {
        assert_eq!(
            parse_input("  ADD  Alice 1111111111 "),
            Some(("add".to_string(), vec!["Alice", "1111111111"]))
        );
        assert_eq!(parse_input("all"), Some(("all".to_string(), vec![])));
        assert_eq!(parse_input("   "), None);
        assert_eq!(parse_input(""), None);
    }

    #[test]
    fn test_parse_input_keeps_argument_case() {
        let (command, args) = parse_input("Phone Alice").unwrap();
        assert_eq!(command, "phone");
        assert_eq!(args, ["Alice"]);
    }

    #[test]
    fn test_add_and_show_phone() {
        let mut book = AddressBook::new();
        assert_eq!(run(&mut book, "add Alice 1111111111"), ["Contact added."]);
        assert_eq!(run(&mut book, "phone Alice"), ["1111111111"]);
        assert_eq!(run(&mut book, "phone Bob"), ["Contact not found."]);
    }

    #[test]
    fn test_change_with_two_and_three_args() {
        let mut book = AddressBook::new();
        run(&mut book, "add Alice 1111111111 2222222222");

        assert_eq!(run(&mut book, "change Alice 3333333333"), ["Contact updated."]);
        assert_eq!(
            run(&mut book, "all"),
            ["Contact name: Alice, phones: 2222222222; 3333333333"]
        );

        assert_eq!(
            run(&mut book, "change Alice 2222222222 4444444444"),
            ["Contact updated."]
        );
        assert_eq!(
            run(&mut book, "all"),
            ["Contact name: Alice, phones: 3333333333; 4444444444"]
        );
    }

    #[test]
    fn test_validation_messages() {
        let mut book = AddressBook::new();
        assert_eq!(
            run(&mut book, "add Alice 12345"),
            ["Invalid phone number format."]
        );
        assert_eq!(
            run(&mut book, "add Al1ce 1111111111"),
            ["Invalid name format. Name should contain only alphabetic characters."]
        );
        run(&mut book, "add Alice 1111111111");
        assert_eq!(
            run(&mut book, "add-birthday Alice 1990-12-25"),
            ["Invalid birthday format. Use DD.MM.YYYY."]
        );
    }

    #[test]
    fn test_arity_and_unknown_command() {
        let mut book = AddressBook::new();
        assert_eq!(
            run(&mut book, "add Alice"),
            ["Invalid command. Usage: add <name> <phone> [phone...]"]
        );
        assert_eq!(
            run(&mut book, "phone"),
            ["Invalid command. Usage: phone <name>"]
        );
        assert_eq!(run(&mut book, "dance"), ["Invalid command."]);
    }

    #[test]
    fn test_all_on_empty_book() {
        let mut book = AddressBook::new();
        assert_eq!(run(&mut book, "all"), ["No contacts."]);
    }

    #[test]
    fn test_birthday_commands() {
        let mut book = AddressBook::new();
        run(&mut book, "add Alice 1111111111");

        assert_eq!(run(&mut book, "show-birthday Alice"), ["Birthday not set."]);
        assert_eq!(
            run(&mut book, "add-birthday Alice 05.01.1990"),
            ["Birthday added."]
        );
        assert_eq!(
            run(&mut book, "add-birthday Alice 06.01.1990"),
            ["Birthday already exists."]
        );
        assert_eq!(run(&mut book, "show-birthday Alice"), ["05.01.1990"]);
        assert_eq!(
            run(&mut book, "add-birthday Bob 05.01.1990"),
            ["Contact not found."]
        );

        let report = run(&mut book, "birthdays");
        assert_eq!(report.len(), 7);
        assert_eq!(report[0], "No birthdays this week.");
        assert_eq!(report[2], "Friday: Alice");
    }

    #[test]
    fn test_remove_phone_and_delete() {
        let mut book = AddressBook::new();
        run(&mut book, "add Alice 1111111111 2222222222");

        assert_eq!(
            run(&mut book, "remove-phone Alice 1111111111"),
            ["Phone removed."]
        );
        assert_eq!(
            run(&mut book, "remove-phone Alice 1111111111"),
            ["Phone not found."]
        );
        assert_eq!(run(&mut book, "delete Alice"), ["Contact deleted."]);
        assert_eq!(run(&mut book, "delete Alice"), ["Contact not found."]);
        assert_eq!(run(&mut book, "all"), ["No contacts."]);
    }

    #[test]
    fn test_general_commands() {
        let mut book = AddressBook::new();
        assert_eq!(run(&mut book, "hello"), ["How can I help you?"]);

        let (command, args) = parse_input("close").unwrap();
        let reply = dispatch(&mut book, today(), &command, &args).unwrap();
        assert!(reply.is_exit());
        assert_eq!(reply.lines(), ["Good bye!"]);
    }
}
