//! Command definitions for the interactive session
//!
//! Defines every command the session understands, with the number of
//! arguments it takes.

use crate::error::{AssistantError, AssistantResult};

/// A command that can be typed at the prompt
#[derive(Debug, Clone)]
pub struct Command {
    /// Command name (what user types)
    pub name: &'static str,
    /// Alternative names
    pub aliases: &'static [&'static str],
    /// Argument synopsis shown in help and arity errors
    pub usage: &'static str,
    /// Short description
    pub description: &'static str,
    /// Fewest arguments accepted
    pub min_args: usize,
    /// Most arguments accepted, `None` for unbounded
    pub max_args: Option<usize>,
    /// Command action
    pub action: CommandAction,
}

/// Actions that commands can perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandAction {
    // Contacts
    Add,
    Change,
    Phone,
    RemovePhone,
    Delete,
    All,

    // Birthdays
    AddBirthday,
    ShowBirthday,
    Birthdays,

    // General
    Hello,
    Help,
    Exit,
}

impl Command {
    /// Check that `argc` arguments fit this command
    pub fn check_arity(&self, argc: usize) -> AssistantResult<()> {
        let too_few = argc < self.min_args;
        let too_many = self.max_args.is_some_and(|max| argc > max);
        if too_few || too_many {
            return Err(AssistantError::Arity {
                command: self.name,
                usage: self.usage,
            });
        }
        Ok(())
    }
}

/// All available commands
pub static COMMANDS: &[Command] = &[
    Command {
        name: "hello",
        aliases: &[],
        usage: "hello",
        description: "Greet the assistant",
        min_args: 0,
        max_args: Some(0),
        action: CommandAction::Hello,
    },
    Command {
        name: "add",
        aliases: &[],
        usage: "add <name> <phone> [phone...]",
        description: "Add a contact with one or more phones",
        min_args: 2,
        max_args: None,
        action: CommandAction::Add,
    },
    Command {
        name: "change",
        aliases: &[],
        usage: "change <name> [old-phone] <new-phone>",
        description: "Replace a phone (the first one when old-phone is omitted)",
        min_args: 2,
        max_args: Some(3),
        action: CommandAction::Change,
    },
    Command {
        name: "phone",
        aliases: &[],
        usage: "phone <name>",
        description: "Show the phone of a contact",
        min_args: 1,
        max_args: Some(1),
        action: CommandAction::Phone,
    },
    Command {
        name: "remove-phone",
        aliases: &[],
        usage: "remove-phone <name> <phone>",
        description: "Remove a phone from a contact",
        min_args: 2,
        max_args: Some(2),
        action: CommandAction::RemovePhone,
    },
    Command {
        name: "delete",
        aliases: &[],
        usage: "delete <name>",
        description: "Delete every contact with this name",
        min_args: 1,
        max_args: Some(1),
        action: CommandAction::Delete,
    },
    Command {
        name: "all",
        aliases: &[],
        usage: "all",
        description: "List all contacts",
        min_args: 0,
        max_args: Some(0),
        action: CommandAction::All,
    },
    Command {
        name: "add-birthday",
        aliases: &[],
        usage: "add-birthday <name> <DD.MM.YYYY>",
        description: "Set the birthday of a contact",
        min_args: 2,
        max_args: Some(2),
        action: CommandAction::AddBirthday,
    },
    Command {
        name: "show-birthday",
        aliases: &[],
        usage: "show-birthday <name>",
        description: "Show the birthday of a contact",
        min_args: 1,
        max_args: Some(1),
        action: CommandAction::ShowBirthday,
    },
    Command {
        name: "birthdays",
        aliases: &[],
        usage: "birthdays",
        description: "Show birthdays in the coming week",
        min_args: 0,
        max_args: Some(0),
        action: CommandAction::Birthdays,
    },
    Command {
        name: "help",
        aliases: &[],
        usage: "help",
        description: "Show this help",
        min_args: 0,
        max_args: Some(0),
        action: CommandAction::Help,
    },
    Command {
        name: "exit",
        aliases: &["close"],
        usage: "exit | close",
        description: "Leave the assistant",
        min_args: 0,
        max_args: None,
        action: CommandAction::Exit,
    },
];

/// Find a command by name or alias
pub fn find_command(name: &str) -> Option<&'static Command> {
    COMMANDS
        .iter()
        .find(|cmd| cmd.name == name || cmd.aliases.contains(&name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_command() {
        assert_eq!(find_command("add").unwrap().action, CommandAction::Add);
        assert_eq!(find_command("close").unwrap().action, CommandAction::Exit);
        assert_eq!(find_command("exit").unwrap().action, CommandAction::Exit);
        assert!(find_command("ADD").is_none());
        assert!(find_command("frobnicate").is_none());
    }

    #[test]
    fn test_command_names_unique() {
        let mut names: Vec<&str> = COMMANDS
            .iter()
            .flat_map(|c| std::iter::once(c.name).chain(c.aliases.iter().copied()))
            .collect();
        let total = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn test_check_arity() {
        let add = find_command("add").unwrap();
        assert!(add.check_arity(1).is_err());
        assert!(add.check_arity(2).is_ok());
        assert!(add.check_arity(5).is_ok());

        let change = find_command("change").unwrap();
        assert!(change.check_arity(1).is_err());
        assert!(change.check_arity(3).is_ok());
        assert!(change.check_arity(4).is_err());

        let all = find_command("all").unwrap();
        assert!(matches!(
            all.check_arity(1),
            Err(AssistantError::Arity { command: "all", .. })
        ));
    }
}
