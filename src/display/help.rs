//! Command help formatting

use crate::cli::commands::Command;

/// Format the command table as aligned `usage  description` lines
pub fn format_command_help(commands: &[Command]) -> Vec<String> {
    let usage_width = commands
        .iter()
        .map(|c| c.usage.len())
        .max()
        .unwrap_or(5)
        .max(5);

    let mut lines = Vec::with_capacity(commands.len() + 2);
    lines.push(format!(
        "{:<usage_width$}  {}",
        "Usage",
        "Description",
        usage_width = usage_width
    ));
    lines.push(format!(
        "{:-<usage_width$}  {:-<11}",
        "",
        "",
        usage_width = usage_width
    ));
    for command in commands {
        lines.push(format!(
            "{:<usage_width$}  {}",
            command.usage,
            command.description,
            usage_width = usage_width
        ));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::COMMANDS;

    #[test]
    fn test_help_lists_every_command() {
        let lines = format_command_help(COMMANDS);
        assert_eq!(lines.len(), COMMANDS.len() + 2);
        assert!(lines[0].starts_with("Usage"));
        assert!(lines.iter().any(|l| l.starts_with("add <name> <phone> [phone...]")));
    }

    #[test]
    fn test_help_columns_align() {
        let lines = format_command_help(COMMANDS);
        let column = lines[0].find("Description").unwrap();
        for (line, command) in lines[2..].iter().zip(COMMANDS) {
            assert_eq!(line.find(command.description), Some(column));
        }
    }
}
