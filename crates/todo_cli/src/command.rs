//! Line command parsing for the CLI session.

use std::error::Error;
use std::fmt::{Display, Formatter};
use todo_core::TaskId;

pub const USAGE: &str = "commands: add <text> | toggle <id> | remove <id> | edit <id> <text> | list | help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Raw, untrimmed draft text.
    Add(String),
    Toggle(TaskId),
    Remove(TaskId),
    Edit(TaskId, String),
    List,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Empty,
    UnknownCommand(String),
    MissingId(&'static str),
    InvalidId(String),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty command"),
            Self::UnknownCommand(name) => write!(f, "unknown command `{name}`"),
            Self::MissingId(name) => write!(f, "`{name}` needs a task id"),
            Self::InvalidId(raw) => write!(f, "invalid task id `{raw}`"),
        }
    }
}

impl Error for CommandError {}

/// Parses one input line.
///
/// Text arguments keep their whitespace; trimming belongs to the model.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim_start();
    let (name, rest) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest),
        None => (line.trim_end(), ""),
    };

    match name {
        "" => Err(CommandError::Empty),
        "add" => Ok(Command::Add(rest.to_string())),
        "toggle" => parse_id("toggle", rest).map(Command::Toggle),
        "remove" | "rm" => parse_id("remove", rest).map(Command::Remove),
        "edit" => {
            let rest = rest.trim_start();
            let (raw_id, text) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            let id = parse_id("edit", raw_id)?;
            Ok(Command::Edit(id, text.to_string()))
        }
        "list" | "ls" => Ok(Command::List),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(CommandError::UnknownCommand(other.to_string())),
    }
}

fn parse_id(command: &'static str, raw: &str) -> Result<TaskId, CommandError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(CommandError::MissingId(command));
    }
    raw.parse::<u64>()
        .map(TaskId::from_raw)
        .map_err(|_| CommandError::InvalidId(raw.to_string()))
}
