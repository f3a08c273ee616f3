//! Line-oriented command language.
//!
//! One command per line:
//!
//! ```text
//! add <text>
//! toggle <index>
//! up <index>
//! down <index>
//! remove <index>    (alias: rm)
//! list              (alias: ls)
//! ```
//!
//! Keywords are case-insensitive. Blank lines and `#` comments carry no
//! command.

use crate::error::{Result, TodoError};
use std::fmt;
use std::str::FromStr;

/// A parsed command.
///
/// Indices are kept signed so that a negative index reaches the list and is
/// reported as out of range, rather than failing as a parse error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Toggle(i64),
    MoveUp(i64),
    MoveDown(i64),
    Remove(i64),
    List,
}

impl Command {
    /// Parse one line, returning `None` for blank lines and comments.
    pub fn parse_line(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        line.parse().map(Some)
    }

    /// Whether applying this command can change the list
    pub fn is_mutation(&self) -> bool {
        !matches!(self, Command::List)
    }

    /// The command keyword
    pub fn name(&self) -> &'static str {
        match self {
            Command::Add(_) => "add",
            Command::Toggle(_) => "toggle",
            Command::MoveUp(_) => "up",
            Command::MoveDown(_) => "down",
            Command::Remove(_) => "remove",
            Command::List => "list",
        }
    }
}

impl FromStr for Command {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (keyword, rest) = match s.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (s, ""),
        };

        match keyword.to_ascii_lowercase().as_str() {
            "add" => Ok(Command::Add(rest.to_string())),
            "toggle" => parse_index(keyword, rest).map(Command::Toggle),
            "up" => parse_index(keyword, rest).map(Command::MoveUp),
            "down" => parse_index(keyword, rest).map(Command::MoveDown),
            "remove" | "rm" => parse_index(keyword, rest).map(Command::Remove),
            "list" | "ls" if rest.is_empty() => Ok(Command::List),
            "list" | "ls" => Err(TodoError::InvalidCommand(format!("list takes no arguments: {}", rest))),
            "" => Err(TodoError::InvalidCommand("empty command".to_string())),
            other => Err(TodoError::InvalidCommand(format!("unknown command: {}", other))),
        }
    }
}

fn parse_index(keyword: &str, arg: &str) -> Result<i64> {
    if arg.is_empty() {
        return Err(TodoError::InvalidCommand(format!("{} requires an index", keyword)));
    }
    arg.parse::<i64>()
        .map_err(|_| TodoError::InvalidCommand(format!("{}: not an index: {}", keyword, arg)))
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Add(text) => write!(f, "add {}", text),
            Command::Toggle(i) | Command::MoveUp(i) | Command::MoveDown(i) | Command::Remove(i) => {
                write!(f, "{} {}", self.name(), i)
            }
            Command::List => write!(f, "list"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add() {
        let cmd: Command = "add buy milk".parse().unwrap();
        assert_eq!(cmd, Command::Add("buy milk".to_string()));
    }

    #[test]
    fn test_parse_add_keeps_inner_spacing() {
        let cmd: Command = "add   walk  the dog  ".parse().unwrap();
        assert_eq!(cmd, Command::Add("walk  the dog".to_string()));
    }

    #[test]
    fn test_parse_add_without_text() {
        // accepted here; the store rejects the blank text
        let cmd: Command = "add".parse().unwrap();
        assert_eq!(cmd, Command::Add(String::new()));
    }

    #[test]
    fn test_parse_index_commands() {
        assert_eq!("toggle 0".parse::<Command>().unwrap(), Command::Toggle(0));
        assert_eq!("up 2".parse::<Command>().unwrap(), Command::MoveUp(2));
        assert_eq!("down 1".parse::<Command>().unwrap(), Command::MoveDown(1));
        assert_eq!("remove 3".parse::<Command>().unwrap(), Command::Remove(3));
        assert_eq!("rm 3".parse::<Command>().unwrap(), Command::Remove(3));
    }

    #[test]
    fn test_parse_negative_index() {
        assert_eq!("toggle -1".parse::<Command>().unwrap(), Command::Toggle(-1));
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("TOGGLE 1".parse::<Command>().unwrap(), Command::Toggle(1));
        assert_eq!("Ls".parse::<Command>().unwrap(), Command::List);
    }

    #[test]
    fn test_parse_list() {
        assert_eq!("list".parse::<Command>().unwrap(), Command::List);
        assert!("list extra".parse::<Command>().is_err());
    }

    #[test]
    fn test_parse_missing_index() {
        let err = "toggle".parse::<Command>().unwrap_err();
        assert!(matches!(err, TodoError::InvalidCommand(_)));
        assert!(err.to_string().contains("requires an index"));
    }

    #[test]
    fn test_parse_non_numeric_index() {
        let err = "up first".parse::<Command>().unwrap_err();
        assert!(matches!(err, TodoError::InvalidCommand(_)));
    }

    #[test]
    fn test_parse_unknown_command() {
        let err = "frob 1".parse::<Command>().unwrap_err();
        assert_eq!(err.to_string(), "Invalid command: unknown command: frob");
    }

    #[test]
    fn test_parse_line_skips_blank_and_comments() {
        assert_eq!(Command::parse_line("").unwrap(), None);
        assert_eq!(Command::parse_line("   ").unwrap(), None);
        assert_eq!(Command::parse_line("# groceries").unwrap(), None);
        assert_eq!(Command::parse_line("  add eggs").unwrap(), Some(Command::Add("eggs".to_string())));
    }

    #[test]
    fn test_is_mutation() {
        assert!(Command::Toggle(0).is_mutation());
        assert!(!Command::List.is_mutation());
    }

    #[test]
    fn test_display_reparses() {
        for cmd in [
            Command::Add("buy milk".to_string()),
            Command::Toggle(1),
            Command::MoveUp(2),
            Command::MoveDown(0),
            Command::Remove(4),
            Command::List,
        ] {
            assert_eq!(cmd.to_string().parse::<Command>().unwrap(), cmd);
        }
    }
}
