//! Defines the fixed command set and the parsing of raw command lines.
//!
//! Includes:
//! - `Command`: one variant per keyword in the command table.
//! - `normalize` / `tokenize`: the line-level tokenizer.
//! - `ParsedLine`: the result of reading one raw command line.

use crate::error::AppError;
use std::fmt;
use std::str::FromStr;

/// Characters stripped from anywhere in a command line.
const DECORATORS: [char; 5] = ['-', '/', '\\', '<', '>'];

/// Every command the dispatcher accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Interactive,
    Reset,
    New,
    Add,
    List,
    Show,
    Clear,
    Remove,
    Del,
    Quit,
}

impl Command {
    /// The command table, in the order it is displayed.
    pub const ALL: [Command; 11] = [
        Command::Help,
        Command::Interactive,
        Command::Reset,
        Command::New,
        Command::Add,
        Command::List,
        Command::Show,
        Command::Clear,
        Command::Remove,
        Command::Del,
        Command::Quit,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Interactive => "interactive",
            Command::Reset => "reset",
            Command::New => "new",
            Command::Add => "add",
            Command::List => "list",
            Command::Show => "show",
            Command::Clear => "clear",
            Command::Remove => "remove",
            Command::Del => "del",
            Command::Quit => "quit",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Command::Help => "Displays this message. Can also use /h -h and --help",
            Command::Interactive => "Keep prompting for commands until quit. Can also use i",
            Command::Reset => "Flush the store, removing every list and the app name",
            Command::New => "Create new lists, comma separated names",
            Command::Add => "Add comma separated entries to a list",
            Command::List => "List out all entries of a list",
            Command::Show => "Show all defined lists",
            Command::Clear => "Delete every entry of a list",
            Command::Remove => "Remove a list from the registry",
            Command::Del => "Delete an item from a list",
            Command::Quit => "Leave interactive mode. Can also use q or exit",
        }
    }

    /// Whether the first argument may name a registered list. `new` needs it
    /// to report duplicates.
    pub fn takes_list(self) -> bool {
        matches!(
            self,
            Command::New
                | Command::Add
                | Command::List
                | Command::Clear
                | Command::Remove
                | Command::Del
        )
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for Command {
    type Err = AppError;

    /// Maps a normalized keyword (or one of its aliases) to a command.
    fn from_str(keyword: &str) -> Result<Self, Self::Err> {
        match keyword {
            "h" => Ok(Command::Help),
            "q" | "exit" => Ok(Command::Quit),
            other => Command::ALL
                .into_iter()
                .find(|c| c.keyword() == other)
                .ok_or_else(|| AppError::InvalidCommand(other.to_string())),
        }
    }
}

/// Strips the decorator characters anywhere in `raw` and lowercases the rest.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !DECORATORS.contains(c))
        .collect::<String>()
        .to_lowercase()
}

/// Splits on commas or runs of whitespace, dropping empty pieces.
pub fn tokenize(line: &str) -> Vec<String> {
    line.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// One raw command line after normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    /// Nothing but whitespace or decorators was typed.
    Empty,
    /// The normalized line starts with `i`; the rest of the line is ignored.
    EnterInteractive,
    /// A keyword plus whatever tokens followed it on the same line.
    Command { keyword: String, tokens: Vec<String> },
}

impl ParsedLine {
    pub fn parse(raw: &str) -> Self {
        let normalized = normalize(raw);
        let normalized = normalized.trim();
        if normalized.starts_with('i') {
            return ParsedLine::EnterInteractive;
        }

        let mut tokens = tokenize(normalized).into_iter();
        match tokens.next() {
            None => ParsedLine::Empty,
            Some(keyword) => ParsedLine::Command {
                keyword,
                tokens: tokens.collect(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("--List", "list")]
    #[case("-add", "add")]
    #[case("/add", "add")]
    #[case("<s-h/o\\w>", "show")]
    #[case("  CLEAR ", "  clear ")]
    fn test_normalize_strips_decorators(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(normalize(raw), expected);
    }

    #[rstest]
    #[case("help", Command::Help)]
    #[case("h", Command::Help)]
    #[case("q", Command::Quit)]
    #[case("quit", Command::Quit)]
    #[case("exit", Command::Quit)]
    #[case("del", Command::Del)]
    #[case("clear", Command::Clear)]
    fn test_keywords_and_aliases(#[case] keyword: &str, #[case] expected: Command) {
        assert_eq!(keyword.parse::<Command>().unwrap(), expected);
    }

    #[test]
    fn test_unknown_keyword_is_invalid() {
        match "frobnicate".parse::<Command>() {
            Err(AppError::InvalidCommand(k)) => assert_eq!(k, "frobnicate"),
            other => panic!("Expected InvalidCommand, got {:?}", other),
        }
    }

    #[test]
    fn test_every_table_entry_parses_to_itself() {
        for command in Command::ALL {
            assert_eq!(command.keyword().parse::<Command>().unwrap(), command);
        }
    }

    #[test]
    fn test_only_list_commands_take_a_list() {
        let taking: Vec<Command> = Command::ALL.into_iter().filter(|c| c.takes_list()).collect();
        assert_eq!(
            taking,
            vec![
                Command::New,
                Command::Add,
                Command::List,
                Command::Clear,
                Command::Remove,
                Command::Del
            ]
        );
    }

    #[test]
    fn test_tokenize_commas_and_whitespace() {
        assert_eq!(
            tokenize("add todo  buy,milk ,, eggs"),
            vec!["add", "todo", "buy", "milk", "eggs"]
        );
        assert!(tokenize(" , ").is_empty());
    }

    #[rstest]
    #[case("i")]
    #[case("interactive")]
    #[case("-I")]
    // Any line whose first character is `i` switches mode, even an unrelated word.
    #[case("items todo")]
    fn test_leading_i_enters_interactive(#[case] raw: &str) {
        assert_eq!(ParsedLine::parse(raw), ParsedLine::EnterInteractive);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("--")]
    fn test_blank_lines_are_empty(#[case] raw: &str) {
        assert_eq!(ParsedLine::parse(raw), ParsedLine::Empty);
    }

    #[test]
    fn test_decorated_line_parses_like_plain_line() {
        let plain = ParsedLine::parse("add todo buy,milk");
        let decorated = ParsedLine::parse("--ADD <todo> /buy,milk\\");
        assert_eq!(plain, decorated);
        assert_eq!(
            plain,
            ParsedLine::Command {
                keyword: "add".to_string(),
                tokens: vec!["todo".into(), "buy".into(), "milk".into()],
            }
        );
    }
}
