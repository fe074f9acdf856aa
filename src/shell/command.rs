//! Shell command grammar
//!
//! One command per line, whitespace separated. Owner and species names
//! are single words. `#` starts a comment.

use std::str::FromStr;

use thiserror::Error;

use crate::roster::RosterFilter;
use crate::tree::TraversalOrder;

/// Parsed shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `new <owner> <starter-choice>`
    NewOwner {
        /// Owner name
        owner: String,
        /// 1-based starter choice
        starter: usize,
    },
    /// `add <owner> <species-id>`
    Add {
        /// Owner name
        owner: String,
        /// Catalog id
        id: u32,
    },
    /// `release <owner> <species>`
    Release {
        /// Owner name
        owner: String,
        /// Species name
        species: String,
    },
    /// `evolve <owner> <species>`
    Evolve {
        /// Owner name
        owner: String,
        /// Species name
        species: String,
    },
    /// `delete <owner>`
    Delete {
        /// Owner name
        owner: String,
    },
    /// `show <owner> [filter]`
    Show {
        /// Owner name
        owner: String,
        /// Display filter, `all` when omitted
        filter: RosterFilter,
    },
    /// `list [bfs|pre|in|post]`
    List(TraversalOrder),
    /// `rank`
    Rank,
    /// `starters`
    Starters,
    /// `help`
    Help,
    /// `quit` / `exit`
    Quit,
}

/// Why a line could not be parsed
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// First word is not a known command
    #[error("unknown command '{0}' (try 'help')")]
    Unknown(String),

    /// Wrong number of arguments
    #[error("usage: {0}")]
    Usage(&'static str),

    /// Numeric argument failed to parse
    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    /// Filter or traversal argument failed to parse
    #[error("{0}")]
    InvalidArgument(String),
}

/// Usage lines, in help order
pub const USAGE: &[&str] = &[
    "new <owner> <starter>",
    "add <owner> <id>",
    "release <owner> <species>",
    "evolve <owner> <species>",
    "delete <owner>",
    "show <owner> [type <T> | evolvable | attack <n> | hp <n> | prefix <p> | all]",
    "list [bfs | pre | in | post]",
    "rank",
    "starters",
    "help",
    "quit",
];

impl Command {
    /// Parse one line; blank lines and comments yield `None`
    pub fn parse_line(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            return Ok(None);
        }
        line.parse().map(Some)
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = s.split_whitespace().collect();
        let Some((&verb, args)) = words.split_first() else {
            return Err(CommandError::Unknown(String::new()));
        };

        match (verb.to_ascii_lowercase().as_str(), args) {
            ("new", [owner, starter]) => Ok(Command::NewOwner {
                owner: owner.to_string(),
                starter: parse_number(starter)?,
            }),
            ("new", _) => Err(CommandError::Usage(USAGE[0])),
            ("add", [owner, id]) => Ok(Command::Add {
                owner: owner.to_string(),
                id: parse_number(id)?,
            }),
            ("add", _) => Err(CommandError::Usage(USAGE[1])),
            ("release", [owner, species]) => Ok(Command::Release {
                owner: owner.to_string(),
                species: species.to_string(),
            }),
            ("release", _) => Err(CommandError::Usage(USAGE[2])),
            ("evolve", [owner, species]) => Ok(Command::Evolve {
                owner: owner.to_string(),
                species: species.to_string(),
            }),
            ("evolve", _) => Err(CommandError::Usage(USAGE[3])),
            ("delete", [owner]) => Ok(Command::Delete {
                owner: owner.to_string(),
            }),
            ("delete", _) => Err(CommandError::Usage(USAGE[4])),
            ("show", [owner, filter @ ..]) => Ok(Command::Show {
                owner: owner.to_string(),
                filter: RosterFilter::from_words(filter).map_err(CommandError::InvalidArgument)?,
            }),
            ("show", _) => Err(CommandError::Usage(USAGE[5])),
            ("list", []) => Ok(Command::List(TraversalOrder::default())),
            ("list", [order]) => order
                .parse()
                .map(Command::List)
                .map_err(CommandError::InvalidArgument),
            ("list", _) => Err(CommandError::Usage(USAGE[6])),
            ("rank", []) => Ok(Command::Rank),
            ("starters", []) => Ok(Command::Starters),
            ("help", _) => Ok(Command::Help),
            ("quit" | "exit", []) => Ok(Command::Quit),
            (other, _) => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn parse_number<T: FromStr>(value: &str) -> Result<T, CommandError> {
    value
        .parse()
        .map_err(|_| CommandError::InvalidNumber(value.to_string()))
}
