//! Command table
//!
//! Maps the first word of an input line to a [`Command`].

use thiserror::Error;

/// A parsed REPL command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    Map,
    MapBack,
    Explore(String),
    Catch(String),
    Inspect(String),
    Pokedex,
    Cache,
}

/// Errors that can occur when parsing an input line
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command")]
    Unknown(String),

    #[error("usage: {0}")]
    MissingArgument(&'static str),
}

/// Name, usage line and description of one command, for `help`.
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    pub name: &'static str,
    pub usage: &'static str,
    pub description: &'static str,
}

pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "help",
        usage: "help",
        description: "Displays a help message",
    },
    CommandSpec {
        name: "exit",
        usage: "exit",
        description: "Exit the Pokedex",
    },
    CommandSpec {
        name: "map",
        usage: "map",
        description: "Pages forward through location areas",
    },
    CommandSpec {
        name: "mapb",
        usage: "mapb",
        description: "Pages backward through location areas",
    },
    CommandSpec {
        name: "explore",
        usage: "explore <area>",
        description: "Lists the Pokemon found in a location area",
    },
    CommandSpec {
        name: "catch",
        usage: "catch <pokemon>",
        description: "Throws a Pokeball at a Pokemon",
    },
    CommandSpec {
        name: "inspect",
        usage: "inspect <pokemon>",
        description: "Shows details of a caught Pokemon",
    },
    CommandSpec {
        name: "pokedex",
        usage: "pokedex",
        description: "Lists caught Pokemon",
    },
    CommandSpec {
        name: "cache",
        usage: "cache",
        description: "Shows response cache statistics",
    },
];

impl Command {
    /// Parses cleaned input words. Extra words after the argument are ignored.
    ///
    /// Returns `Ok(None)` for an empty line.
    pub fn parse(words: &[String]) -> Result<Option<Command>, CommandError> {
        let Some((name, args)) = words.split_first() else {
            return Ok(None);
        };
        let arg = |usage: &'static str| {
            args.first()
                .cloned()
                .ok_or(CommandError::MissingArgument(usage))
        };

        let command = match name.as_str() {
            "help" => Command::Help,
            "exit" => Command::Exit,
            "map" => Command::Map,
            "mapb" => Command::MapBack,
            "explore" => Command::Explore(arg("explore <area>")?),
            "catch" => Command::Catch(arg("catch <pokemon>")?),
            "inspect" => Command::Inspect(arg("inspect <pokemon>")?),
            "pokedex" => Command::Pokedex,
            "cache" => Command::Cache,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(Some(command))
    }
}
