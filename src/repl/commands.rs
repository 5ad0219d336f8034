//! Command Table
//!
//! The fixed set of REPL commands, their names and help text.

use std::fmt;
use std::str::FromStr;

use crate::error::PokedexError;

/// A REPL command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    Map,
    MapBack,
    Explore,
    Catch,
    Inspect,
    Pokedex,
}

impl Command {
    /// Every command, in the order `help` lists them.
    pub const ALL: [Command; 8] = [
        Command::Help,
        Command::Exit,
        Command::Map,
        Command::MapBack,
        Command::Explore,
        Command::Catch,
        Command::Inspect,
        Command::Pokedex,
    ];

    /// The word typed to invoke the command.
    pub fn name(self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Exit => "exit",
            Command::Map => "map",
            Command::MapBack => "mapb",
            Command::Explore => "explore",
            Command::Catch => "catch",
            Command::Inspect => "inspect",
            Command::Pokedex => "pokedex",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Command::Help => "Displays a help message",
            Command::Exit => "Exit the Pokedex",
            Command::Map => {
                "Displays the names of 20 location areas. Each subsequent call displays the next 20"
            }
            Command::MapBack => "Displays the names of the previous 20 location areas",
            Command::Explore => "Takes a location area name. Lists the Pokemon found there",
            Command::Catch => {
                "Takes a Pokemon name and throws a Pokeball. Difficulty scales with base experience"
            }
            Command::Inspect => "Takes the name of a caught Pokemon and shows its details",
            Command::Pokedex => "Lists every Pokemon you have caught",
        }
    }
}

impl FromStr for Command {
    type Err = PokedexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|command| command.name() == s)
            .ok_or_else(|| PokedexError::UnknownCommand(s.to_string()))
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
