//! Command table
//!
//! Maps command names to commands and carries the text `help` prints.

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

/// Name, usage line and description of one command.
#[derive(Debug, Clone, Copy)]
pub struct CommandInfo {
    pub name: &'static str,
    pub usage: &'static str,
    pub description: &'static str,
    pub command: Command,
}

/// Every command, in the order `help` lists them.
pub const COMMANDS: &[CommandInfo] = &[
    CommandInfo {
        name: "help",
        usage: "help",
        description: "Displays a help message",
        command: Command::Help,
    },
    CommandInfo {
        name: "exit",
        usage: "exit",
        description: "Exit the Pokedex",
        command: Command::Exit,
    },
    CommandInfo {
        name: "map",
        usage: "map",
        description: "Displays the next page of location areas",
        command: Command::Map,
    },
    CommandInfo {
        name: "mapb",
        usage: "mapb",
        description: "Displays the previous page of location areas (also: map back)",
        command: Command::MapBack,
    },
    CommandInfo {
        name: "explore",
        usage: "explore <location-area>",
        description: "Lists the Pokemon found in a location area",
        command: Command::Explore,
    },
    CommandInfo {
        name: "catch",
        usage: "catch <pokemon>",
        description: "Throws a Pokeball at a Pokemon",
        command: Command::Catch,
    },
    CommandInfo {
        name: "inspect",
        usage: "inspect <pokemon>",
        description: "Shows details of a caught Pokemon",
        command: Command::Inspect,
    },
    CommandInfo {
        name: "pokedex",
        usage: "pokedex",
        description: "Lists every Pokemon you have caught",
        command: Command::Pokedex,
    },
];

impl Command {
    /// Looks up a command by its exact name.
    pub fn lookup(name: &str) -> Option<Self> {
        COMMANDS
            .iter()
            .find(|info| info.name == name)
            .map(|info| info.command)
    }
}
