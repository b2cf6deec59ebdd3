//! Commands Module
//!
//! Command table, handlers and the dispatcher the REPL calls.
//!
//! # Commands
//! - `help`, `exit`
//! - `map`, `mapb` / `map back` - Location pagination
//! - `explore <area>` - Pokemon in a location area
//! - `catch <pokemon>`, `inspect <pokemon>`, `pokedex`

pub mod handlers;
pub mod registry;

pub use handlers::{fetch_cached, is_caught, Output};
pub use registry::{Command, CommandInfo, COMMANDS};

use std::io::Write;

use tracing::debug;

use crate::error::Result;
use crate::pokeapi::PokeApi;
use crate::session::Session;

/// What the REPL should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Runs the command named by the first token with the remaining tokens as arguments.
///
/// Unknown commands print `Unknown command` and leave the session untouched.
/// Empty input does nothing.
pub async fn dispatch<A: PokeApi>(
    session: &mut Session<A>,
    tokens: &[String],
    out: Output<'_>,
) -> Result<Flow> {
    let Some((name, args)) = tokens.split_first() else {
        return Ok(Flow::Continue);
    };

    let Some(command) = Command::lookup(name) else {
        writeln!(out, "Unknown command")?;
        return Ok(Flow::Continue);
    };
    debug!(?command, ?args, "Dispatching");

    match command {
        Command::Help => handlers::help(out)?,
        Command::Exit => {
            handlers::exit(out)?;
            return Ok(Flow::Exit);
        }
        Command::Map if args.first().is_some_and(|arg| arg == "back") => {
            handlers::map_back(session, out).await?
        }
        Command::Map => handlers::map(session, out).await?,
        Command::MapBack => handlers::map_back(session, out).await?,
        Command::Explore => handlers::explore(session, args, out).await?,
        Command::Catch => handlers::catch(session, args, out).await?,
        Command::Inspect => handlers::inspect(session, args, out)?,
        Command::Pokedex => handlers::pokedex(session, out)?,
    }

    Ok(Flow::Continue)
}
