//! Read-eval-print loop
//!
//! Reads one line at a time, tokenizes it and hands it to the dispatcher.
//! A command runs to completion before the next line is read.

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::warn;

use crate::commands::{dispatch, Flow, Output};
use crate::error::Result;
use crate::pokeapi::PokeApi;
use crate::session::Session;

pub const PROMPT: &str = "Pokedex > ";

/// Lowercases `text` and splits it on whitespace.
pub fn clean_input(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Runs the REPL until `exit` or end of input.
///
/// Command failures are printed on one line and the loop continues. Only a
/// failure to read input or write output ends the loop with an error.
pub async fn run_repl<A, R>(session: &mut Session<A>, input: R, out: Output<'_>) -> Result<()>
where
    A: PokeApi,
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            break;
        };

        let tokens = clean_input(&line);
        if tokens.is_empty() {
            continue;
        }

        match dispatch(session, &tokens, out).await {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => break,
            Err(err) => {
                warn!(error = %err, command = %tokens[0], "Command failed");
                writeln!(out, "Error: {}", err)?;
            }
        }
    }

    Ok(())
}
