//! Command Handlers
//!
//! One function per command. Handlers write user-facing text to `out` and
//! return API, decode and I/O failures to the REPL.

use std::future::Future;
use std::io::Write;

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use crate::cache::Cache;
use crate::commands::COMMANDS;
use crate::error::{PokedexError, Result};
use crate::models::{CaughtPokemon, LocationArea, LocationPage, Pokemon};
use crate::pokeapi::{endpoints, PokeApi};
use crate::session::Session;

/// Output sink handed to every handler.
pub type Output<'a> = &'a mut (dyn Write + Send);

// == Cached Fetch ==
/// Returns the record cached under `url`, fetching and caching it on a miss.
///
/// The lock is never held while `fetch` runs. A cached payload that fails to
/// decode is discarded and refetched.
pub async fn fetch_cached<T, F, Fut>(cache: &Cache, url: &str, fetch: F) -> Result<T>
where
    T: Serialize + DeserializeOwned,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    if let Some(bytes) = cache.get(url).await {
        match serde_json::from_slice(&bytes) {
            Ok(record) => {
                debug!(url, "Cache hit");
                return Ok(record);
            }
            Err(e) => warn!(url, error = %e, "Discarding undecodable cache entry"),
        }
    } else {
        debug!(url, "Cache miss");
    }

    let record = fetch().await?;
    let bytes = serde_json::to_vec(&record).map_err(PokedexError::Encode)?;
    cache.add(url, bytes).await;
    Ok(record)
}

// == Catch Rule ==
/// A catch succeeds when the draw beats the difficulty.
pub fn is_caught(roll: u32, difficulty: u32) -> bool {
    roll > difficulty
}

// == Help ==
pub fn help(out: Output<'_>) -> Result<()> {
    writeln!(out, "Welcome to the Pokedex!")?;
    writeln!(out, "Usage:")?;
    writeln!(out)?;
    for info in COMMANDS {
        writeln!(out, "{}: {}", info.usage, info.description)?;
    }
    Ok(())
}

// == Exit ==
pub fn exit(out: Output<'_>) -> Result<()> {
    writeln!(out, "Closing the Pokedex... Goodbye!")?;
    Ok(())
}

// == Map ==
/// Shows the next location page, starting from the first page when no cursor is set.
pub async fn map<A: PokeApi>(session: &mut Session<A>, out: Output<'_>) -> Result<()> {
    let url = session
        .next_url
        .clone()
        .unwrap_or_else(|| endpoints::location_areas(session.api.base_url()));
    show_location_page(session, &url, out).await
}

// == Map Back ==
/// Shows the previous location page. Does nothing on the first page.
pub async fn map_back<A: PokeApi>(session: &mut Session<A>, out: Output<'_>) -> Result<()> {
    let Some(url) = session.previous_url.clone() else {
        writeln!(out, "You're on the first page")?;
        return Ok(());
    };
    show_location_page(session, &url, out).await
}

async fn show_location_page<A: PokeApi>(
    session: &mut Session<A>,
    url: &str,
    out: Output<'_>,
) -> Result<()> {
    let page: LocationPage =
        fetch_cached(&session.cache, url, || session.api.fetch_location_page(url)).await?;

    session.next_url = page.next;
    session.previous_url = page.previous;

    for area in &page.results {
        writeln!(out, "{}", area.name)?;
    }
    Ok(())
}

// == Explore ==
/// Lists the distinct Pokemon in a location area, sorted by name.
pub async fn explore<A: PokeApi>(
    session: &mut Session<A>,
    args: &[String],
    out: Output<'_>,
) -> Result<()> {
    let Some(area_name) = args.first() else {
        writeln!(out, "Usage: explore <location-area>")?;
        return Ok(());
    };

    let url = endpoints::location_area(session.api.base_url(), area_name)?;
    writeln!(out, "Exploring {}...", area_name)?;

    let area: LocationArea =
        fetch_cached(&session.cache, &url, || session.api.fetch_location_area(&url)).await?;

    let names = area.pokemon_names();
    if names.is_empty() {
        writeln!(out, "No Pokemon found")?;
        return Ok(());
    }

    writeln!(out, "Found Pokemon:")?;
    for name in names {
        writeln!(out, " - {}", name)?;
    }
    Ok(())
}

// == Catch ==
/// Throws a Pokeball. The pokedex is keyed by the API's name for the
/// Pokemon, so a name already caught short-circuits without a fetch.
pub async fn catch<A: PokeApi>(
    session: &mut Session<A>,
    args: &[String],
    out: Output<'_>,
) -> Result<()> {
    let Some(name) = args.first() else {
        writeln!(out, "Usage: catch <pokemon>")?;
        return Ok(());
    };

    if session.has_caught(name) {
        writeln!(out, "{} has already been caught!", name)?;
        return Ok(());
    }

    let url = endpoints::pokemon(session.api.base_url(), name)?;
    let pokemon: Pokemon =
        fetch_cached(&session.cache, &url, || session.api.fetch_pokemon(&url)).await?;

    // An id or alternate spelling can resolve to a Pokemon already caught
    if session.has_caught(&pokemon.name) {
        writeln!(out, "{} has already been caught!", pokemon.name)?;
        return Ok(());
    }

    writeln!(out, "Throwing a Pokeball at {}...", pokemon.name)?;
    let roll = session.roll();
    let difficulty = pokemon.difficulty();
    debug!(pokemon = %pokemon.name, roll, difficulty, "Catch attempt");

    if is_caught(roll, difficulty) {
        writeln!(out, "{} was caught!", pokemon.name)?;
        writeln!(out, "You may now inspect it with the inspect command.")?;
        session
            .pokedex
            .insert(pokemon.name.clone(), CaughtPokemon::new(pokemon));
    } else {
        writeln!(out, "{} escaped!", pokemon.name)?;
    }
    Ok(())
}

// == Inspect ==
pub fn inspect<A: PokeApi>(session: &Session<A>, args: &[String], out: Output<'_>) -> Result<()> {
    let Some(name) = args.first() else {
        writeln!(out, "Usage: inspect <pokemon>")?;
        return Ok(());
    };

    let Some(caught) = session.pokedex.get(name) else {
        writeln!(out, "You have not caught {} yet", name)?;
        return Ok(());
    };

    let pokemon = &caught.pokemon;
    writeln!(out, "Name: {}", pokemon.name)?;
    writeln!(out, "Height: {}", pokemon.height)?;
    writeln!(out, "Weight: {}", pokemon.weight)?;
    writeln!(out, "Stats:")?;
    for stat in &pokemon.stats {
        writeln!(out, "  -{}: {}", stat.stat.name, stat.base_stat)?;
    }
    writeln!(out, "Types:")?;
    for kind in &pokemon.types {
        writeln!(out, "  - {}", kind.kind.name)?;
    }
    writeln!(out, "Difficulty: {}", pokemon.difficulty())?;
    writeln!(
        out,
        "Caught at: {}",
        caught.caught_at.format("%Y-%m-%d %H:%M:%S UTC")
    )?;
    Ok(())
}

// == Pokedex ==
pub fn pokedex<A: PokeApi>(session: &Session<A>, out: Output<'_>) -> Result<()> {
    if session.pokedex.is_empty() {
        writeln!(out, "Your Pokedex is empty")?;
        return Ok(());
    }

    writeln!(out, "Your Pokedex:")?;
    for name in session.pokedex.keys() {
        writeln!(out, " - {}", name)?;
    }
    Ok(())
}
