//! Session state shared by every command handler.
//!
//! One `Session` lives for the whole REPL and is passed `&mut` into each
//! handler, so commands never overlap.

use std::collections::BTreeMap;

use rand::Rng;

use crate::cache::Cache;
use crate::config::Config;
use crate::models::CaughtPokemon;
use crate::pokeapi::PokeApi;

// == Catch Rolls ==
/// Source of catch draws.
pub trait CatchRoll: Send {
    /// Returns a draw in `0..ceiling`. `ceiling` is never zero.
    fn roll(&mut self, ceiling: u32) -> u32;
}

/// Uniform draws from the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngRoll;

impl CatchRoll for ThreadRngRoll {
    fn roll(&mut self, ceiling: u32) -> u32 {
        rand::thread_rng().gen_range(0..ceiling)
    }
}

// == Session ==
/// Mutable state of one Pokedex run.
pub struct Session<A> {
    /// API used on cache misses
    pub api: A,
    /// Response cache keyed by request URL
    pub cache: Cache,
    /// Next location page, set by the last listing fetched
    pub next_url: Option<String>,
    /// Previous location page, set by the last listing fetched
    pub previous_url: Option<String>,
    /// Caught Pokemon keyed by name
    pub pokedex: BTreeMap<String, CaughtPokemon>,
    roller: Box<dyn CatchRoll>,
    catch_ceiling: u32,
}

impl<A: PokeApi> Session<A> {
    /// Creates a session with empty cursors and an empty pokedex.
    pub fn new(api: A, cache: Cache, config: &Config) -> Self {
        Self {
            api,
            cache,
            next_url: None,
            previous_url: None,
            pokedex: BTreeMap::new(),
            roller: Box::new(ThreadRngRoll),
            catch_ceiling: config.catch_ceiling.max(1),
        }
    }

    /// Replaces the source of catch draws.
    pub fn with_roller(mut self, roller: impl CatchRoll + 'static) -> Self {
        self.roller = Box::new(roller);
        self
    }

    /// Draws a catch roll in `0..catch_ceiling`.
    pub fn roll(&mut self) -> u32 {
        let ceiling = self.catch_ceiling;
        self.roller.roll(ceiling)
    }

    /// Whether a Pokemon with this API name is in the pokedex.
    pub fn has_caught(&self, name: &str) -> bool {
        self.pokedex.contains_key(name)
    }
}
