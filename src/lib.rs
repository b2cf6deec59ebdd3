//! Pokedex - An interactive PokeAPI explorer
//!
//! Paginates location areas, lists their Pokemon and simulates catches,
//! with API responses kept in a time-expiring in-memory cache.

pub mod cache;
pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod pokeapi;
pub mod repl;
pub mod session;
pub mod tasks;

pub use cache::Cache;
pub use config::Config;
pub use error::{PokedexError, Result};
pub use pokeapi::{PokeApi, PokeApiClient};
pub use repl::run_repl;
pub use session::{CatchRoll, Session};
