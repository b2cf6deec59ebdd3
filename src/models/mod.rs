//! PokeAPI records
//!
//! Typed shapes of the JSON bodies the Pokedex fetches. Every record
//! serializes back to JSON so it can be stored in the response cache.

pub mod location;
pub mod pokemon;

// Re-export commonly used types
pub use location::{LocationArea, LocationPage, NamedResource, PokemonEncounter};
pub use pokemon::{CaughtPokemon, Pokemon, PokemonStat, PokemonType};
