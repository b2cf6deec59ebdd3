//! Pokemon detail record returned by the `pokemon` endpoint

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::NamedResource;

/// Pokemon detail. `base_experience` doubles as the catch difficulty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    pub name: String,
    /// Null for a handful of forms in the API
    pub base_experience: Option<u32>,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub stats: Vec<PokemonStat>,
    #[serde(default)]
    pub types: Vec<PokemonType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonType {
    pub slot: u32,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

impl Pokemon {
    /// Catch difficulty score. A missing base experience counts as zero.
    pub fn difficulty(&self) -> u32 {
        self.base_experience.unwrap_or(0)
    }
}

/// A Pokemon held in the session's pokedex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaughtPokemon {
    pub pokemon: Pokemon,
    pub caught_at: DateTime<Utc>,
}

impl CaughtPokemon {
    pub fn new(pokemon: Pokemon) -> Self {
        Self {
            pokemon,
            caught_at: Utc::now(),
        }
    }
}
