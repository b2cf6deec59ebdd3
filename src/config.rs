//! Configuration Module
//!
//! Handles loading the Pokedex settings, with optional environment overrides.

use std::env;
use std::time::Duration;

/// Default PokeAPI root
pub const DEFAULT_API_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Pokedex configuration parameters.
///
/// Every value has a default; the environment only overrides.
#[derive(Debug, Clone)]
pub struct Config {
    /// PokeAPI root URL, without a trailing slash
    pub api_base_url: String,
    /// Cache expiry window and reap period in seconds
    pub cache_interval: u64,
    /// Exclusive upper bound of a catch roll
    pub catch_ceiling: u32,
}

impl Config {
    /// Creates a new Config, overriding defaults from environment variables.
    ///
    /// # Environment Variables
    /// - `POKEAPI_BASE_URL` - API root (default: https://pokeapi.co/api/v2)
    /// - `POKEDEX_CACHE_INTERVAL` - Cache expiry in seconds (default: 5)
    /// - `POKEDEX_CATCH_CEILING` - Catch roll upper bound (default: 500)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: env::var("POKEAPI_BASE_URL")
                .ok()
                .map(|v| v.trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.api_base_url),
            cache_interval: env::var("POKEDEX_CACHE_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.cache_interval),
            catch_ceiling: env::var("POKEDEX_CATCH_CEILING")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|v: &u32| *v > 0)
                .unwrap_or(defaults.catch_ceiling),
        }
    }

    /// Cache expiry window as a Duration.
    pub fn cache_interval(&self) -> Duration {
        Duration::from_secs(self.cache_interval)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            cache_interval: 5,
            catch_ceiling: 500,
        }
    }
}
