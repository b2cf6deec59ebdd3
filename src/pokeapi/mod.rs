//! PokeAPI Module
//!
//! HTTP access to the public Pokemon API.
//!
//! # Endpoints
//! - `GET /location-area/` - Paginated location-area listing
//! - `GET /location-area/{name}` - Pokemon encounters in one area
//! - `GET /pokemon/{name}` - Pokemon detail

pub mod client;
pub mod endpoints;

pub use client::{PokeApi, PokeApiClient};
