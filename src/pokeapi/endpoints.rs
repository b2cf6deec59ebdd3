//! PokeAPI URL builders.
//!
//! The full URL is also the cache key, so every caller must build it here.

use reqwest::Url;

use crate::error::{PokedexError, Result};

/// First page of the location-area listing.
pub fn location_areas(base_url: &str) -> String {
    format!("{}/location-area/", base_url.trim_end_matches('/'))
}

/// Detail of one location area by name or id.
pub fn location_area(base_url: &str, name: &str) -> Result<String> {
    detail(base_url, "location-area", name)
}

/// Detail of one Pokemon by name or id.
pub fn pokemon(base_url: &str, name: &str) -> Result<String> {
    detail(base_url, "pokemon", name)
}

/// Appends `resource/name` to the base path, percent-encoding `name` as a
/// single segment.
fn detail(base_url: &str, resource: &str, name: &str) -> Result<String> {
    let invalid = || PokedexError::Client(format!("Invalid API base URL: {}", base_url));

    let mut url = Url::parse(base_url).map_err(|_| invalid())?;
    url.path_segments_mut()
        .map_err(|_| invalid())?
        .pop_if_empty()
        .push(resource)
        .push(name);
    Ok(url.into())
}
