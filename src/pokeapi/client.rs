//! PokeAPI HTTP client.
//!
//! Issues GET requests and decodes JSON bodies into the typed records.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{PokedexError, Result};
use crate::models::{LocationArea, LocationPage, Pokemon};

const USER_AGENT: &str = concat!("pokedex/", env!("CARGO_PKG_VERSION"));

/// Read-only access to the three PokeAPI endpoint families.
///
/// Every method takes the fully-qualified URL so callers can use it as a cache key.
#[async_trait]
pub trait PokeApi: Send + Sync {
    /// Root URL the endpoint builders start from.
    fn base_url(&self) -> &str;

    async fn fetch_location_page(&self, url: &str) -> Result<LocationPage>;

    async fn fetch_location_area(&self, url: &str) -> Result<LocationArea>;

    async fn fetch_pokemon(&self, url: &str) -> Result<Pokemon>;
}

/// PokeAPI client backed by reqwest.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    client: Client,
    base_url: String,
}

impl PokeApiClient {
    /// Create a client rooted at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| PokedexError::Client(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// GET `url` and decode its JSON body.
    ///
    /// Any status of 300 or above fails the call.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!(url, "GET");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(PokedexError::Network)?;

        let status = response.status();
        if status.as_u16() >= 300 {
            return Err(PokedexError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await.map_err(PokedexError::Network)?;
        serde_json::from_slice(&body).map_err(|source| PokedexError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

#[async_trait]
impl PokeApi for PokeApiClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch_location_page(&self, url: &str) -> Result<LocationPage> {
        self.get_json(url).await
    }

    async fn fetch_location_area(&self, url: &str) -> Result<LocationArea> {
        self.get_json(url).await
    }

    async fn fetch_pokemon(&self, url: &str) -> Result<Pokemon> {
        self.get_json(url).await
    }
}
