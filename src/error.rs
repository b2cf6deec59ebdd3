//! Error types for the Pokedex
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for API calls, cache encoding and terminal I/O.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// Connection or transport failure while talking to the API
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The API answered with a non-success status
    #[error("Request to {url} failed with status code {status}")]
    Status { status: u16, url: String },

    /// The response body could not be decoded into the expected shape
    #[error("Could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// A fetched record could not be serialized for the cache
    #[error("Could not encode response for caching: {0}")]
    Encode(#[source] serde_json::Error),

    /// Reading input or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The HTTP client could not be constructed
    #[error("Client error: {0}")]
    Client(String),
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex.
pub type Result<T> = std::result::Result<T, PokedexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let err = PokedexError::Status {
            status: 404,
            url: "https://pokeapi.co/api/v2/pokemon/missingno".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Request to https://pokeapi.co/api/v2/pokemon/missingno failed with status code 404"
        );
    }

    #[test]
    fn test_decode_error_mentions_url() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = PokedexError::Decode {
            url: "http://localhost/x".to_string(),
            source,
        };
        assert!(err.to_string().contains("http://localhost/x"));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: PokedexError = io.into();
        assert!(matches!(err, PokedexError::Io(_)));
    }
}
