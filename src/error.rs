//! Error types for the Pokedex client
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for catalog reads.
///
/// A Pokemon missing from the caught registry is not an error; lookups
/// return `Option` for that case.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// Transport failure or non-success HTTP status
    #[error("error getting data from {url}: {reason}")]
    Network { url: String, reason: String },

    /// Payload does not match the expected structure
    #[error("error decoding data received from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// A fetch was issued without a resource identifier
    #[error("resource identifier must not be empty")]
    EmptyResource,
}

impl PokedexError {
    /// Builds a `Network` error from any displayable transport failure.
    pub fn network(url: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        PokedexError::Network {
            url: url.into(),
            reason: reason.to_string(),
        }
    }
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex client.
pub type Result<T> = std::result::Result<T, PokedexError>;
