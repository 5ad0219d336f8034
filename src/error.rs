//! Error types for the Pokedex client
//!
//! Provides unified error handling using thiserror. The response cache has no
//! failure modes of its own; everything here comes from the network, decoding,
//! the terminal, or user input.

use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for the Pokedex client.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// Transport failure or non-success HTTP status
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body did not match the expected schema
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Reading input or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A command was invoked without its required argument
    #[error("You must provide {0}")]
    MissingArgument(&'static str),

    /// `map` was called after the last page
    #[error("You're on the last page of locations")]
    NoNextPage,

    /// `mapb` was called on the first page
    #[error("You're on the first page of locations")]
    NoPreviousPage,

    /// The command name is not in the command table
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// `inspect` was called for a Pokemon that is not in the Pokedex
    #[error("You have not caught {0}")]
    NotCaught(String),
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex client.
pub type Result<T> = std::result::Result<T, PokedexError>;
