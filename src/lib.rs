//! Pokedex CLI - An interactive PokeAPI client
//!
//! Browses location areas, explores them and catches Pokemon, memoizing every
//! API response in a TTL cache swept by a background task.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod repl;
pub mod tasks;

pub use api::PokeApiClient;
pub use cache::ResponseCache;
pub use config::Config;
pub use error::{PokedexError, Result};
pub use repl::Session;
