//! Models for the PokeAPI client
//!
//! This module defines the response schemas decoded from PokeAPI and the
//! session's collection of caught Pokemon.

pub mod pokedex;
pub mod responses;

// Re-export commonly used types
pub use pokedex::{CaughtPokemon, Pokedex};
pub use responses::{
    LocationArea, LocationAreaPage, NamedResource, Pokemon, PokemonEncounter, PokemonStat,
    PokemonType,
};
