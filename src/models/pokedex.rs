//! Pokedex Module
//!
//! The in-memory collection of caught Pokemon. Lives for one REPL session.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::models::Pokemon;

/// A caught Pokemon and when it was caught.
#[derive(Debug, Clone)]
pub struct CaughtPokemon {
    pub pokemon: Pokemon,
    pub caught_at: DateTime<Utc>,
}

/// Caught Pokemon keyed by name. Catching the same name again replaces the record.
#[derive(Debug, Default)]
pub struct Pokedex {
    entries: HashMap<String, CaughtPokemon>,
}

impl Pokedex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `pokemon` as caught now.
    pub fn insert(&mut self, pokemon: Pokemon) {
        let record = CaughtPokemon {
            caught_at: Utc::now(),
            pokemon,
        };
        self.entries.insert(record.pokemon.name.clone(), record);
    }

    pub fn get(&self, name: &str) -> Option<&CaughtPokemon> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Names of all caught Pokemon, sorted alphabetically.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
