//! Response DTOs for PokeAPI
//!
//! Defines the subset of each response body the client reads. Unknown fields
//! are ignored by serde.

use serde::{Deserialize, Serialize};

/// A `{ name, url }` reference to another API resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// One page of the location-area listing (GET /location-area/)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationAreaPage {
    /// Total number of location areas across all pages
    pub count: u32,
    /// URL of the next page, absent on the last page
    pub next: Option<String>,
    /// URL of the previous page, absent on the first page
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

impl LocationAreaPage {
    /// Names of the location areas on this page, in API order.
    pub fn names(&self) -> Vec<String> {
        self.results.iter().map(|area| area.name.clone()).collect()
    }
}

/// A single location area (GET /location-area/:name)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationArea {
    #[serde(default)]
    pub name: String,
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

impl LocationArea {
    /// Names of every Pokemon that can be encountered here.
    pub fn pokemon_names(&self) -> Vec<String> {
        self.pokemon_encounters
            .iter()
            .map(|encounter| encounter.pokemon.name.clone())
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonEncounter {
    pub pokemon: NamedResource,
}

/// A Pokemon (GET /pokemon/:name)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    /// Experience granted for defeating it; null for some forms
    pub base_experience: Option<u32>,
    /// Height in decimetres
    #[serde(default)]
    pub height: u32,
    /// Weight in hectograms
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub stats: Vec<PokemonStat>,
    #[serde(default)]
    pub types: Vec<PokemonType>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonType {
    pub slot: u32,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}
