//! API Module
//!
//! HTTP access to PokeAPI. Every GET goes through the response cache first.
//!
//! # Endpoints
//! - `GET /location-area/` - Paginated location areas
//! - `GET /location-area/:name` - Pokemon encounters in one area
//! - `GET /pokemon/:name` - Pokemon details

pub mod client;

pub use client::PokeApiClient;
