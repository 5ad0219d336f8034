//! Configuration Module
//!
//! Handles loading client configuration from environment variables.

use std::env;
use std::time::Duration;

/// Default PokeAPI endpoint.
pub const DEFAULT_API_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Client configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Response cache lifetime and sweep period in seconds
    pub cache_interval: u64,
    /// HTTP request timeout in seconds
    pub http_timeout: u64,
    /// Base URL of the API, without a trailing slash
    pub api_base_url: String,
    /// Highest catch roll that still counts as a catch
    pub catch_threshold: u32,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POKEDEX_CACHE_INTERVAL` - Cache entry lifetime in seconds (default: 5)
    /// - `POKEDEX_HTTP_TIMEOUT` - HTTP timeout in seconds (default: 5)
    /// - `POKEDEX_API_BASE_URL` - API base URL (default: https://pokeapi.co/api/v2)
    /// - `POKEDEX_CATCH_THRESHOLD` - Highest roll that catches (default: 40)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            cache_interval: parse_var("POKEDEX_CACHE_INTERVAL").unwrap_or(defaults.cache_interval),
            http_timeout: parse_var("POKEDEX_HTTP_TIMEOUT").unwrap_or(defaults.http_timeout),
            api_base_url: env::var("POKEDEX_API_BASE_URL")
                .ok()
                .map(|url| url.trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty())
                .unwrap_or(defaults.api_base_url),
            catch_threshold: parse_var("POKEDEX_CATCH_THRESHOLD")
                .unwrap_or(defaults.catch_threshold),
        }
    }

    /// Cache interval as a `Duration`.
    pub fn cache_interval(&self) -> Duration {
        Duration::from_secs(self.cache_interval)
    }

    /// HTTP timeout as a `Duration`.
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout)
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_interval: 5,
            http_timeout: 5,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            catch_threshold: 40,
        }
    }
}
