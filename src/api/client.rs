//! PokeAPI Client
//!
//! Fetches raw response bodies through the response cache and decodes them
//! into the typed models.

use std::time::Duration;

use bytes::Bytes;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::cache::ResponseCache;
use crate::config::Config;
use crate::error::Result;
use crate::models::{LocationArea, LocationAreaPage, Pokemon};

/// HTTP client for PokeAPI with a response cache keyed by request URL.
#[derive(Debug)]
pub struct PokeApiClient {
    http: reqwest::Client,
    base_url: String,
    cache: ResponseCache,
}

impl PokeApiClient {
    // == Constructor ==
    /// Creates a client for `base_url` whose requests time out after `timeout`.
    ///
    /// Must be called from within a Tokio runtime, which drives the cache's
    /// reaper.
    pub fn new(base_url: impl Into<String>, timeout: Duration, cache: ResponseCache) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self {
            http,
            base_url,
            cache,
        })
    }

    /// Creates a client and its cache from the loaded configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let cache = ResponseCache::new(config.cache_interval());
        Self::new(config.api_base_url.clone(), config.http_timeout(), cache)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    /// URL of the first page of location areas.
    pub fn first_locations_url(&self) -> String {
        format!("{}/location-area/", self.base_url)
    }

    // == Fetch ==
    /// Returns the body for `url`, from the cache when present.
    ///
    /// On a miss the body is fetched, stored under `url` and returned. Error
    /// statuses fail the call and are never cached.
    #[instrument(skip(self))]
    pub async fn fetch(&self, url: &str) -> Result<Bytes> {
        if let Some(body) = self.cache.get(url) {
            debug!("cache hit");
            return Ok(body);
        }

        debug!("cache miss, fetching");
        let body = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        self.cache.add(url, body.clone());
        Ok(body)
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = self.fetch(url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    // == Endpoints ==
    /// Fetches one page of location areas. `url` is a page cursor taken from
    /// `first_locations_url` or a previous page's `next`/`previous`.
    pub async fn location_areas(&self, url: &str) -> Result<LocationAreaPage> {
        self.fetch_json(url).await
    }

    /// Fetches the location area called `area`.
    pub async fn location_area(&self, area: &str) -> Result<LocationArea> {
        let url = format!("{}/location-area/{}", self.base_url, area);
        self.fetch_json(&url).await
    }

    /// Fetches the Pokemon called `name`.
    pub async fn pokemon(&self, name: &str) -> Result<Pokemon> {
        let url = format!("{}/pokemon/{}", self.base_url, name);
        self.fetch_json(&url).await
    }
}
