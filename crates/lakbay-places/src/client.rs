//! HTTP client for the Google Places nearby-search API.
//!
//! Wraps `reqwest` with the adapter's error taxonomy, a fixed request
//! timeout, and a TTL response cache keyed by (origin, keyword, radius).
//! A cache miss performs exactly one provider call; there are no retries.

use std::time::Duration;

use reqwest::{Client, Url};

use lakbay_core::{AppConfig, PlaceQuery, PlaceRecord};

use crate::cache::ResponseCache;
use crate::error::{PlacesError, TransportError};
use crate::normalize::normalize_results;
use crate::types::NearbySearchResponse;

const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com";
const NEARBY_SEARCH_PATH: &str = "/maps/api/place/nearbysearch/json";

/// Tunables for the places client, usually derived from [`AppConfig`].
#[derive(Debug, Clone)]
pub struct PlacesConfig {
    pub timeout_secs: u64,
    pub cache_ttl_secs: u64,
    /// Response language code sent with every request.
    pub language: String,
}

impl PlacesConfig {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            timeout_secs: config.places_timeout_secs,
            cache_ttl_secs: config.places_cache_ttl_secs,
            language: config.places_language.clone(),
        }
    }
}

/// Client for the Google Places nearby-search endpoint.
///
/// Use [`PlacesClient::new`] for production or
/// [`PlacesClient::with_base_url`] to point at a mock server in tests.
pub struct PlacesClient {
    client: Client,
    api_key: String,
    base_url: Url,
    language: String,
    timeout_secs: u64,
    cache: ResponseCache,
}

impl PlacesClient {
    /// Creates a client pointed at the production Google Places API.
    ///
    /// The caller supplies the provider credential; validating its presence
    /// is a startup concern, not this client's.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Transport`] if the underlying
    /// `reqwest::Client` cannot be constructed.
    pub fn new(api_key: &str, config: &PlacesConfig) -> Result<Self, PlacesError> {
        Self::with_base_url(api_key, config, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Transport`] if the HTTP client cannot be
    /// constructed or `base_url` is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        config: &PlacesConfig,
        base_url: &str,
    ) -> Result<Self, PlacesError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("lakbay/0.1 (cebu-place-recommendations)")
            .build()
            .map_err(TransportError::Http)?;

        let base_url = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|e| TransportError::BaseUrl(format!("{base_url}: {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
            language: config.language.clone(),
            timeout_secs: config.timeout_secs,
            cache: ResponseCache::new(Duration::from_secs(config.cache_ttl_secs)),
        })
    }

    /// Runs a nearby search, serving from the response cache when possible.
    ///
    /// On `OK` or `ZERO_RESULTS` the provider items are normalized into
    /// [`PlaceRecord`]s (an empty list is a success, not an error) and the
    /// result is cached. Failures are never cached.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::Provider`] for any other provider status.
    /// - [`PlacesError::Timeout`] when the request exceeds the deadline.
    /// - [`PlacesError::Transport`] for network failures, non-2xx HTTP
    ///   statuses, and malformed bodies.
    pub async fn nearby_search(
        &self,
        query: &PlaceQuery,
    ) -> Result<Vec<PlaceRecord>, PlacesError> {
        if let Some(records) = self.cache.get(query) {
            tracing::debug!(
                keyword = %query.keyword,
                radius_m = query.radius_m,
                count = records.len(),
                "places cache hit"
            );
            return Ok(records);
        }

        let url = self.build_url(query);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(e))?
            .error_for_status()
            .map_err(|e| self.map_reqwest_error(e))?;

        let body = response
            .text()
            .await
            .map_err(|e| self.map_reqwest_error(e))?;
        let parsed: NearbySearchResponse =
            serde_json::from_str(&body).map_err(|e| TransportError::Decode {
                context: format!("nearby_search(keyword={})", query.keyword),
                source: e,
            })?;

        match parsed.status.as_str() {
            "OK" | "ZERO_RESULTS" => {
                let records = normalize_results(query.origin, parsed.results);
                tracing::info!(
                    keyword = %query.keyword,
                    radius_m = query.radius_m,
                    count = records.len(),
                    "places lookup succeeded"
                );
                self.cache.store(query, records.clone());
                Ok(records)
            }
            status => {
                let message = parsed
                    .error_message
                    .unwrap_or_else(|| status.to_string());
                tracing::warn!(%status, %message, "places provider rejected the request");
                Err(PlacesError::Provider {
                    status: status.to_string(),
                    message,
                })
            }
        }
    }

    /// Timeouts get their own variant; everything else reqwest reports is
    /// a transport failure.
    fn map_reqwest_error(&self, e: reqwest::Error) -> PlacesError {
        if e.is_timeout() {
            PlacesError::Timeout {
                secs: self.timeout_secs,
            }
        } else {
            PlacesError::Transport(TransportError::Http(e))
        }
    }

    /// Builds the request URL with percent-encoded query parameters via
    /// [`Url::query_pairs_mut`].
    fn build_url(&self, query: &PlaceQuery) -> Url {
        let mut url = self.base_url.clone();
        url.set_path(NEARBY_SEARCH_PATH);
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair(
                "location",
                &format!("{},{}", query.origin.lat, query.origin.lng),
            );
            pairs.append_pair("radius", &query.radius_m.to_string());
            pairs.append_pair("keyword", &query.keyword);
            pairs.append_pair("language", &self.language);
            pairs.append_pair("key", &self.api_key);
        }
        url
    }
}
