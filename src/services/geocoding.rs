use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use crate::models::Coordinates;

/// Errors that can occur when resolving a location
#[derive(Debug, Error)]
pub enum GeocodingError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("location not found: {0}")]
    NotFound(String),

    #[error("invalid response format: {0}")]
    InvalidResponse(String),
}

impl GeocodingError {
    /// Lookup misses are recoverable: callers drop the proximity constraint
    /// and surface the message instead of failing the search
    pub fn is_not_found(&self) -> bool {
        matches!(self, GeocodingError::NotFound(_))
    }
}

/// One hit from a Nominatim-style search endpoint; coordinates arrive as
/// strings
#[derive(Debug, Deserialize)]
struct GeocodeHit {
    lat: String,
    lon: String,
}

/// Client for the external geocoding service.
///
/// One best-effort request per lookup: a free-text place resolves to a
/// coordinate or a `NotFound`. The filter engine never calls this service;
/// handlers feed the resulting coordinate into an ordinary filter call.
pub struct GeocodingClient {
    base_url: String,
    user_agent: String,
    client: Client,
}

impl GeocodingClient {
    pub fn new(base_url: String, user_agent: String, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            user_agent,
            client,
        }
    }

    /// Resolve a free-text place name to coordinates
    pub async fn lookup(&self, query: &str) -> Result<Coordinates, GeocodingError> {
        let url = format!(
            "{}/search?q={}&format=json&limit=1",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(query)
        );

        tracing::debug!("Geocoding lookup: {}", url);

        let response = self
            .client
            .get(&url)
            .header("User-Agent", &self.user_agent)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GeocodingError::ApiError(format!(
                "geocoding request failed: {}",
                response.status()
            )));
        }

        let hits: Vec<GeocodeHit> = response.json().await?;

        let hit = hits
            .first()
            .ok_or_else(|| GeocodingError::NotFound(query.to_string()))?;

        let latitude = hit
            .lat
            .parse()
            .map_err(|_| GeocodingError::InvalidResponse(format!("bad latitude: {}", hit.lat)))?;
        let longitude = hit
            .lon
            .parse()
            .map_err(|_| GeocodingError::InvalidResponse(format!("bad longitude: {}", hit.lon)))?;

        Ok(Coordinates {
            latitude,
            longitude,
        })
    }
}
