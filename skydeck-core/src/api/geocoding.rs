//! Geocoding resolver: partial text to ranked place candidates
//!
//! Uses the OpenWeatherMap direct geocoding endpoint. Purely
//! request/response; the orchestrator decides whether a response is
//! still current.

use tracing::debug;

use super::ApiError;
use crate::state::{PlaceSuggestion, MAX_SUGGESTIONS};

/// Production endpoint.
pub const OPENWEATHER_GEO_URL: &str = "https://api.openweathermap.org/geo/1.0";

pub struct Geocoder {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl Geocoder {
    pub fn new(client: reqwest::Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            base_url: OPENWEATHER_GEO_URL.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Point the resolver at a different server (tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Resolve partial text to at most [`MAX_SUGGESTIONS`] candidates.
    ///
    /// Empty or whitespace-only input returns an empty list without a
    /// network call.
    pub async fn resolve(&self, query: &str) -> Result<Vec<PlaceSuggestion>, ApiError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let url = format!(
            "{}/direct?q={}&limit={}&appid={}",
            self.base_url,
            urlencoding::encode(query),
            MAX_SUGGESTIONS,
            self.api_key
        );

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }

        let mut places: Vec<PlaceSuggestion> = response.json().await?;
        places.truncate(MAX_SUGGESTIONS);
        debug!(query, count = places.len(), "resolved suggestions");
        Ok(places)
    }
}

#[cfg(test)]
mod tests {
    use crate::state::PlaceSuggestion;

    #[test]
    fn test_parse_geocoding_response() {
        let raw = r#"[
            {"name":"London","local_names":{"en":"London"},"lat":51.5073219,"lon":-0.1276474,"country":"GB","state":"England"},
            {"name":"London","lat":42.9836747,"lon":-81.2496068,"country":"CA","state":"Ontario"}
        ]"#;

        let places: Vec<PlaceSuggestion> = serde_json::from_str(raw).unwrap();
        assert_eq!(places.len(), 2);
        assert_eq!(places[0].name, "London");
        assert_eq!(places[0].country, "GB");
        assert!((places[1].lat - 42.9836747).abs() < 1e-9);
    }

    #[test]
    fn test_parse_tolerates_missing_country() {
        let raw = r#"[{"name":"Somewhere","lat":1.0,"lon":2.0}]"#;
        let places: Vec<PlaceSuggestion> = serde_json::from_str(raw).unwrap();
        assert_eq!(places[0].country, "");
    }
}
