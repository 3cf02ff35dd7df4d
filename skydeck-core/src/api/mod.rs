//! Upstream HTTP clients
//!
//! Stateless wrappers around the three JSON APIs plus the static map URL
//! builder. Each client borrows a shared `reqwest::Client` handle and
//! carries its base URL so tests can point it at a local server.

pub mod geocoding;
pub mod news;
pub mod staticmap;
pub mod weather;

pub use geocoding::Geocoder;
pub use news::NewsClient;
pub use staticmap::static_map_url;
pub use weather::{WeatherClient, WeatherError};

use std::time::Duration;

const REQUEST_TIMEOUT_SECS: u64 = 10;
const USER_AGENT: &str = concat!("skydeck/", env!("CARGO_PKG_VERSION"));

/// Shared client for all upstream calls.
pub fn http_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()
}

/// Failure of an advisory fetch (suggestions, news). Never shown to the
/// user; callers log it and fall back.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),
}
