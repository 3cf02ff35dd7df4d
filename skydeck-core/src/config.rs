//! API credentials from the environment
//!
//! Keys are read once at startup. Only the OpenWeatherMap key is
//! required up front; the news and maps keys degrade along their
//! advisory paths when absent.

pub const OPENWEATHER_KEY_VAR: &str = "OPENWEATHER_API_KEY";
pub const GNEWS_KEY_VAR: &str = "GNEWS_API_KEY";
pub const MAPS_KEY_VAR: &str = "GOOGLE_MAPS_API_KEY";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set (get a key at https://openweathermap.org/api)")]
    MissingWeatherKey(&'static str),
}

#[derive(Clone, Debug)]
pub struct Credentials {
    /// Geocoding + weather key.
    pub openweather_key: String,
    /// News key; `None` means the news panel stays empty.
    pub gnews_key: Option<String>,
    /// Static map key; `None` omits the map link.
    pub maps_key: Option<String>,
}

impl Credentials {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let openweather_key =
            get(OPENWEATHER_KEY_VAR).ok_or(ConfigError::MissingWeatherKey(OPENWEATHER_KEY_VAR))?;

        Ok(Self {
            openweather_key,
            gnews_key: get(GNEWS_KEY_VAR),
            maps_key: get(MAPS_KEY_VAR),
        })
    }
}
