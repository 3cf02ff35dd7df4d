//! Weather fetcher: current conditions by city name or coordinates
//!
//! OpenWeatherMap current-weather endpoint, metric units. A non-success
//! status becomes [`WeatherError::NotFound`] carrying the upstream
//! message verbatim; that message is the one error the UI shows.

use serde::Deserialize;
use tracing::debug;

use crate::effect::WeatherQuery;
use crate::state::{Coordinates, WeatherSnapshot};

/// Production endpoint.
pub const OPENWEATHER_API_URL: &str = "https://api.openweathermap.org/data/2.5";

#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    /// The upstream rejected the lookup (unknown city, bad key). The
    /// message is surfaced to the user as-is.
    #[error("{0}")]
    NotFound(String),
    #[error("weather request failed: {0}")]
    Request(#[from] reqwest::Error),
}

// Wire shape of the current-weather response, reduced to what the
// snapshot needs. Unknown fields are ignored.

#[derive(Debug, Deserialize)]
struct WeatherResponse {
    coord: Coord,
    #[serde(default)]
    weather: Vec<Condition>,
    main: MainBlock,
    #[serde(default)]
    visibility: u32,
    wind: Wind,
    clouds: Clouds,
    sys: Sys,
    name: String,
}

#[derive(Debug, Deserialize)]
struct Coord {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Default, Deserialize)]
struct Condition {
    id: u16,
    main: String,
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct MainBlock {
    temp: f64,
    feels_like: f64,
    temp_min: f64,
    temp_max: f64,
    pressure: u32,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct Wind {
    speed: f64,
    #[serde(default)]
    deg: u16,
}

#[derive(Debug, Deserialize)]
struct Clouds {
    all: u8,
}

#[derive(Debug, Deserialize)]
struct Sys {
    #[serde(default)]
    country: String,
    #[serde(default)]
    sunrise: i64,
    #[serde(default)]
    sunset: i64,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

pub struct WeatherClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl WeatherClient {
    pub fn new(client: reqwest::Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            base_url: OPENWEATHER_API_URL.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Point the client at a different server (tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetch current conditions. Coordinates resolve by `lat`/`lon`,
    /// free text by `q`.
    pub async fn current(&self, query: &WeatherQuery) -> Result<WeatherSnapshot, WeatherError> {
        let location = match query {
            WeatherQuery::City(name) => format!("q={}", urlencoding::encode(name)),
            WeatherQuery::Coords(Coordinates { lat, lon }) => format!("lat={lat}&lon={lon}"),
        };
        let url = format!(
            "{}/weather?{}&units=metric&appid={}",
            self.base_url, location, self.api_key
        );

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .map(|body| body.message)
                .unwrap_or_else(|_| format!("weather lookup failed ({status})"));
            return Err(WeatherError::NotFound(message));
        }

        let body: WeatherResponse = response.json().await?;
        debug!(name = %body.name, "weather fetched");
        Ok(snapshot_from(body))
    }
}

fn snapshot_from(body: WeatherResponse) -> WeatherSnapshot {
    let condition = body.weather.into_iter().next().unwrap_or_default();
    WeatherSnapshot {
        name: body.name,
        country: body.sys.country,
        coords: Coordinates {
            lat: body.coord.lat,
            lon: body.coord.lon,
        },
        temperature: body.main.temp,
        feels_like: body.main.feels_like,
        temp_min: body.main.temp_min,
        temp_max: body.main.temp_max,
        humidity: body.main.humidity,
        pressure: body.main.pressure,
        visibility: body.visibility,
        cloud_cover: body.clouds.all,
        wind_speed: body.wind.speed,
        wind_deg: body.wind.deg,
        sunrise: body.sys.sunrise,
        sunset: body.sys.sunset,
        condition_id: condition.id,
        condition: condition.main,
        description: condition.description,
        icon: condition.icon,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONDON: &str = r#"{
        "coord":{"lon":-0.1257,"lat":51.5085},
        "weather":[{"id":803,"main":"Clouds","description":"broken clouds","icon":"04d"}],
        "base":"stations",
        "main":{"temp":17.4,"feels_like":17.1,"temp_min":15.9,"temp_max":18.8,"pressure":1012,"humidity":76},
        "visibility":10000,
        "wind":{"speed":4.12,"deg":240},
        "clouds":{"all":75},
        "dt":1726570800,
        "sys":{"type":2,"id":2075535,"country":"GB","sunrise":1726550622,"sunset":1726595563},
        "timezone":3600,
        "id":2643743,
        "name":"London",
        "cod":200
    }"#;

    #[test]
    fn test_snapshot_from_response() {
        let body: WeatherResponse = serde_json::from_str(LONDON).unwrap();
        let snapshot = snapshot_from(body);

        assert_eq!(snapshot.name, "London");
        assert_eq!(snapshot.country, "GB");
        assert_eq!(snapshot.temperature, 17.4);
        assert_eq!(snapshot.feels_like, 17.1);
        assert_eq!(snapshot.humidity, 76);
        assert_eq!(snapshot.pressure, 1012);
        assert_eq!(snapshot.visibility, 10000);
        assert_eq!(snapshot.cloud_cover, 75);
        assert_eq!(snapshot.wind_deg, 240);
        assert_eq!(snapshot.sunrise, 1726550622);
        assert_eq!(snapshot.condition, "Clouds");
        assert_eq!(snapshot.description, "broken clouds");
        assert_eq!(snapshot.icon, "04d");
        assert!((snapshot.coords.lat - 51.5085).abs() < 1e-9);
    }

    #[test]
    fn test_snapshot_tolerates_missing_condition() {
        let raw = r#"{
            "coord":{"lon":0.0,"lat":0.0},
            "main":{"temp":1.0,"feels_like":1.0,"temp_min":1.0,"temp_max":1.0,"pressure":1000,"humidity":50},
            "wind":{"speed":1.0},
            "clouds":{"all":0},
            "sys":{},
            "name":"Nowhere"
        }"#;
        let body: WeatherResponse = serde_json::from_str(raw).unwrap();
        let snapshot = snapshot_from(body);

        assert_eq!(snapshot.condition, "");
        assert_eq!(snapshot.visibility, 0);
        assert_eq!(snapshot.wind_deg, 0);
    }

    #[test]
    fn test_error_body_parse() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"cod":"404","message":"city not found"}"#).unwrap();
        assert_eq!(body.message, "city not found");
    }
}
