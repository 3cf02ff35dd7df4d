//! Application state - single source of truth
//!
//! Components receive `&AppState` as props; only the reducer mutates it.
//! Everything that downstream fetches produce is replaced wholesale, never
//! merged, so a render is always a pure function of the latest state.

use serde::Deserialize;

use crate::theme::ThemePreference;

/// Hard cap on the suggestion dropdown, matching the resolver's `limit`.
pub const MAX_SUGGESTIONS: usize = 5;

/// A geographic point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// The search input as the user sees it.
///
/// `picked` is set only by choosing a suggestion. Every user edit clears
/// it: typed text is no longer guaranteed to match a resolved place, so
/// the next submit falls back to resolving by name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryState {
    pub text: String,
    pub picked: Option<Coordinates>,
}

/// One autocomplete candidate from the geocoding resolver.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PlaceSuggestion {
    pub name: String,
    #[serde(default)]
    pub country: String,
    pub lat: f64,
    pub lon: f64,
}

impl PlaceSuggestion {
    /// Display label, e.g. "Paris, FR".
    pub fn label(&self) -> String {
        if self.country.is_empty() {
            self.name.clone()
        } else {
            format!("{}, {}", self.name, self.country)
        }
    }
}

/// Current conditions for one location at fetch time.
#[derive(Clone, Debug, PartialEq)]
pub struct WeatherSnapshot {
    pub name: String,
    pub country: String,
    pub coords: Coordinates,
    /// Celsius.
    pub temperature: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    /// Percent.
    pub humidity: u8,
    /// hPa.
    pub pressure: u32,
    /// Meters.
    pub visibility: u32,
    /// Percent.
    pub cloud_cover: u8,
    /// Meters per second.
    pub wind_speed: f64,
    /// Degrees, meteorological.
    pub wind_deg: u16,
    /// Unix seconds, UTC.
    pub sunrise: i64,
    pub sunset: i64,
    /// Upstream condition code.
    pub condition_id: u16,
    /// Condition group, e.g. "Clear", "Rain".
    pub condition: String,
    pub description: String,
    /// Upstream icon code, e.g. "01d".
    pub icon: String,
}

impl Default for WeatherSnapshot {
    fn default() -> Self {
        Self {
            name: String::new(),
            country: String::new(),
            coords: Coordinates { lat: 0.0, lon: 0.0 },
            temperature: 0.0,
            feels_like: 0.0,
            temp_min: 0.0,
            temp_max: 0.0,
            humidity: 0,
            pressure: 0,
            visibility: 0,
            cloud_cover: 0,
            wind_speed: 0.0,
            wind_deg: 0,
            sunrise: 0,
            sunset: 0,
            condition_id: 800,
            condition: "Clear".into(),
            description: String::new(),
            icon: "01d".into(),
        }
    }
}

/// One headline from the news fetcher.
#[derive(Clone, Debug, PartialEq)]
pub struct NewsArticle {
    pub title: String,
    pub url: String,
    pub source: String,
    pub published_at: chrono::DateTime<chrono::Utc>,
}

/// Outcome of the latest completed lookup cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LookupOutcome {
    Success,
    Failure,
}

/// Where the search pipeline currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SearchPhase {
    /// Nothing typed yet.
    #[default]
    Idle,
    /// Text edited, resolution may be in flight.
    Typing,
    /// A suggestion list is on screen.
    SuggestionsShown,
    /// A weather fetch is outstanding.
    Submitting,
    /// The latest cycle finished, one way or the other.
    Displaying(LookupOutcome),
}

/// Application state - everything the UI needs to render.
#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    pub query: QueryState,
    /// Replaced wholesale on each resolver response, capped at
    /// [`MAX_SUGGESTIONS`]. Cleared when the text empties or a
    /// suggestion is picked.
    pub suggestions: Vec<PlaceSuggestion>,
    /// Highlighted row in the dropdown.
    pub suggestion_cursor: usize,
    pub phase: SearchPhase,
    /// Last successful snapshot for the current cycle, if any.
    pub weather: Option<WeatherSnapshot>,
    /// Headlines for the same cycle as `weather`; may arrive later.
    pub news: Vec<NewsArticle>,
    /// The single visible error message, if the last cycle failed.
    pub error: Option<String>,
    /// City text as it was at the latest submit; keys the news fetch
    /// and the panel header.
    pub submitted_city: Option<String>,
    /// Monotonically increasing tag for submit cycles. Results carrying
    /// an older tag are discarded by the reducer.
    pub submit_seq: u64,
    pub theme: ThemePreference,
    /// Spinner frame counter while submitting.
    pub tick_count: u32,
}

impl AppState {
    pub fn new(theme: ThemePreference) -> Self {
        Self {
            query: QueryState::default(),
            suggestions: Vec::new(),
            suggestion_cursor: 0,
            phase: SearchPhase::Idle,
            weather: None,
            news: Vec::new(),
            error: None,
            submitted_city: None,
            submit_seq: 0,
            theme,
            tick_count: 0,
        }
    }

    /// Pre-fill the search bar, e.g. from a `--city` flag.
    pub fn with_query(mut self, text: impl Into<String>) -> Self {
        self.query.text = text.into();
        self
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ThemePreference::Dark)
    }
}
