//! Effects - side effects declared by the reducer
//!
//! Effects are returned from the reducer and handled by the runtime.
//! This keeps the reducer pure while making async operations explicit.

use crate::state::Coordinates;
use crate::theme::ThemePreference;

/// How the weather fetch should resolve its location.
///
/// Coordinates win when the user picked a suggestion; free text falls
/// back to resolution by name upstream.
#[derive(Clone, Debug, PartialEq)]
pub enum WeatherQuery {
    City(String),
    Coords(Coordinates),
}

/// Side effects the reducer can request.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Resolve autocomplete candidates for the given text.
    ResolveSuggestions { query: String },

    /// Drop any in-flight suggestion resolution.
    CancelSuggestions,

    /// Fetch current conditions for cycle `seq`.
    FetchWeather { seq: u64, query: WeatherQuery },

    /// Fetch headlines for cycle `seq`.
    FetchNews { seq: u64, city: String },

    /// Persist the theme preference.
    PersistTheme(ThemePreference),
}
