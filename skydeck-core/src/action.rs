//! Actions - every way the application state can be asked to change
//!
//! Naming convention: intent verbs trigger work (`Submit`), `Did`-suffixed
//! actions carry an async result back (`WeatherDidLoad`). Result actions
//! for a submit cycle carry the cycle's sequence tag so the reducer can
//! drop anything a newer submission has superseded.

use crate::state::{NewsArticle, PlaceSuggestion, WeatherSnapshot};

/// Minimal trait every action type implements: a stable name for
/// dispatch logging.
pub trait ActionName {
    fn name(&self) -> &'static str;
}

/// Application actions.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    // ===== Search input =====
    /// The user edited the search text (keystroke, paste, clear).
    QueryEdited(String),

    /// Resolver response for `query`. Applied only while `query` still
    /// matches the current text.
    SuggestionsDidLoad {
        query: String,
        places: Vec<PlaceSuggestion>,
    },

    /// Move the dropdown highlight.
    SuggestionCursorMoved(usize),

    /// The user chose the suggestion at this index.
    SuggestionPicked(usize),

    /// Submit the current query.
    Submit,

    // ===== Lookup results =====
    /// Weather fetch succeeded for cycle `seq`.
    WeatherDidLoad { seq: u64, snapshot: WeatherSnapshot },

    /// Weather fetch failed for cycle `seq`; `message` is shown verbatim.
    WeatherDidError { seq: u64, message: String },

    /// News fetch finished for cycle `seq`. Best-effort: a failed fetch
    /// arrives here as an empty list.
    NewsDidLoad { seq: u64, articles: Vec<NewsArticle> },

    // ===== UI =====
    /// Flip between dark and light.
    ThemeToggled,

    /// Spinner tick.
    Tick,

    /// Exit the application. Handled by the runtime loop, not the reducer.
    Quit,
}

impl ActionName for Action {
    fn name(&self) -> &'static str {
        match self {
            Action::QueryEdited(_) => "QueryEdited",
            Action::SuggestionsDidLoad { .. } => "SuggestionsDidLoad",
            Action::SuggestionCursorMoved(_) => "SuggestionCursorMoved",
            Action::SuggestionPicked(_) => "SuggestionPicked",
            Action::Submit => "Submit",
            Action::WeatherDidLoad { .. } => "WeatherDidLoad",
            Action::WeatherDidError { .. } => "WeatherDidError",
            Action::NewsDidLoad { .. } => "NewsDidLoad",
            Action::ThemeToggled => "ThemeToggled",
            Action::Tick => "Tick",
            Action::Quit => "Quit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_stable() {
        assert_eq!(Action::Submit.name(), "Submit");
        assert_eq!(Action::QueryEdited("x".into()).name(), "QueryEdited");
        assert_eq!(
            Action::WeatherDidError {
                seq: 1,
                message: "nope".into()
            }
            .name(),
            "WeatherDidError"
        );
    }
}
