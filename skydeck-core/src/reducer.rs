//! Reducer - pure function: (state, action) -> state + effects
//!
//! All state transitions for the search pipeline live here. Async results
//! are applied only when they still belong to the current query:
//! suggestion responses are keyed by the text they were requested for,
//! weather and news results by the submit cycle's sequence tag. Anything
//! older is dropped on the floor, so late arrivals can never clobber a
//! newer cycle's state.

use crate::action::Action;
use crate::dispatch::DispatchResult;
use crate::effect::{Effect, WeatherQuery};
use crate::state::{AppState, LookupOutcome, SearchPhase, MAX_SUGGESTIONS};

pub fn reduce(state: &mut AppState, action: Action) -> DispatchResult {
    match action {
        // ===== Search input =====
        Action::QueryEdited(text) => {
            state.query.text = text;
            // Typed text no longer matches a resolved place.
            state.query.picked = None;
            state.suggestion_cursor = 0;

            if state.query.text.trim().is_empty() {
                state.suggestions.clear();
                state.phase = SearchPhase::Idle;
                DispatchResult::changed_with(Effect::CancelSuggestions)
            } else {
                state.phase = SearchPhase::Typing;
                DispatchResult::changed_with(Effect::ResolveSuggestions {
                    query: state.query.text.clone(),
                })
            }
        }

        Action::SuggestionsDidLoad { query, places } => {
            // Only a response for the text still on screen may land; the
            // pick guard covers a response racing a suggestion click.
            let listening = matches!(
                state.phase,
                SearchPhase::Typing | SearchPhase::SuggestionsShown
            );
            if !listening || query != state.query.text || state.query.picked.is_some() {
                return DispatchResult::unchanged();
            }

            state.suggestions = places;
            state.suggestions.truncate(MAX_SUGGESTIONS);
            state.suggestion_cursor = 0;
            state.phase = if state.suggestions.is_empty() {
                SearchPhase::Typing
            } else {
                SearchPhase::SuggestionsShown
            };
            DispatchResult::changed()
        }

        Action::SuggestionCursorMoved(index) => {
            let last = state.suggestions.len().saturating_sub(1);
            let clamped = index.min(last);
            if state.suggestions.is_empty() || clamped == state.suggestion_cursor {
                DispatchResult::unchanged()
            } else {
                state.suggestion_cursor = clamped;
                DispatchResult::changed()
            }
        }

        Action::SuggestionPicked(index) => {
            let Some(place) = state.suggestions.get(index) else {
                return DispatchResult::unchanged();
            };
            state.query.text = place.name.clone();
            state.query.picked = Some(crate::state::Coordinates {
                lat: place.lat,
                lon: place.lon,
            });
            state.suggestions.clear();
            state.suggestion_cursor = 0;
            state.phase = SearchPhase::Typing;
            DispatchResult::changed()
        }

        Action::Submit => {
            let city = state.query.text.trim().to_string();
            if city.is_empty() {
                return DispatchResult::unchanged();
            }

            state.submit_seq += 1;
            state.error = None;
            state.weather = None;
            state.news.clear();
            state.suggestions.clear();
            state.suggestion_cursor = 0;
            state.submitted_city = Some(city.clone());
            state.phase = SearchPhase::Submitting;

            let query = match state.query.picked {
                Some(coords) => WeatherQuery::Coords(coords),
                None => WeatherQuery::City(city),
            };
            DispatchResult::changed_with(Effect::CancelSuggestions).with(Effect::FetchWeather {
                seq: state.submit_seq,
                query,
            })
        }

        // ===== Lookup results =====
        Action::WeatherDidLoad { seq, snapshot } => {
            if seq != state.submit_seq {
                return DispatchResult::unchanged();
            }

            let city = state
                .submitted_city
                .clone()
                .unwrap_or_else(|| snapshot.name.clone());
            state.weather = Some(snapshot);
            state.error = None;
            state.phase = SearchPhase::Displaying(LookupOutcome::Success);
            DispatchResult::changed_with(Effect::FetchNews { seq, city })
        }

        Action::WeatherDidError { seq, message } => {
            if seq != state.submit_seq {
                return DispatchResult::unchanged();
            }

            state.weather = None;
            state.error = Some(message);
            state.phase = SearchPhase::Displaying(LookupOutcome::Failure);
            DispatchResult::changed()
        }

        Action::NewsDidLoad { seq, articles } => {
            if seq != state.submit_seq {
                return DispatchResult::unchanged();
            }

            state.news = articles;
            DispatchResult::changed()
        }

        // ===== UI =====
        Action::ThemeToggled => {
            state.theme = state.theme.toggle();
            DispatchResult::changed_with(Effect::PersistTheme(state.theme))
        }

        Action::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            if state.phase == SearchPhase::Submitting {
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::Quit => DispatchResult::unchanged(),
    }
}
