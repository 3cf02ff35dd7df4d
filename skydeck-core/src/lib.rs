//! Core of skydeck: the search orchestration pipeline and its
//! collaborators, free of any rendering dependency.
//!
//! The shape is Redux/Elm-style: the UI turns events into [`Action`]s,
//! the [`reducer`](reducer::reduce) is the only place state changes, and
//! side effects come back out of it as declarative [`Effect`]s the
//! runtime executes through the [`TaskManager`]. Async results re-enter
//! as `Did*` actions tagged with the query text or submit cycle they
//! belong to, which is how stale responses get rejected:
//!
//! ```text
//! event -> Action -> reduce(state, action) -> (changed, effects)
//!                                                      |
//!            Did* action <- spawned fetch task <- TaskManager
//! ```

pub mod action;
pub mod api;
pub mod config;
pub mod dispatch;
pub mod effect;
pub mod reducer;
pub mod state;
pub mod tasks;
pub mod theme;

pub use action::{Action, ActionName};
pub use config::{ConfigError, Credentials};
pub use dispatch::{DispatchResult, Reducer, Store};
pub use effect::{Effect, WeatherQuery};
pub use reducer::reduce;
pub use state::{
    AppState, Coordinates, LookupOutcome, NewsArticle, PlaceSuggestion, QueryState, SearchPhase,
    WeatherSnapshot, MAX_SUGGESTIONS,
};
pub use tasks::{TaskKey, TaskManager};
pub use theme::{FileThemeStore, ThemePreference, ThemeService, ThemeStore};
