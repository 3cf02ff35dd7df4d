//! Effect handler: turns declarative effects into spawned tasks
//!
//! The one place where failure policy is applied: weather errors become
//! visible `WeatherDidError` actions, suggestion failures log and emit
//! nothing (the previous list stays), news failures log and degrade to
//! an empty article list.

use std::sync::Arc;

use tracing::{debug, warn};

use skydeck_core::api::{Geocoder, NewsClient, WeatherClient, WeatherError};
use skydeck_core::{Action, Effect, TaskKey, TaskManager, ThemeService};

pub const SUGGESTIONS_TASK: &str = "suggestions";
pub const WEATHER_TASK: &str = "weather";
pub const NEWS_TASK: &str = "news";

/// Upstream clients, shared by every spawned fetch.
pub struct Services {
    pub geocoder: Geocoder,
    pub weather: WeatherClient,
    /// `None` when no news key is configured; the panel stays empty.
    pub news: Option<NewsClient>,
}

pub fn handle(
    effect: Effect,
    tasks: &mut TaskManager,
    services: &Arc<Services>,
    theme: &ThemeService,
) {
    match effect {
        Effect::ResolveSuggestions { query } => {
            let services = Arc::clone(services);
            tasks.spawn(SUGGESTIONS_TASK, async move {
                match services.geocoder.resolve(&query).await {
                    Ok(places) => Some(Action::SuggestionsDidLoad { query, places }),
                    Err(e) => {
                        warn!(error = %e, query, "suggestion resolution failed");
                        None
                    }
                }
            });
        }

        Effect::CancelSuggestions => {
            tasks.cancel(&TaskKey::new(SUGGESTIONS_TASK));
        }

        Effect::FetchWeather { seq, query } => {
            let services = Arc::clone(services);
            tasks.spawn(WEATHER_TASK, async move {
                match services.weather.current(&query).await {
                    Ok(snapshot) => Some(Action::WeatherDidLoad { seq, snapshot }),
                    Err(e) => {
                        let message = match e {
                            WeatherError::NotFound(message) => message,
                            other => other.to_string(),
                        };
                        Some(Action::WeatherDidError { seq, message })
                    }
                }
            });
        }

        Effect::FetchNews { seq, city } => {
            let services = Arc::clone(services);
            tasks.spawn(NEWS_TASK, async move {
                let articles = match &services.news {
                    Some(client) => match client.headlines(&city).await {
                        Ok(articles) => articles,
                        Err(e) => {
                            warn!(error = %e, city, "news fetch failed");
                            Vec::new()
                        }
                    },
                    None => {
                        debug!("no news key configured, skipping fetch");
                        Vec::new()
                    }
                };
                Some(Action::NewsDidLoad { seq, articles })
            });
        }

        Effect::PersistTheme(pref) => theme.set(pref),
    }
}
