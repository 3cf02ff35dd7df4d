//! Render tests over the full UI using the render harness.

use skydeck::testing::RenderHarness;
use skydeck::Ui;
use skydeck_core::{
    AppState, LookupOutcome, NewsArticle, PlaceSuggestion, SearchPhase, WeatherSnapshot,
};

fn render(state: &AppState, maps_key: Option<&str>) -> String {
    let mut harness = RenderHarness::new(80, 24);
    let mut ui = Ui::new(maps_key.map(str::to_string));
    harness.render_to_string_plain(|frame| {
        ui.render(frame, frame.area(), state);
    })
}

fn london_snapshot() -> WeatherSnapshot {
    WeatherSnapshot {
        name: "London".into(),
        country: "GB".into(),
        temperature: 22.5,
        feels_like: 21.3,
        temp_min: 18.0,
        temp_max: 24.9,
        humidity: 76,
        pressure: 1012,
        visibility: 10000,
        cloud_cover: 75,
        wind_speed: 4.12,
        wind_deg: 240,
        condition: "Clouds".into(),
        description: "broken clouds".into(),
        ..Default::default()
    }
}

#[test]
fn test_render_initial_state() {
    let state = AppState::default();
    let output = render(&state, None);

    assert!(output.contains("skydeck"), "should show the header");
    assert!(
        output.contains("Type a city and press Enter to fetch weather"),
        "should prompt for input"
    );
    assert!(
        output.contains("Type a city name..."),
        "should show the input placeholder"
    );
    assert!(output.contains("No recent headlines"), "news panel is empty");
}

#[test]
fn test_render_loading_state() {
    let mut state = AppState::default();
    state.query.text = "London".into();
    state.phase = SearchPhase::Submitting;

    let output = render(&state, None);

    assert!(
        output.contains("Fetching weather"),
        "should show the loading text"
    );
}

#[test]
fn test_render_weather_card() {
    let mut state = AppState::default();
    state.query.text = "London".into();
    state.submitted_city = Some("London".into());
    state.phase = SearchPhase::Displaying(LookupOutcome::Success);
    state.weather = Some(london_snapshot());

    let output = render(&state, None);

    assert!(output.contains("London, GB"), "should show the location");
    assert!(output.contains("23°C"), "should show the rounded temperature");
    assert!(output.contains("broken clouds"), "should show the description");
    assert!(output.contains("Humidity 76%"), "should show humidity");
    assert!(output.contains("15 km/h SW"), "should show wind in km/h");
    assert!(output.contains("1012 hPa"), "should show pressure");
}

#[test]
fn test_render_error_state() {
    let mut state = AppState::default();
    state.query.text = "Xyzzyplorp".into();
    state.phase = SearchPhase::Displaying(LookupOutcome::Failure);
    state.error = Some("city not found".into());

    let output = render(&state, None);

    assert!(output.contains("Error"), "should show the error label");
    assert!(
        output.contains("city not found"),
        "should show the upstream message verbatim"
    );
    assert!(output.contains("retry"), "should show the retry hint");
}

#[test]
fn test_render_error_replaces_card() {
    let mut state = AppState::default();
    state.error = Some("city not found".into());
    // A snapshot lingering in state must not win over the error.
    state.weather = Some(london_snapshot());

    let output = render(&state, None);

    assert!(output.contains("city not found"));
    assert!(!output.contains("23°C"), "error replaces the weather card");
}

#[test]
fn test_render_suggestions_dropdown() {
    let mut state = AppState::default();
    state.query.text = "Lon".into();
    state.phase = SearchPhase::SuggestionsShown;
    state.suggestions = vec![
        PlaceSuggestion {
            name: "London".into(),
            country: "GB".into(),
            lat: 51.5,
            lon: -0.12,
        },
        PlaceSuggestion {
            name: "London".into(),
            country: "CA".into(),
            lat: 42.98,
            lon: -81.25,
        },
    ];

    let output = render(&state, None);

    assert!(output.contains("London, GB"), "should list the first candidate");
    assert!(output.contains("London, CA"), "should list the second candidate");
}

#[test]
fn test_render_news_panel() {
    let mut state = AppState::default();
    state.submitted_city = Some("London".into());
    state.weather = Some(london_snapshot());
    state.news = vec![NewsArticle {
        title: "Storm warning issued".into(),
        url: "https://news.example/storm".into(),
        source: "Example News".into(),
        published_at: chrono::DateTime::UNIX_EPOCH,
    }];

    let output = render(&state, None);

    assert!(output.contains("News - London"), "panel title names the city");
    assert!(output.contains("Storm warning issued"));
    assert!(output.contains("Example News"));
    assert!(output.contains("1970-01-01"), "shows the publication date");
}

#[test]
fn test_render_map_link_requires_key_and_weather() {
    let mut state = AppState::default();
    state.weather = Some(london_snapshot());

    let with_key = render(&state, Some("maps-key"));
    assert!(with_key.contains("Map:"), "key + snapshot shows the link");

    let without_key = render(&state, None);
    assert!(!without_key.contains("Map:"), "no key, no link");
}

#[test]
fn test_render_help_bar() {
    let state = AppState::default();
    let output = render(&state, None);

    assert!(output.contains("quit"), "should show the quit hint");
    assert!(output.contains("theme (dark)"), "should show the theme");
    assert!(output.contains("pick"), "should show the pick hint");
}
