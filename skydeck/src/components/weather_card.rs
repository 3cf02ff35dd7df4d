//! Weather card: the current-conditions display
//!
//! Renders whichever of four shapes the state is in: idle hint, fetch
//! spinner, error message, or the snapshot card.

use chrono::{Local, TimeZone};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use skydeck_core::{AppState, SearchPhase, WeatherSnapshot};

use crate::component::Component;
use crate::palette::Palette;

pub const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

pub struct WeatherCardProps<'a> {
    pub state: &'a AppState,
    /// Prebuilt static-map link, when a maps key is configured.
    pub map_url: Option<&'a str>,
    pub palette: &'a Palette,
}

pub struct WeatherCard;

/// Glyph for a condition group, with the clear-sky glyph as the
/// intentional fallback for anything unrecognized.
pub fn condition_glyph(condition: &str) -> &'static str {
    let c = condition.to_lowercase();
    if c.contains("clear") {
        "*"
    } else if c.contains("cloud") {
        "~"
    } else if c.contains("rain") || c.contains("drizzle") {
        ","
    } else if c.contains("snow") {
        "."
    } else if c.contains("thunderstorm") {
        "!"
    } else if c.contains("mist") || c.contains("fog") || c.contains("haze") {
        "="
    } else {
        "*"
    }
}

/// Eight-point compass label for a wind direction in degrees.
pub fn compass(deg: u16) -> &'static str {
    const POINTS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];
    POINTS[((f64::from(deg % 360) + 22.5) / 45.0) as usize % 8]
}

fn local_time(unix: i64) -> String {
    match Local.timestamp_opt(unix, 0) {
        chrono::LocalResult::Single(t) => t.format("%H:%M").to_string(),
        _ => "--:--".to_string(),
    }
}

fn snapshot_lines<'a>(
    snapshot: &WeatherSnapshot,
    map_url: Option<&'a str>,
    palette: &Palette,
) -> Vec<Line<'a>> {
    let fg = Style::default().fg(palette.fg);
    let muted = Style::default().fg(palette.muted);
    let accent = Style::default().fg(palette.accent);

    let mut lines = vec![
        Line::from(Span::styled(
            format!("{}, {}", snapshot.name, snapshot.country),
            accent.add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!("{:.0}°C ", snapshot.temperature.round()),
                fg.add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("{} {}", condition_glyph(&snapshot.condition), snapshot.description),
                fg,
            ),
        ]),
        Line::from(Span::styled(
            format!(
                "Feels like {:.0}°C   Min {:.0}°C / Max {:.0}°C",
                snapshot.feels_like.round(),
                snapshot.temp_min.round(),
                snapshot.temp_max.round()
            ),
            muted,
        )),
        Line::from(Span::styled(
            format!(
                "Humidity {}%   Wind {:.0} km/h {}",
                snapshot.humidity,
                (snapshot.wind_speed * 3.6).round(),
                compass(snapshot.wind_deg)
            ),
            muted,
        )),
        Line::from(Span::styled(
            format!(
                "Sunrise {}   Sunset {}",
                local_time(snapshot.sunrise),
                local_time(snapshot.sunset)
            ),
            muted,
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "Pressure {} hPa   Visibility {:.1} km   Clouds {}%",
                snapshot.pressure,
                f64::from(snapshot.visibility) / 1000.0,
                snapshot.cloud_cover
            ),
            muted,
        )),
        Line::from(Span::styled(
            format!("({:.4}, {:.4})", snapshot.coords.lat, snapshot.coords.lon),
            muted,
        )),
    ];

    if let Some(url) = map_url {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Map: ", muted),
            Span::styled(url, accent),
        ]));
    }

    lines
}

impl Component for WeatherCard {
    type Props<'a> = WeatherCardProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let palette = props.palette;
        let state = props.state;

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Weather ")
            .border_style(Style::default().fg(palette.accent))
            .style(Style::default().bg(palette.panel));

        let lines = if let Some(message) = &state.error {
            vec![
                Line::from(Span::styled(
                    "Error",
                    Style::default()
                        .fg(palette.error)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    message.clone(),
                    Style::default().fg(palette.error),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "Edit the city and press Enter to retry.",
                    Style::default().fg(palette.muted),
                )),
            ]
        } else if state.phase == SearchPhase::Submitting {
            let frame_glyph =
                SPINNER_FRAMES[state.tick_count as usize % SPINNER_FRAMES.len()];
            vec![Line::from(Span::styled(
                format!("{frame_glyph} Fetching weather..."),
                Style::default().fg(palette.muted),
            ))]
        } else if let Some(snapshot) = &state.weather {
            snapshot_lines(snapshot, props.map_url, palette)
        } else {
            vec![Line::from(Span::styled(
                "Type a city and press Enter to fetch weather.",
                Style::default().fg(palette.muted),
            ))]
        };

        let card = Paragraph::new(lines)
            .block(block)
            .style(Style::default().fg(palette.fg).bg(palette.panel))
            .wrap(Wrap { trim: false });
        frame.render_widget(card, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_glyph_groups() {
        assert_eq!(condition_glyph("Clear"), "*");
        assert_eq!(condition_glyph("Clouds"), "~");
        assert_eq!(condition_glyph("Rain"), ",");
        assert_eq!(condition_glyph("Drizzle"), ",");
        assert_eq!(condition_glyph("Snow"), ".");
        assert_eq!(condition_glyph("Thunderstorm"), "!");
        assert_eq!(condition_glyph("Mist"), "=");
        assert_eq!(condition_glyph("Haze"), "=");
    }

    #[test]
    fn test_condition_glyph_falls_back_to_clear() {
        assert_eq!(condition_glyph("Sandstorm"), "*");
        assert_eq!(condition_glyph(""), "*");
    }

    #[test]
    fn test_compass_points() {
        assert_eq!(compass(0), "N");
        assert_eq!(compass(45), "NE");
        assert_eq!(compass(90), "E");
        assert_eq!(compass(180), "S");
        assert_eq!(compass(270), "W");
        assert_eq!(compass(359), "N");
        assert_eq!(compass(202), "S");
        assert_eq!(compass(225), "SW");
    }
}
