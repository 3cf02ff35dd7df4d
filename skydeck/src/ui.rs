//! Top-level UI: layout, event mapping, global keys
//!
//! The search bar is always focused - this is a single-input app. The
//! only keys handled above it are quit and the theme toggle.

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};
use skydeck_core::{api::static_map_url, Action, AppState};

use crate::component::Component;
use crate::components::{
    HelpBar, HelpBarProps, NewsPanel, NewsPanelProps, SearchBar, SearchBarProps, WeatherCard,
    WeatherCardProps,
};
use crate::event::EventKind;
use crate::palette::Palette;

pub struct Ui {
    search: SearchBar,
    card: WeatherCard,
    news: NewsPanel,
    help: HelpBar,
    maps_key: Option<String>,
}

impl Ui {
    pub fn new(maps_key: Option<String>) -> Self {
        Self {
            search: SearchBar::new(),
            card: WeatherCard,
            news: NewsPanel,
            help: HelpBar,
            maps_key,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let palette = Palette::for_theme(state.theme);

        // Theme background for the whole frame.
        frame.render_widget(
            Block::default().style(Style::default().bg(palette.bg).fg(palette.fg)),
            area,
        );

        let [header_area, search_area, content_area, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(area);

        let header = Line::from(vec![
            Span::styled(
                "skydeck",
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" - weather & news", Style::default().fg(palette.muted)),
        ]);
        frame.render_widget(
            Paragraph::new(header).style(Style::default().bg(palette.bg)),
            header_area,
        );

        let [card_area, news_area] =
            Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
                .areas(content_area);

        let map_url = match (&self.maps_key, &state.weather) {
            (Some(key), Some(snapshot)) => Some(static_map_url(snapshot.coords, key)),
            _ => None,
        };
        self.card.render(
            frame,
            card_area,
            WeatherCardProps {
                state,
                map_url: map_url.as_deref(),
                palette,
            },
        );

        self.news.render(
            frame,
            news_area,
            NewsPanelProps {
                articles: &state.news,
                city: state.submitted_city.as_deref(),
                palette,
            },
        );

        self.help.render(
            frame,
            help_area,
            HelpBarProps {
                theme_name: state.theme.name(),
                palette,
            },
        );

        // Last so the dropdown overlays the content panels.
        self.search.render(
            frame,
            search_area,
            SearchBarProps {
                query: &state.query.text,
                suggestions: &state.suggestions,
                selected: state.suggestion_cursor,
                is_focused: true,
                palette,
            },
        );
    }

    pub fn map_event(&mut self, event: &EventKind, state: &AppState) -> Vec<Action> {
        if let EventKind::Key(key) = event {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                match key.code {
                    KeyCode::Char('c') | KeyCode::Char('q') => return vec![Action::Quit],
                    KeyCode::Char('t') => return vec![Action::ThemeToggled],
                    _ => {}
                }
            }
        }

        let palette = Palette::for_theme(state.theme);
        self.search
            .handle_event(
                event,
                SearchBarProps {
                    query: &state.query.text,
                    suggestions: &state.suggestions,
                    selected: state.suggestion_cursor,
                    is_focused: true,
                    palette,
                },
            )
            .into_iter()
            .collect()
    }
}
