//! Search bar: single-line input with a suggestion dropdown
//!
//! Every edit emits `QueryEdited` so the orchestrator can clear picked
//! coordinates and kick off resolution. Enter submits, Tab picks the
//! highlighted suggestion, Up/Down move the highlight.

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};
use skydeck_core::{Action, PlaceSuggestion};

use crate::component::Component;
use crate::event::EventKind;
use crate::palette::Palette;

pub struct SearchBarProps<'a> {
    pub query: &'a str,
    pub suggestions: &'a [PlaceSuggestion],
    /// Highlighted dropdown row.
    pub selected: usize,
    pub is_focused: bool,
    pub palette: &'a Palette,
}

/// Cursor-aware single-line input. The text itself lives in AppState;
/// only the byte cursor is component state.
#[derive(Default)]
pub struct SearchBar {
    cursor: usize,
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }

    fn clamp_cursor(&mut self, value: &str) {
        self.cursor = self.cursor.min(value.len());
    }

    fn move_cursor_left(&mut self, value: &str) {
        if self.cursor > 0 {
            let mut pos = self.cursor - 1;
            while pos > 0 && !value.is_char_boundary(pos) {
                pos -= 1;
            }
            self.cursor = pos;
        }
    }

    fn move_cursor_right(&mut self, value: &str) {
        if self.cursor < value.len() {
            let mut pos = self.cursor + 1;
            while pos < value.len() && !value.is_char_boundary(pos) {
                pos += 1;
            }
            self.cursor = pos;
        }
    }

    fn insert_char(&mut self, value: &str, c: char) -> String {
        let mut next = String::with_capacity(value.len() + c.len_utf8());
        next.push_str(&value[..self.cursor]);
        next.push(c);
        next.push_str(&value[self.cursor..]);
        self.cursor += c.len_utf8();
        next
    }

    fn delete_char_before(&mut self, value: &str) -> Option<String> {
        if self.cursor == 0 {
            return None;
        }
        let start = value[..self.cursor]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0);
        let mut next = String::with_capacity(value.len());
        next.push_str(&value[..start]);
        next.push_str(&value[self.cursor..]);
        self.cursor = start;
        Some(next)
    }

    fn delete_char_at(&self, value: &str) -> Option<String> {
        let (_, c) = value[self.cursor..].char_indices().next()?;
        let mut next = String::with_capacity(value.len());
        next.push_str(&value[..self.cursor]);
        next.push_str(&value[self.cursor + c.len_utf8()..]);
        Some(next)
    }

    /// The dropdown rectangle below the input, clipped to the screen.
    fn dropdown_area(input: Rect, screen: Rect, rows: usize) -> Rect {
        let y = input.y.saturating_add(input.height);
        let height = (rows as u16 + 2).min(screen.height.saturating_sub(y));
        Rect {
            x: input.x,
            y,
            width: input.width,
            height,
        }
    }
}

impl Component for SearchBar {
    type Props<'a> = SearchBarProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return None;
        }
        let EventKind::Key(key) = event else {
            return None;
        };

        self.clamp_cursor(props.query);

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('a') => {
                    self.cursor = 0;
                    None
                }
                KeyCode::Char('e') => {
                    self.cursor = props.query.len();
                    None
                }
                KeyCode::Char('u') => {
                    self.cursor = 0;
                    Some(Action::QueryEdited(String::new()))
                }
                _ => None,
            };
        }

        match key.code {
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Tab => {
                if props.suggestions.is_empty() {
                    None
                } else {
                    // The picked name replaces the text; park the cursor
                    // at the end of it.
                    self.cursor = props
                        .suggestions
                        .get(props.selected)
                        .map(|s| s.name.len())
                        .unwrap_or(0);
                    Some(Action::SuggestionPicked(props.selected))
                }
            }
            KeyCode::Down => {
                let last = props.suggestions.len().saturating_sub(1);
                let next = (props.selected + 1).min(last);
                (!props.suggestions.is_empty() && next != props.selected)
                    .then_some(Action::SuggestionCursorMoved(next))
            }
            KeyCode::Up => {
                let next = props.selected.saturating_sub(1);
                (!props.suggestions.is_empty() && next != props.selected)
                    .then_some(Action::SuggestionCursorMoved(next))
            }
            KeyCode::Char(c) => {
                let next = self.insert_char(props.query, c);
                Some(Action::QueryEdited(next))
            }
            KeyCode::Backspace => self.delete_char_before(props.query).map(Action::QueryEdited),
            KeyCode::Delete => self.delete_char_at(props.query).map(Action::QueryEdited),
            KeyCode::Left => {
                self.move_cursor_left(props.query);
                None
            }
            KeyCode::Right => {
                self.move_cursor_right(props.query);
                None
            }
            KeyCode::Home => {
                self.cursor = 0;
                None
            }
            KeyCode::End => {
                self.cursor = props.query.len();
                None
            }
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        self.clamp_cursor(props.query);
        let palette = props.palette;

        let (text, style) = if props.query.is_empty() {
            (
                "Type a city name...",
                Style::default().fg(palette.muted).bg(palette.panel),
            )
        } else {
            (props.query, Style::default().fg(palette.fg).bg(palette.panel))
        };

        let input = Paragraph::new(text).style(style).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search ")
                .border_style(Style::default().fg(palette.accent))
                .style(Style::default().bg(palette.panel)),
        );
        frame.render_widget(input, area);

        if props.is_focused {
            let cursor_x = area.x + 1 + props.query[..self.cursor].chars().count() as u16;
            if cursor_x < area.x + area.width.saturating_sub(1) {
                frame.set_cursor_position((cursor_x, area.y + 1));
            }
        }

        if props.suggestions.is_empty() {
            return;
        }

        let dropdown = Self::dropdown_area(area, frame.area(), props.suggestions.len());
        if dropdown.height < 3 {
            return;
        }

        let items: Vec<ListItem> = props
            .suggestions
            .iter()
            .map(|place| ListItem::new(Line::from(place.label())))
            .collect();
        let list = List::new(items)
            .style(Style::default().fg(palette.fg).bg(palette.panel))
            .highlight_style(
                Style::default()
                    .bg(palette.highlight)
                    .add_modifier(Modifier::BOLD),
            )
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.muted))
                    .style(Style::default().bg(palette.panel)),
            );

        let mut list_state = ratatui::widgets::ListState::default();
        list_state.select(Some(props.selected.min(props.suggestions.len() - 1)));

        frame.render_widget(Clear, dropdown);
        frame.render_stateful_widget(list, dropdown, &mut list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{char_key, key_code};
    use skydeck_core::Coordinates;

    fn place(name: &str) -> PlaceSuggestion {
        PlaceSuggestion {
            name: name.into(),
            country: "GB".into(),
            lat: 51.5,
            lon: -0.12,
        }
    }

    fn props<'a>(
        query: &'a str,
        suggestions: &'a [PlaceSuggestion],
        selected: usize,
    ) -> SearchBarProps<'a> {
        SearchBarProps {
            query,
            suggestions,
            selected,
            is_focused: true,
            palette: Palette::for_theme(skydeck_core::ThemePreference::Dark),
        }
    }

    fn actions(bar: &mut SearchBar, event: EventKind, p: SearchBarProps<'_>) -> Vec<Action> {
        bar.handle_event(&event, p).into_iter().collect()
    }

    #[test]
    fn test_typing_emits_edit() {
        let mut bar = SearchBar::new();
        let got = actions(&mut bar, EventKind::Key(char_key('L')), props("", &[], 0));
        assert_eq!(got, vec![Action::QueryEdited("L".into())]);
    }

    #[test]
    fn test_typing_inserts_at_cursor() {
        let mut bar = SearchBar::new();
        bar.cursor = 3;
        let got = actions(&mut bar, EventKind::Key(char_key('!')), props("Lon", &[], 0));
        assert_eq!(got, vec![Action::QueryEdited("Lon!".into())]);
    }

    #[test]
    fn test_backspace_at_start_is_silent() {
        let mut bar = SearchBar::new();
        bar.cursor = 0;
        let got = actions(
            &mut bar,
            EventKind::Key(key_code(KeyCode::Backspace)),
            props("Lon", &[], 0),
        );
        assert!(got.is_empty());
    }

    #[test]
    fn test_backspace_removes_before_cursor() {
        let mut bar = SearchBar::new();
        bar.cursor = 3;
        let got = actions(
            &mut bar,
            EventKind::Key(key_code(KeyCode::Backspace)),
            props("Lon", &[], 0),
        );
        assert_eq!(got, vec![Action::QueryEdited("Lo".into())]);
        assert_eq!(bar.cursor, 2);
    }

    #[test]
    fn test_enter_submits() {
        let mut bar = SearchBar::new();
        let got = actions(
            &mut bar,
            EventKind::Key(key_code(KeyCode::Enter)),
            props("London", &[], 0),
        );
        assert_eq!(got, vec![Action::Submit]);
    }

    #[test]
    fn test_enter_submits_even_with_suggestions_open() {
        let mut bar = SearchBar::new();
        let suggestions = [place("London")];
        let got = actions(
            &mut bar,
            EventKind::Key(key_code(KeyCode::Enter)),
            props("Lon", &suggestions, 0),
        );
        assert_eq!(got, vec![Action::Submit]);
    }

    #[test]
    fn test_tab_picks_highlighted_suggestion() {
        let mut bar = SearchBar::new();
        let suggestions = [place("London"), place("Londonderry")];
        let got = actions(
            &mut bar,
            EventKind::Key(key_code(KeyCode::Tab)),
            props("Lon", &suggestions, 1),
        );
        assert_eq!(got, vec![Action::SuggestionPicked(1)]);
        assert_eq!(bar.cursor, "Londonderry".len());
    }

    #[test]
    fn test_tab_without_suggestions_is_silent() {
        let mut bar = SearchBar::new();
        let got = actions(
            &mut bar,
            EventKind::Key(key_code(KeyCode::Tab)),
            props("Lon", &[], 0),
        );
        assert!(got.is_empty());
    }

    #[test]
    fn test_arrows_move_highlight_with_clamping() {
        let mut bar = SearchBar::new();
        let suggestions = [place("A"), place("B")];

        let got = actions(
            &mut bar,
            EventKind::Key(key_code(KeyCode::Down)),
            props("x", &suggestions, 0),
        );
        assert_eq!(got, vec![Action::SuggestionCursorMoved(1)]);

        let got = actions(
            &mut bar,
            EventKind::Key(key_code(KeyCode::Down)),
            props("x", &suggestions, 1),
        );
        assert!(got.is_empty());

        let got = actions(
            &mut bar,
            EventKind::Key(key_code(KeyCode::Up)),
            props("x", &suggestions, 1),
        );
        assert_eq!(got, vec![Action::SuggestionCursorMoved(0)]);
    }

    #[test]
    fn test_ctrl_u_clears() {
        let mut bar = SearchBar::new();
        bar.cursor = 3;
        let got = actions(
            &mut bar,
            EventKind::Key(crate::testing::ctrl_key('u')),
            props("Lon", &[], 0),
        );
        assert_eq!(got, vec![Action::QueryEdited(String::new())]);
        assert_eq!(bar.cursor, 0);
    }

    #[test]
    fn test_unfocused_ignores_events() {
        let mut bar = SearchBar::new();
        let p = SearchBarProps {
            is_focused: false,
            ..props("", &[], 0)
        };
        let got = actions(&mut bar, EventKind::Key(char_key('a')), p);
        assert!(got.is_empty());
    }

    #[test]
    fn test_multibyte_editing() {
        let mut bar = SearchBar::new();
        let value = "Zürich";
        bar.cursor = value.len();
        let got = actions(
            &mut bar,
            EventKind::Key(key_code(KeyCode::Backspace)),
            props(value, &[], 0),
        );
        assert_eq!(got, vec![Action::QueryEdited("Züric".into())]);

        // Cursor walks over the two-byte ü without splitting it.
        bar.cursor = 2;
        bar.move_cursor_left(value);
        assert_eq!(bar.cursor, 1);
    }

    #[test]
    fn test_pick_keeps_coordinates_flow_sane() {
        // Smoke check that the emitted pick index addresses the same
        // suggestion whose coordinates the reducer will store.
        let suggestions = [place("London")];
        assert_eq!(
            Some(Coordinates { lat: 51.5, lon: -0.12 }),
            suggestions.first().map(|s| Coordinates {
                lat: s.lat,
                lon: s.lon
            })
        );
    }
}
