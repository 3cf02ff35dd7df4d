//! News panel: headlines for the displayed city

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use skydeck_core::NewsArticle;

use crate::component::Component;
use crate::palette::Palette;

pub struct NewsPanelProps<'a> {
    pub articles: &'a [NewsArticle],
    /// City of the current cycle, for the panel title.
    pub city: Option<&'a str>,
    pub palette: &'a Palette,
}

pub struct NewsPanel;

impl Component for NewsPanel {
    type Props<'a> = NewsPanelProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let palette = props.palette;

        let title = match props.city {
            Some(city) => format!(" News - {city} "),
            None => " News ".to_string(),
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(palette.accent))
            .style(Style::default().bg(palette.panel));

        let mut lines: Vec<Line> = Vec::new();
        if props.articles.is_empty() {
            lines.push(Line::from(Span::styled(
                "No recent headlines.",
                Style::default().fg(palette.muted),
            )));
        } else {
            for article in props.articles {
                lines.push(Line::from(Span::styled(
                    format!("- {}", article.title),
                    Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::from(Span::styled(
                    format!(
                        "  {} - {}",
                        article.source,
                        article.published_at.format("%Y-%m-%d")
                    ),
                    Style::default().fg(palette.muted),
                )));
                lines.push(Line::from(Span::styled(
                    format!("  {}", article.url),
                    Style::default().fg(palette.accent),
                )));
            }
        }

        let panel = Paragraph::new(lines)
            .block(block)
            .style(Style::default().fg(palette.fg).bg(palette.panel))
            .wrap(Wrap { trim: false });
        frame.render_widget(panel, area);
    }
}
