//! Help bar: key hints and the active theme

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::component::Component;
use crate::palette::Palette;

pub struct HelpBarProps<'a> {
    pub theme_name: &'a str,
    pub palette: &'a Palette,
}

pub struct HelpBar;

impl Component for HelpBar {
    type Props<'a> = HelpBarProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let palette = props.palette;
        let key = Style::default().fg(palette.accent);
        let label = Style::default().fg(palette.muted);

        let line = Line::from(vec![
            Span::styled("enter", key),
            Span::styled(" search  ", label),
            Span::styled("tab", key),
            Span::styled(" pick  ", label),
            Span::styled("↑↓", key),
            Span::styled(" suggestions  ", label),
            Span::styled("ctrl+t", key),
            Span::styled(format!(" theme ({})  ", props.theme_name), label),
            Span::styled("ctrl+q", key),
            Span::styled(" quit", label),
        ]);

        frame.render_widget(
            Paragraph::new(line).style(Style::default().bg(palette.bg)),
            area,
        );
    }
}
