//! Color palettes for the two themes
//!
//! One palette is applied to the whole frame per render, so toggling the
//! preference restyles everything at once.

use ratatui::style::Color;
use skydeck_core::ThemePreference;

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// Frame background.
    pub bg: Color,
    /// Default text.
    pub fg: Color,
    /// Panel/card background.
    pub panel: Color,
    /// Borders and titles.
    pub accent: Color,
    /// Secondary text.
    pub muted: Color,
    /// Error text.
    pub error: Color,
    /// Dropdown highlight background.
    pub highlight: Color,
}

const DARK: Palette = Palette {
    bg: Color::Rgb(15, 23, 42),
    fg: Color::Rgb(241, 245, 249),
    panel: Color::Rgb(30, 41, 59),
    accent: Color::Rgb(96, 165, 250),
    muted: Color::Rgb(148, 163, 184),
    error: Color::Rgb(248, 113, 113),
    highlight: Color::Rgb(51, 65, 85),
};

const LIGHT: Palette = Palette {
    bg: Color::Rgb(241, 245, 249),
    fg: Color::Rgb(15, 23, 42),
    panel: Color::Rgb(255, 255, 255),
    accent: Color::Rgb(37, 99, 235),
    muted: Color::Rgb(71, 85, 105),
    error: Color::Rgb(220, 38, 38),
    highlight: Color::Rgb(203, 213, 225),
};

impl Palette {
    pub fn for_theme(theme: ThemePreference) -> &'static Palette {
        match theme {
            ThemePreference::Dark => &DARK,
            ThemePreference::Light => &LIGHT,
        }
    }
}
