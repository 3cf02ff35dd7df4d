pub mod help_bar;
pub mod news_panel;
pub mod search_bar;
pub mod weather_card;

pub use help_bar::{HelpBar, HelpBarProps};
pub use news_panel::{NewsPanel, NewsPanelProps};
pub use search_bar::{SearchBar, SearchBarProps};
pub use weather_card::{condition_glyph, WeatherCard, WeatherCardProps, SPINNER_FRAMES};
