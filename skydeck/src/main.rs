//! skydeck - terminal weather & news lookup
//!
//! ```sh
//! export OPENWEATHER_API_KEY=...   # required
//! export GNEWS_API_KEY=...         # optional, news panel
//! export GOOGLE_MAPS_API_KEY=...   # optional, map link
//!
//! skydeck
//! skydeck --city London
//! skydeck --log-file /tmp/skydeck.log
//! ```

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use clap::{Parser, ValueEnum};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use skydeck_core::api::{self, Geocoder, NewsClient, WeatherClient};
use skydeck_core::{
    Action, AppState, Credentials, FileThemeStore, ThemePreference, ThemeService,
};

use skydeck::effects::Services;
use skydeck::{Runtime, Ui};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ThemeArg {
    Dark,
    Light,
}

impl From<ThemeArg> for ThemePreference {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Dark => ThemePreference::Dark,
            ThemeArg::Light => ThemePreference::Light,
        }
    }
}

/// Terminal weather & news lookup
#[derive(Parser, Debug)]
#[command(name = "skydeck")]
#[command(about = "Look up current weather and headlines for a city")]
struct Args {
    /// City to look up immediately on launch
    #[arg(long, short)]
    city: Option<String>,

    /// Append logs to this file (the TUI keeps stderr clean)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Start with this theme instead of the saved preference
    #[arg(long, value_enum)]
    theme: Option<ThemeArg>,
}

fn init_tracing(log_file: Option<&PathBuf>) -> io::Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("skydeck=debug,skydeck_core=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();
    init_tracing(args.log_file.as_ref())?;

    let credentials = match Credentials::from_env() {
        Ok(credentials) => credentials,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let client = match api::http_client() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: could not build the HTTP client: {e}");
            std::process::exit(1);
        }
    };

    let services = Arc::new(Services {
        geocoder: Geocoder::new(client.clone(), credentials.openweather_key.clone()),
        weather: WeatherClient::new(client.clone(), credentials.openweather_key.clone()),
        news: credentials
            .gnews_key
            .as_ref()
            .map(|key| NewsClient::new(client, key.clone())),
    });

    let theme_service = ThemeService::new(
        FileThemeStore::default_location()
            .unwrap_or_else(|| FileThemeStore::new(".skydeck-theme.json")),
    );
    let theme = args
        .theme
        .map(ThemePreference::from)
        .unwrap_or_else(|| theme_service.load());

    let mut state = AppState::new(theme);
    if let Some(city) = &args.city {
        state = state.with_query(city.as_str());
    }

    // ===== Terminal setup =====
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut runtime = Runtime::new(state);
    if args.city.is_some() {
        runtime.enqueue(Action::Submit);
    }
    let mut ui = Ui::new(credentials.maps_key.clone());

    let result = runtime
        .run(&mut terminal, &mut ui, services, &theme_service)
        .await;

    // ===== Cleanup =====
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
