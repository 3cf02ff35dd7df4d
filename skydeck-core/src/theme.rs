//! Theme preference service
//!
//! A single process-wide preference with explicit `load`/`set` over an
//! injected persistence trait. Resolution order on load: persisted value,
//! then the terminal's `COLORFGBG` hint, then dark.

use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Persisted as the JSON strings `"dark"` / `"light"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Dark,
    Light,
}

impl ThemePreference {
    pub fn toggle(self) -> Self {
        match self {
            ThemePreference::Dark => ThemePreference::Light,
            ThemePreference::Light => ThemePreference::Dark,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ThemePreference::Dark => "dark",
            ThemePreference::Light => "light",
        }
    }
}

/// Where the preference lives between sessions.
pub trait ThemeStore {
    /// `None` when nothing has been persisted yet.
    fn load(&self) -> Option<ThemePreference>;
    fn save(&self, pref: ThemePreference) -> io::Result<()>;
}

/// JSON file under the user config directory.
pub struct FileThemeStore {
    path: PathBuf,
}

impl FileThemeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/skydeck/theme.json`, when the platform has one.
    pub fn default_location() -> Option<Self> {
        let dir = dirs::config_dir()?.join("skydeck");
        Some(Self::new(dir.join("theme.json")))
    }
}

impl ThemeStore for FileThemeStore {
    fn load(&self) -> Option<ThemePreference> {
        let raw = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&raw) {
            Ok(pref) => Some(pref),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "ignoring unreadable theme file");
                None
            }
        }
    }

    fn save(&self, pref: ThemePreference) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string(&pref).map_err(io::Error::other)?;
        fs::write(&self.path, raw)
    }
}

/// Explicit load/set facade over a [`ThemeStore`].
pub struct ThemeService {
    store: Box<dyn ThemeStore + Send + Sync>,
}

impl ThemeService {
    pub fn new(store: impl ThemeStore + Send + Sync + 'static) -> Self {
        Self {
            store: Box::new(store),
        }
    }

    /// Resolve the initial preference.
    pub fn load(&self) -> ThemePreference {
        if let Some(pref) = self.store.load() {
            debug!(theme = pref.name(), "loaded persisted theme");
            return pref;
        }
        if let Some(pref) = detect_terminal_preference() {
            debug!(theme = pref.name(), "theme from terminal hint");
            return pref;
        }
        ThemePreference::default()
    }

    /// Persist a change immediately. Persistence failures are logged,
    /// not surfaced - the in-memory preference still applies.
    pub fn set(&self, pref: ThemePreference) {
        if let Err(e) = self.store.save(pref) {
            warn!(theme = pref.name(), error = %e, "failed to persist theme");
        }
    }
}

/// Terminal background hint, the closest thing a terminal has to a
/// system-level light/dark preference.
fn detect_terminal_preference() -> Option<ThemePreference> {
    let value = std::env::var("COLORFGBG").ok()?;
    preference_from_colorfgbg(&value)
}

/// `COLORFGBG` is `<fg>;<bg>` (some terminals insert a default field).
/// Background colors 0-6 and 8 are the dark half of the classic palette.
fn preference_from_colorfgbg(value: &str) -> Option<ThemePreference> {
    let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    Some(if bg <= 6 || bg == 8 {
        ThemePreference::Dark
    } else {
        ThemePreference::Light
    })
}
