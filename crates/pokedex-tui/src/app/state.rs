//! Application state types and enums.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use pokedex_core::{CatalogPage, EntryDetail, FetchError, PaginationConfig};

use crate::theme::ThemeVariant;

/// Application mode representing the current UI state.
/// Note: Loading is NOT a mode - fetches run in the background while the
/// user can still move around in Normal mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    #[default]
    Normal,
    Help,
    /// Page prompt input mode (vim-style :command).
    Command,
    Quit,
}

/// State of the detail card for the highlighted entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DetailState {
    /// Nothing highlighted, or the list is loading.
    #[default]
    Idle,
    /// A detail fetch for this reference is in flight.
    Loading(String),
    /// Detail loaded.
    Loaded(EntryDetail),
    /// The detail fetch failed.
    Failed(String),
}

impl DetailState {
    /// Check if a detail fetch is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading(_))
    }
}

/// Result of a background fetch.
#[derive(Debug)]
pub enum FetchResult {
    /// A listing page finished loading.
    Page {
        page: u32,
        result: Result<CatalogPage, FetchError>,
    },
    /// An entry detail finished loading.
    Detail {
        detail_ref: String,
        result: Result<EntryDetail, FetchError>,
    },
}

/// User settings persisted to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    /// Theme used on startup.
    pub theme: ThemeVariant,
    /// Catalogue API root; `None` uses the public endpoint.
    pub api_url: Option<String>,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Page size and window radius.
    pub pagination: PaginationConfig,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            theme: ThemeVariant::Dark,
            api_url: None,
            timeout_secs: 10,
            pagination: PaginationConfig::default(),
        }
    }
}

impl UserSettings {
    /// Get the config file path.
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("pokedex").join("settings.toml"))
    }

    /// Load settings from disk, or return defaults.
    pub fn load() -> Self {
        Self::config_path()
            .map(|path| Self::load_from(&path))
            .unwrap_or_default()
    }

    /// Load settings from `path`, or return defaults if it is missing or
    /// malformed.
    pub fn load_from(path: &Path) -> Self {
        let Ok(content) = std::fs::read_to_string(path) else {
            return Self::default();
        };
        toml::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "Ignoring malformed settings file");
            Self::default()
        })
    }

    /// Save settings to disk.
    pub fn save(&self) -> std::io::Result<()> {
        let path = Self::config_path().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "No config directory")
        })?;
        self.save_to(&path)
    }

    /// Save settings to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        std::fs::write(path, content)
    }
}
