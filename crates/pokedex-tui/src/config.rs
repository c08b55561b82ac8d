//! TUI configuration passed in from the command line.

use pokedex_core::PaginationConfig;

use crate::theme::ThemeVariant;

/// Configuration for the TUI application.
#[derive(Debug, Clone)]
pub struct TuiConfig {
    /// Page size and window radius.
    pub pagination: PaginationConfig,
    /// Page to open once the page count is known.
    pub start_page: u32,
    /// Initial theme.
    pub theme: ThemeVariant,
    /// Whether theme changes are written back to the settings file.
    pub persist_settings: bool,
}

impl TuiConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pagination config.
    pub fn with_pagination(mut self, pagination: PaginationConfig) -> Self {
        self.pagination = pagination;
        self
    }

    /// Set the page to open on startup.
    pub fn with_start_page(mut self, page: u32) -> Self {
        self.start_page = page.max(1);
        self
    }

    /// Set the initial theme.
    pub fn with_theme(mut self, theme: ThemeVariant) -> Self {
        self.theme = theme;
        self
    }

    /// Enable or disable writing settings back to disk.
    pub fn with_persist_settings(mut self, persist: bool) -> Self {
        self.persist_settings = persist;
        self
    }
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            pagination: PaginationConfig::default(),
            start_page: 1,
            theme: ThemeVariant::default(),
            persist_settings: false,
        }
    }
}
