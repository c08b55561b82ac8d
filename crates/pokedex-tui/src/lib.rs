//! Terminal user interface for pokedex.
//!
//! This crate provides an interactive TUI for browsing a paginated
//! catalogue, built with ratatui.
//!
//! # Overview
//!
//! - **Entry list** - the entries of the current page
//! - **Detail card** - name, sprite, types, height and weight of the
//!   highlighted entry
//! - **Pagination bar** - previous/next controls around a sliding window of
//!   page numbers
//!
//! # Usage
//!
//! ```rust,no_run
//! use pokedex_client::{ClientConfig, HttpCatalog};
//! use pokedex_tui::TuiConfig;
//!
//! let catalog = HttpCatalog::new(ClientConfig::default()).unwrap();
//! pokedex_tui::run(catalog, TuiConfig::new()).unwrap();
//! ```
//!
//! # Keyboard Navigation
//!
//! - `j`/`k` - Move down/up in the list
//! - `h`/`l` - Previous/next page
//! - `g`/`G` - First/last page
//! - `:` - Page prompt
//! - `r` - Reload page
//! - `?` - Help
//! - `q` - Quit

pub mod app;
mod config;
mod event;
mod theme;
mod ui;

use std::sync::Arc;

use pokedex_core::CatalogSource;

pub use app::state::UserSettings;
pub use app::{App, AppResult};
pub use config::TuiConfig;
pub use event::KeyAction;
pub use theme::{Theme, ThemeVariant};

/// Run the TUI application against `source`.
pub fn run<S: CatalogSource>(source: S, config: TuiConfig) -> AppResult<()> {
    // Create tokio runtime for async operations
    let rt = tokio::runtime::Runtime::new()?;

    let terminal = ratatui::init();
    let result = rt.block_on(App::new(Arc::new(source), config).run(terminal));
    ratatui::restore();

    // Shutdown runtime immediately to cancel in-flight fetches
    rt.shutdown_timeout(std::time::Duration::from_millis(100));

    result
}
