//! Pagination configuration types.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::page::{DEFAULT_WINDOW, total_pages_for};

/// Configuration for paginated listing.
///
/// Page size and window radius are independent: one controls how many
/// entries are fetched per page, the other how many page numbers surround
/// the current one in the pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct PaginationConfig {
    /// Entries fetched per page.
    #[builder(default = "5")]
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Page numbers shown on each side of the current page.
    #[builder(default = "DEFAULT_WINDOW")]
    #[serde(default = "default_window")]
    pub window: u32,
}

fn default_page_size() -> u32 {
    5
}

fn default_window() -> u32 {
    DEFAULT_WINDOW
}

impl PaginationConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if self.page_size == Some(0) {
            return Err("Page size must be at least 1".to_string());
        }
        if self.window == Some(0) {
            return Err("Window must be at least 1".to_string());
        }
        Ok(())
    }
}

impl PaginationConfig {
    /// Create a new pagination config builder.
    pub fn builder() -> PaginationConfigBuilder {
        PaginationConfigBuilder::default()
    }

    /// Zero-based offset of the first entry on `page`.
    pub fn offset(&self, page: u32) -> u32 {
        page.saturating_sub(1).saturating_mul(self.page_size)
    }

    /// Number of pages needed for `total_count` entries.
    pub fn total_pages(&self, total_count: u32) -> u32 {
        total_pages_for(total_count, self.page_size)
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            window: default_window(),
        }
    }
}
