//! Catalogue data model.

use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// One entry of a catalogue listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Entry name as returned by the catalogue (lowercase).
    pub name: String,
    /// Reference used to fetch the entry's detail.
    pub detail_ref: String,
}

impl CatalogEntry {
    /// Create a new catalogue entry.
    pub fn new(name: impl Into<String>, detail_ref: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            detail_ref: detail_ref.into(),
        }
    }

    /// Name with its first character upper-cased.
    pub fn display_name(&self) -> String {
        capitalize_first(&self.name)
    }
}

/// One page of a catalogue listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogPage {
    /// Entries on this page.
    pub entries: Vec<CatalogEntry>,
    /// Total number of entries across all pages.
    pub total_count: u32,
}

impl CatalogPage {
    /// Number of pages of `page_size` entries needed for the whole catalogue.
    pub fn total_pages(&self, page_size: u32) -> u32 {
        crate::page::total_pages_for(self.total_count, page_size)
    }

    /// Check if this page has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Detail of a single catalogue entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryDetail {
    /// Capitalized name.
    pub display_name: String,
    /// Sprite image location, when the catalogue has one.
    pub image_uri: Option<String>,
    /// Type names in slot order.
    pub types: Vec<String>,
    /// Height in decimetres.
    pub height: u32,
    /// Weight in hectograms.
    pub weight: u32,
}

impl EntryDetail {
    /// Types capitalized and joined for display, e.g. `Grass, Poison`.
    pub fn type_line(&self) -> String {
        self.types.iter().map(|t| capitalize_first(t)).join(", ")
    }
}

/// Upper-case the first character of `s`, leaving the rest untouched.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
