//! Core types and traits for pokedex.
//!
//! This crate provides the pagination primitives (page-window calculation and
//! the pagination controller), the catalogue data model, and the
//! [`CatalogSource`] trait implemented by data-fetching backends.

mod config;
mod controller;
mod error;
mod model;
mod page;
mod source;

pub use config::{PaginationConfig, PaginationConfigBuilder, PaginationConfigBuilderError};
pub use controller::{PageState, PaginationController};
pub use error::{FetchError, FetchErrorKind};
pub use model::{CatalogEntry, CatalogPage, EntryDetail, capitalize_first};
pub use page::{DEFAULT_WINDOW, PageToken, page_window, total_pages_for};
pub use source::CatalogSource;
