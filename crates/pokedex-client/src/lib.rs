//! HTTP catalogue client for pokedex.
//!
//! [`HttpCatalog`] implements [`pokedex_core::CatalogSource`] against the
//! PokeAPI REST interface using reqwest.
//!
//! # Example
//!
//! ```rust,no_run
//! use pokedex_client::{ClientConfig, HttpCatalog};
//! use pokedex_core::CatalogSource;
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = HttpCatalog::new(ClientConfig::default())?;
//! let page = catalog.fetch_page(1, 5).await?;
//! for entry in &page.entries {
//!     println!("{}", entry.display_name());
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
pub mod wire;

pub use client::HttpCatalog;
pub use config::{ClientConfig, ClientConfigBuilder, ClientConfigBuilderError, DEFAULT_BASE_URL};
