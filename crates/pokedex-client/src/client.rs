//! reqwest-backed catalogue source.

use serde::de::DeserializeOwned;

use pokedex_core::{CatalogPage, CatalogSource, EntryDetail, FetchError};

use crate::config::ClientConfig;
use crate::wire::{ListResponse, PokemonResponse};

/// Catalogue source backed by the PokeAPI REST endpoints.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpCatalog {
    /// Create a new client.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout())
            .build()?;
        Ok(Self { client, config })
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// URL of a listing page.
    pub fn page_url(&self, page: u32, page_size: u32) -> String {
        let offset = page.saturating_sub(1).saturating_mul(page_size);
        format!(
            "{}/pokemon?offset={offset}&limit={page_size}",
            self.config.base()
        )
    }

    /// Turn a detail reference into a URL.
    ///
    /// Absolute URLs (as found in listings) pass through; anything else is
    /// treated as an entry name or id.
    pub fn detail_url(&self, detail_ref: &str) -> String {
        if detail_ref.starts_with("http://") || detail_ref.starts_with("https://") {
            detail_ref.to_string()
        } else {
            format!(
                "{}/pokemon/{}",
                self.config.base(),
                detail_ref.trim().to_lowercase()
            )
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        tracing::debug!(url, "GET");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::network(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::network(url, e))?;

        serde_json::from_slice(&body).map_err(|e| FetchError::decode(url, e))
    }
}

impl CatalogSource for HttpCatalog {
    async fn fetch_page(&self, page: u32, page_size: u32) -> Result<CatalogPage, FetchError> {
        let url = self.page_url(page, page_size);
        let response: ListResponse = self.get_json(&url).await?;
        Ok(response.into())
    }

    async fn fetch_detail(&self, detail_ref: &str) -> Result<EntryDetail, FetchError> {
        let url = self.detail_url(detail_ref);
        let response: PokemonResponse = self.get_json(&url).await?;
        Ok(response.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(base_url: &str) -> HttpCatalog {
        let config = ClientConfig::builder().base_url(base_url).build().unwrap();
        HttpCatalog::new(config).unwrap()
    }

    #[test]
    fn test_page_url() {
        let catalog = catalog("https://pokeapi.co/api/v2/");
        assert_eq!(
            catalog.page_url(1, 5),
            "https://pokeapi.co/api/v2/pokemon?offset=0&limit=5"
        );
        assert_eq!(
            catalog.page_url(7, 5),
            "https://pokeapi.co/api/v2/pokemon?offset=30&limit=5"
        );
    }

    #[test]
    fn test_detail_url() {
        let catalog = catalog("https://pokeapi.co/api/v2");
        assert_eq!(
            catalog.detail_url("https://pokeapi.co/api/v2/pokemon/1/"),
            "https://pokeapi.co/api/v2/pokemon/1/"
        );
        assert_eq!(
            catalog.detail_url("Pikachu"),
            "https://pokeapi.co/api/v2/pokemon/pikachu"
        );
    }
}
