//! Response shapes of the PokeAPI endpoints and their conversion into the
//! catalogue model.
//!
//! Only the fields the list view uses are declared; everything else in the
//! response is ignored by serde.

use serde::Deserialize;

use pokedex_core::{CatalogEntry, CatalogPage, EntryDetail, capitalize_first};

/// A `{ name, url }` pair, used throughout PokeAPI.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// Body of `GET /pokemon?offset=..&limit=..`.
#[derive(Debug, Clone, Deserialize)]
pub struct ListResponse {
    pub count: u32,
    #[serde(default)]
    pub results: Vec<NamedResource>,
}

impl From<ListResponse> for CatalogPage {
    fn from(response: ListResponse) -> Self {
        Self {
            entries: response
                .results
                .into_iter()
                .map(|r| CatalogEntry::new(r.name, r.url))
                .collect(),
            total_count: response.count,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlot {
    pub slot: u32,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

/// Body of `GET /pokemon/{name}`.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonResponse {
    pub name: String,
    pub height: u32,
    pub weight: u32,
    #[serde(default)]
    pub sprites: Sprites,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
}

impl From<PokemonResponse> for EntryDetail {
    fn from(mut response: PokemonResponse) -> Self {
        response.types.sort_by_key(|t| t.slot);
        Self {
            display_name: capitalize_first(&response.name),
            image_uri: response.sprites.front_default,
            types: response.types.into_iter().map(|t| t.kind.name).collect(),
            height: response.height,
            weight: response.weight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_types_sorted_by_slot() {
        let json = r#"{
            "name": "bulbasaur",
            "height": 7,
            "weight": 69,
            "sprites": { "front_default": null },
            "types": [
                { "slot": 2, "type": { "name": "poison", "url": "u2" } },
                { "slot": 1, "type": { "name": "grass", "url": "u1" } }
            ]
        }"#;
        let response: PokemonResponse = serde_json::from_str(json).unwrap();
        let detail = EntryDetail::from(response);
        assert_eq!(detail.types, vec!["grass", "poison"]);
        assert_eq!(detail.image_uri, None);
        assert_eq!(detail.display_name, "Bulbasaur");
    }
}
