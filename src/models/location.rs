//! Location records returned by the `location-area` endpoints

use serde::{Deserialize, Serialize};

/// A `{name, url}` reference to another API resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// One page of the location-area listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationPage {
    /// Total number of location areas across all pages
    pub count: u32,
    /// URL of the following page, absent on the last page
    pub next: Option<String>,
    /// URL of the preceding page, absent on the first page
    pub previous: Option<String>,
    /// Location areas on this page, in API order
    pub results: Vec<NamedResource>,
}

/// Detail of a single location area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationArea {
    #[serde(default)]
    pub name: String,
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

/// A Pokemon that can be met in a location area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonEncounter {
    pub pokemon: NamedResource,
}

impl LocationArea {
    /// Distinct Pokemon names in this area, sorted.
    pub fn pokemon_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .pokemon_encounters
            .iter()
            .map(|encounter| encounter.pokemon.name.clone())
            .collect::<std::collections::HashSet<_>>()
            .into_iter()
            .collect();
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_page_deserialize() {
        let json = r#"{
            "count": 1089,
            "next": "https://pokeapi.co/api/v2/location-area/?offset=20&limit=20",
            "previous": null,
            "results": [
                {"name": "canalave-city-area", "url": "https://pokeapi.co/api/v2/location-area/1/"},
                {"name": "eterna-city-area", "url": "https://pokeapi.co/api/v2/location-area/2/"}
            ]
        }"#;

        let page: LocationPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.count, 1089);
        assert!(page.previous.is_none());
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[1].name, "eterna-city-area");
    }

    #[test]
    fn test_location_area_ignores_unknown_fields() {
        let json = r#"{
            "id": 1,
            "name": "canalave-city-area",
            "encounter_method_rates": [],
            "pokemon_encounters": [
                {"pokemon": {"name": "tentacool", "url": "https://pokeapi.co/api/v2/pokemon/72/"},
                 "version_details": []}
            ]
        }"#;

        let area: LocationArea = serde_json::from_str(json).unwrap();
        assert_eq!(area.name, "canalave-city-area");
        assert_eq!(area.pokemon_encounters[0].pokemon.name, "tentacool");
    }

    #[test]
    fn test_location_area_requires_encounters() {
        let result = serde_json::from_str::<LocationArea>(r#"{"name": "nowhere"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_pokemon_names_deduplicated_and_sorted() {
        let encounter = |name: &str| PokemonEncounter {
            pokemon: NamedResource {
                name: name.to_string(),
                url: String::new(),
            },
        };
        let area = LocationArea {
            name: "route".to_string(),
            pokemon_encounters: vec![
                encounter("zubat"),
                encounter("geodude"),
                encounter("zubat"),
                encounter("abra"),
            ],
        };

        assert_eq!(area.pokemon_names(), vec!["abra", "geodude", "zubat"]);
    }
}
