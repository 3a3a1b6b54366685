//! Location listing and location-area payloads.

use serde::Deserialize;

/// A `{ name, url }` reference to another catalog resource.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// One page of `GET /location-area/`.
///
/// `next` and `previous` arrive as JSON `null` at either end of the listing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LocationPage {
    #[serde(default)]
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

/// `GET /location-area/{name}`, reduced to the encounter list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LocationArea {
    pub name: String,
    #[serde(default)]
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PokemonEncounter {
    pub pokemon: NamedResource,
}

impl LocationArea {
    /// Names of the Pokemon encountered here, in payload order.
    pub fn pokemon_names(&self) -> Vec<String> {
        self.pokemon_encounters
            .iter()
            .map(|encounter| encounter.pokemon.name.clone())
            .collect()
    }
}
