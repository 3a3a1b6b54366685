//! Pokemon detail payload.

use serde::Deserialize;

use super::NamedResource;

/// `GET /pokemon/{name}`, reduced to what catching and inspecting use.
///
/// `base_experience` is the catch difficulty. PokeAPI sends `null` for a
/// handful of forms; those decode as 0.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Pokemon {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub base_experience: u32,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub stats: Vec<PokemonStat>,
    #[serde(default)]
    pub types: Vec<PokemonType>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PokemonType {
    #[serde(default)]
    pub slot: u32,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or_default())
}
