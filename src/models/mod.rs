//! Catalog models
//!
//! Typed projections of the PokeAPI payloads this client reads. Fields the
//! client never uses are left out; serde ignores them on decode.

pub mod catalog;
pub mod pokemon;

// Re-export commonly used types
pub use catalog::{LocationArea, LocationPage, NamedResource, PokemonEncounter};
pub use pokemon::{Pokemon, PokemonStat, PokemonType};
