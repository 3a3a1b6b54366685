//! Catch engine
//!
//! A throw draws `r` uniformly from `1..=1000` and succeeds when `r` beats the
//! Pokemon's base experience, so difficulty 0 always catches and 1000 or more
//! never does. Every attempt redraws; only the fetch is cached.

use rand::Rng;
use tracing::debug;

use crate::error::Result;
use crate::fetch::{CachedFetcher, Transport};
use crate::models::Pokemon;
use crate::registry::Pokedex;

/// Highest possible catch roll.
pub const ROLL_CEILING: u32 = 1000;

/// Whether `roll` beats `difficulty`.
pub fn roll_succeeds(roll: u32, difficulty: u32) -> bool {
    roll > difficulty
}

/// Result of one throw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Throw {
    /// Canonical name from the catalog record; the registry key on a catch
    pub name: String,
    pub caught: bool,
}

// == Attempt Capture ==
/// Throws a Pokeball at the Pokemon described at `pokemon_url`.
///
/// On a successful catch the full record goes into `pokedex`. Fetch or
/// decode failures are returned and leave `pokedex` untouched.
pub async fn attempt_capture<T, R>(
    fetcher: &CachedFetcher<T>,
    pokedex: &mut Pokedex,
    pokemon_url: &str,
    rng: &mut R,
) -> Result<Throw>
where
    T: Transport,
    R: Rng,
{
    let pokemon: Pokemon = fetcher.fetch_json(pokemon_url).await?;

    let roll = rng.gen_range(1..=ROLL_CEILING);
    let caught = roll_succeeds(roll, pokemon.base_experience);
    debug!(
        "Catch roll for {}: {} against {} -> {}",
        pokemon.name, roll, pokemon.base_experience, caught
    );

    let name = pokemon.name.clone();
    if caught {
        pokedex.insert(pokemon);
    }
    Ok(Throw { name, caught })
}
