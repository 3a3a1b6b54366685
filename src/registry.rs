//! Caught registry
//!
//! The user's Pokedex: every Pokemon caught this session, keyed by name.
//! Entries are never removed.

use std::collections::HashMap;

use crate::models::Pokemon;

#[derive(Debug, Clone, Default)]
pub struct Pokedex {
    caught: HashMap<String, Pokemon>,
}

impl Pokedex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a catch, replacing any earlier record under the same name.
    pub fn insert(&mut self, pokemon: Pokemon) {
        self.caught.insert(pokemon.name.clone(), pokemon);
    }

    /// The record for `name`, or `None` if it has not been caught.
    pub fn inspect(&self, name: &str) -> Option<&Pokemon> {
        self.caught.get(name)
    }

    /// Names of everything caught so far, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.caught.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.caught.len()
    }

    pub fn is_empty(&self) -> bool {
        self.caught.is_empty()
    }
}
