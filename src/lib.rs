//! Pokedex - An interactive PokeAPI client
//!
//! Pages through location areas, explores them and catches Pokemon. Every
//! catalog read goes through a TTL response cache that a background task
//! sweeps once per TTL.

pub mod app;
pub mod cache;
pub mod catch;
pub mod config;
pub mod error;
pub mod fetch;
pub mod locations;
pub mod models;
pub mod registry;
pub mod repl;
pub mod tasks;

pub use app::App;
pub use config::Config;
pub use error::{PokedexError, Result};
pub use tasks::spawn_sweep_task;
