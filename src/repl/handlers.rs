//! REPL Handlers
//!
//! Runs a [`Command`] against the [`App`] and renders its output as text.

use std::fmt::Write as _;

use crate::app::App;
use crate::fetch::Transport;
use crate::locations::PageView;
use crate::models::Pokemon;
use crate::repl::commands::{Command, COMMANDS};

/// What the loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the text and read the next line
    Continue(String),
    /// Print the text and stop
    Exit(String),
}

/// Executes `command`, returning the text to show the user.
pub async fn execute<T: Transport>(app: &mut App<T>, command: Command) -> Outcome {
    let text = match command {
        Command::Help => help(),
        Command::Exit => return Outcome::Exit("Closing the Pokedex... Goodbye!".to_string()),
        Command::Map => render_page(&app.map_forward().await),
        Command::MapBack => render_page(&app.map_back().await),
        Command::Explore(area) => explore(app, &area).await,
        Command::Catch(name) => catch(app, &name).await,
        Command::Inspect(name) => match app.inspect(&name) {
            Some(pokemon) => render_pokemon(pokemon),
            None => "you have not caught that pokemon".to_string(),
        },
        Command::Pokedex => pokedex(app),
        Command::Cache => cache(app).await,
    };
    Outcome::Continue(text)
}

fn help() -> String {
    let mut out = String::from("Welcome to the Pokedex!\nUsage:\n\n");
    for spec in COMMANDS {
        let _ = writeln!(out, "  {}: {}", spec.usage, spec.description);
    }
    out
}

fn render_page(page: &PageView) -> String {
    if page.names.is_empty() {
        return "No locations found.".to_string();
    }
    page.names.join("\n")
}

async fn explore<T: Transport>(app: &App<T>, area: &str) -> String {
    match app.explore(area).await {
        Ok(names) => {
            let mut out = format!("Exploring {}...\nFound Pokemon:", area);
            for name in names {
                let _ = write!(out, "\n - {}", name);
            }
            out
        }
        Err(e) => e.to_string(),
    }
}

async fn catch<T: Transport>(app: &mut App<T>, name: &str) -> String {
    let mut out = format!("Throwing a Pokeball at {}...\n", name);
    match app.catch(name).await {
        Ok(throw) if throw.caught => {
            let _ = write!(
                out,
                "{} was caught!\nYou may now inspect it with the inspect command.",
                throw.name
            );
        }
        Ok(throw) => {
            let _ = write!(out, "{} escaped!", throw.name);
        }
        Err(e) => out.push_str(&e.to_string()),
    }
    out
}

fn render_pokemon(pokemon: &Pokemon) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Name: {}", pokemon.name);
    let _ = writeln!(out, "Height: {}", pokemon.height);
    let _ = writeln!(out, "Weight: {}", pokemon.weight);
    out.push_str("Stats:");
    for stat in &pokemon.stats {
        let _ = write!(out, "\n  -{}: {}", stat.stat.name, stat.base_stat);
    }
    out.push_str("\nTypes:");
    for kind in &pokemon.types {
        let _ = write!(out, "\n  - {}", kind.kind.name);
    }
    out
}

fn pokedex<T: Transport>(app: &App<T>) -> String {
    let mut names: Vec<&str> = app.pokedex().names().collect();
    names.sort_unstable();

    let mut out = String::from("Your Pokedex:");
    for name in names {
        let _ = write!(out, "\n - {}", name);
    }
    out
}

async fn cache<T: Transport>(app: &App<T>) -> String {
    let stats = app.cache_stats().await;
    let last_sweep = stats
        .last_sweep_at
        .map(|at| at.format("%H:%M:%S UTC").to_string())
        .unwrap_or_else(|| "never".to_string());

    format!(
        "Cached responses: {}\nHits: {}\nMisses: {}\nHit rate: {:.0}%\nSwept: {}\nLast sweep: {}\nTTL: {}s",
        stats.total_entries,
        stats.hits,
        stats.misses,
        stats.hit_rate() * 100.0,
        stats.evictions,
        last_sweep,
        app.config().cache_ttl,
    )
}
