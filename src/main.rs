//! Pokedex - An interactive PokeAPI client
//!
//! Reads commands from stdin until `exit`, end of input or Ctrl+C.

use std::io;

use anyhow::Context;
use tokio::io::BufReader;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::{repl, App, Config};

/// Main entry point for the Pokedex REPL.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging (stderr)
/// 2. Load configuration from environment variables
/// 3. Create the app context and start the cache sweep
/// 4. Run the command loop until exit, EOF or Ctrl+C
/// 5. Stop the sweep task
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to warnings only so log lines don't interleave with the prompt;
    // override with RUST_LOG
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: api_base={}, cache_ttl={}s, page_size={}, http_timeout={}s",
        config.api_base, config.cache_ttl, config.page_size, config.http_timeout
    );

    let mut app = App::from_config(config).context("failed to build HTTP client")?;
    app.start_sweep();

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = io::stdout();

    let interrupted = tokio::select! {
        result = repl::run(&mut app, stdin, &mut stdout) => {
            result.context("REPL I/O failed")?;
            false
        }
        _ = signal::ctrl_c() => {
            println!();
            info!("Received Ctrl+C, shutting down");
            true
        }
    };

    app.shutdown().await;

    // the blocking stdin read would otherwise hold runtime shutdown until Enter
    if interrupted {
        std::process::exit(0);
    }
    Ok(())
}
