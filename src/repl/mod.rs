//! REPL Module
//!
//! The interactive command loop: reads lines, parses them into commands and
//! prints what the handlers return.
//!
//! # Commands
//! - `map` / `mapb` - Page through location areas
//! - `explore <area>` - List the Pokemon in an area
//! - `catch <pokemon>` / `inspect <pokemon>` / `pokedex` - Catch and review
//! - `cache` - Response cache statistics
//! - `help` / `exit`

pub mod commands;
pub mod handlers;
pub mod input;

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::app::App;
use crate::fetch::Transport;

pub use commands::{Command, CommandError, COMMANDS};
pub use handlers::{execute, Outcome};
pub use input::clean_input;

/// Prompt printed before every line.
pub const PROMPT: &str = "Pokedex > ";

/// Runs the loop until `exit` or end of input.
pub async fn run<T, R, W>(app: &mut App<T>, input: R, output: &mut W) -> std::io::Result<()>
where
    T: Transport,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(output)?;
            return Ok(());
        };

        let command = match Command::parse(&clean_input(&line)) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(output, "{}", e)?;
                continue;
            }
        };
        debug!("Executing {:?}", command);

        match execute(app, command).await {
            Outcome::Continue(text) => writeln!(output, "{}", text)?,
            Outcome::Exit(text) => {
                writeln!(output, "{}", text)?;
                return Ok(());
            }
        }
    }
}
