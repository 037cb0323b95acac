//! swipedeck binary.
//!
//! Usage:
//!   # Validate a deck file
//!   cargo run -p swipedeck-app -- check demos/inbox.deck.ron
//!
//!   # Load the deck, replay its script, print a JSON report
//!   cargo run -p swipedeck-app -- run demos/inbox.deck.ron
//!
//!   # Per-card lifecycle and container calls
//!   RUST_LOG=swipedeck=debug cargo run -p swipedeck-app -- run demos/inbox.deck.ron

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt};

use swipedeck_app::{DeckFile, Session};

/// Headless swipeable chat-preview deck.
#[derive(Parser, Debug)]
#[command(name = "swipedeck")]
#[command(about = "Replay swipe gestures against a chat preview deck")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load the deck, replay its script, and print a report
    Run {
        /// Deck file (RON)
        path: PathBuf,

        /// Single-line JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },
    /// Validate a deck file without loading it
    Check {
        /// Deck file (RON)
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the report.
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("swipedeck=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match args.command {
        Command::Check { path } => {
            let file = DeckFile::load(&path)
                .with_context(|| format!("loading deck file {}", path.display()))?;
            tracing::info!(
                chats = file.chats.len(),
                order = file.order.len(),
                steps = file.script.len(),
                "deck file ok"
            );
            println!("{}: ok", path.display());
        }
        Command::Run { path, compact } => {
            let file = DeckFile::load(&path)
                .with_context(|| format!("loading deck file {}", path.display()))?;
            let session = Session::new(file)?;

            // The deck is !Send; drive it on a current-thread runtime.
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_time()
                .build()?;
            let report = runtime.block_on(session.run());

            let json = if compact {
                serde_json::to_string(&report)?
            } else {
                serde_json::to_string_pretty(&report)?
            };
            println!("{json}");
        }
    }
    Ok(())
}
