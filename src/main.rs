//! vidvault - Track YouTube playlists and watch progress from your terminal

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod tui;
mod utils;
mod vault;
mod youtube;

use cli::{Cli, Commands};
use utils::ConditionalStderrLayer;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "vidvault=debug,reqwest=debug"
    } else {
        "vidvault=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(ConditionalStderrLayer::new(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        ))
        .init();

    match cli.command.unwrap_or_default() {
        Commands::Auth { key, force } => {
            cli::commands::auth(key, force).await?;
        }
        Commands::List => {
            cli::commands::list()?;
        }
        Commands::Watch { full_window } => {
            cli::commands::watch(full_window).await?;
        }
        Commands::Completion { shell } => {
            cli::commands::completion(shell);
        }
    }

    Ok(())
}
