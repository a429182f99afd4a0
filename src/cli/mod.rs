//! CLI module for vidvault

use clap::{Parser, Subcommand};

pub mod auth;
pub mod commands;

pub use auth::AuthManager;

#[derive(Parser, Debug)]
#[command(name = "vidvault", about = "Track YouTube playlists and watch progress from your terminal")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Configure the YouTube Data API key
    Auth {
        /// API key (prompted for when omitted)
        #[arg(long, env = "VIDVAULT_API_KEY")]
        key: Option<String>,

        /// Replace a previously stored key
        #[arg(long)]
        force: bool,
    },

    /// Print tracked playlists without opening the dashboard
    List,

    /// Open the interactive dashboard (the default when no command is given)
    Watch {
        /// Use a full-height viewport while the cursor sits near the top of a
        /// list, instead of the one-row-short window kept for compatibility
        #[arg(long)]
        full_window: bool,
    },

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Watch { full_window: false }
    }
}
