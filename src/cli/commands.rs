//! CLI command handlers

use anyhow::Result;
use clap_complete::generate;
use colored::Colorize;
use std::io;

use super::AuthManager;
use crate::tui;
use crate::tui::window::WindowMode;
use crate::vault::{JsonStore, Store};
use crate::youtube::YouTubeClient;

/// Handle the `auth` command
pub async fn auth(key: Option<String>, force: bool) -> Result<()> {
    println!("{}", "Configuring YouTube API access...".cyan());

    AuthManager::api_key(key, force).await?;

    println!();
    println!("{}", "Authentication successful!".green().bold());
    println!("API key stored securely in system keyring.");

    Ok(())
}

/// Handle the `list` command
pub fn list() -> Result<()> {
    let store = JsonStore::open()?;
    let mut playlists = store.list_playlists()?;

    if playlists.is_empty() {
        println!("{}", "No playlists tracked yet.".yellow());
        println!("Run {} and press {} to search for one.", "vidvault".cyan(), "s".cyan());
        return Ok(());
    }

    playlists.sort_by(|a, b| a.title.cmp(&b.title));

    println!("{}", "Tracked playlists:".green().bold());
    for playlist in &playlists {
        let watched = playlist.videos.iter().filter(|v| v.watched).count();
        println!(
            "  {} - {}/{} watched ({})",
            playlist.title.green(),
            watched,
            playlist.len(),
            playlist.id
        );
    }

    Ok(())
}

/// Handle the `watch` command: open the interactive dashboard
pub async fn watch(full_window: bool) -> Result<()> {
    let key = AuthManager::api_key(None, false).await?;
    let client = YouTubeClient::new(&key)?;
    let store = JsonStore::open()?;

    let window_mode = if full_window {
        WindowMode::Full
    } else {
        WindowMode::Compat
    };

    tui::run(client, store, window_mode).await
}

/// Handle the `completion` command
pub fn completion(shell: clap_complete::Shell) {
    let mut cmd = super::Cli::command();
    generate(shell, &mut cmd, "vidvault", &mut io::stdout());
}

// Extension trait for Cli to get clap Command
impl super::Cli {
    fn command() -> clap::Command {
        <Self as clap::CommandFactory>::command()
    }
}
