//! Terminal lifecycle and the dashboard event loop
//!
//! The loop runs everything view-related on one task: it drains background
//! results, draws, then polls for input. Anything slow or fallible is pushed
//! into a detached task that reports back with a single [`Message`], so the
//! views never block and never see I/O errors as panics.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::utils::set_tui_mode;
use crate::vault::{reconcile, JsonStore, Store};
use crate::youtube::YouTubeClient;

use super::message::{Command, Message};
use super::navigator::Navigator;
use super::window::WindowMode;

/// Run the interactive dashboard until the user quits
pub async fn run(client: YouTubeClient, store: JsonStore, window_mode: WindowMode) -> Result<()> {
    // Keep tracing away from the alternate screen
    set_tui_mode(true);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let store = Arc::new(store);
    let (tx, mut rx) = mpsc::channel::<Message>(32);
    let mut navigator = Navigator::new(window_mode);

    // Load and reconcile the tracked playlists right away
    dispatch(Command::RefreshAll, &client, &store, &tx);

    let result = run_loop(&mut terminal, &mut navigator, &client, &store, &tx, &mut rx).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    set_tui_mode(false);

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    navigator: &mut Navigator,
    client: &YouTubeClient,
    store: &Arc<JsonStore>,
    tx: &mpsc::Sender<Message>,
    rx: &mut mpsc::Receiver<Message>,
) -> Result<()> {
    loop {
        // Deliver finished background work, one result at a time
        while let Ok(message) = rx.try_recv() {
            for command in navigator.handle_message(message) {
                dispatch(command, client, store, tx);
            }
        }

        navigator.check_status_timeout();

        terminal.draw(|frame| navigator.draw(frame))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                for command in navigator.handle_key(key) {
                    dispatch(command, client, store, tx);
                }
            }
        }

        if navigator.quitting() {
            return Ok(());
        }
    }
}

/// Hand a command to a detached task that reports back over the channel
fn dispatch(command: Command, client: &YouTubeClient, store: &Arc<JsonStore>, tx: &mpsc::Sender<Message>) {
    debug!("Dispatching {:?}", command);

    let client = client.clone();
    let store = store.clone();
    let tx = tx.clone();

    tokio::spawn(async move {
        if let Some(message) = run_command(command, &client, &store).await {
            let _ = tx.send(message).await;
        }
    });
}

async fn run_command(command: Command, client: &YouTubeClient, store: &JsonStore) -> Option<Message> {
    match command {
        Command::RefreshAll => Some(refresh_all(client, store).await),
        Command::Remove { playlist_id } => Some(remove_and_reload(store, &playlist_id)),
        Command::Search { query } => match client.search_playlists(&query).await {
            Ok(playlists) => Some(Message::SearchResults(playlists)),
            Err(e) => Some(Message::Error(format!("Search failed: {e:#}"))),
        },
        Command::Adopt { mut playlist } => match client.playlist_items(&playlist.id).await {
            Ok(videos) => {
                playlist.videos = videos;
                Some(Message::PlaylistFetched(playlist))
            }
            Err(e) => Some(Message::Error(format!("Could not fetch playlist: {e:#}"))),
        },
        Command::Save { playlist } => store
            .save_playlist(&playlist)
            .err()
            .map(|e| Message::Error(format!("Could not save playlist: {e}"))),
        Command::SetWatched {
            playlist_id,
            video_id,
            watched,
        } => store
            .set_video_watched(&playlist_id, &video_id, watched)
            .err()
            .map(|e| Message::Error(format!("Could not save watched flag: {e}"))),
        Command::OpenBrowser { url } => open_browser(&url),
    }
}

/// Load every tracked playlist and fold its remote feed in.
///
/// A playlist whose feed cannot be fetched keeps its cached state; the
/// session stays usable offline.
async fn refresh_all(client: &YouTubeClient, store: &JsonStore) -> Message {
    let mut playlists = match store.list_playlists() {
        Ok(playlists) => playlists,
        Err(e) => return Message::Error(format!("Could not load playlists: {e}")),
    };

    for playlist in &mut playlists {
        match client.playlist_items(&playlist.id).await {
            Ok(remote) => {
                playlist.updated = reconcile(&mut playlist.videos, remote);
                if playlist.updated {
                    if let Err(e) = store.save_playlist(playlist) {
                        warn!("Could not save playlist {}: {}", playlist.id, e);
                    }
                }
            }
            Err(e) => warn!("Could not refresh playlist {}: {:#}", playlist.id, e),
        }
    }

    Message::ListLoaded(playlists)
}

fn remove_and_reload(store: &JsonStore, playlist_id: &str) -> Message {
    if let Err(e) = store.delete_playlist(playlist_id) {
        return Message::Error(format!("Could not remove playlist: {e}"));
    }

    match store.list_playlists() {
        Ok(playlists) => Message::ListLoaded(playlists),
        Err(e) => Message::Error(format!("Could not reload playlists: {e}")),
    }
}

fn open_browser(url: &str) -> Option<Message> {
    match std::process::Command::new("xdg-open").arg(url).spawn() {
        Ok(_) => None,
        Err(e) => Some(Message::Error(format!("Could not open browser: {e}"))),
    }
}
