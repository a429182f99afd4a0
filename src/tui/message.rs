//! Events flowing between the dashboard loop and its background tasks

use crate::vault::Playlist;

/// Work the loop hands off to a detached task.
///
/// Every command delivers at most one [`Message`] back when it finishes;
/// fire-and-forget persistence commands report only their failures.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Load tracked playlists and reconcile each against its remote feed
    RefreshAll,
    /// Delete a playlist, then reload the tracked list
    Remove { playlist_id: String },
    /// Run a playlist search against the remote provider
    Search { query: String },
    /// Fetch the full video list for a search result the user picked
    Adopt { playlist: Playlist },
    /// Persist a playlist as-is
    Save { playlist: Playlist },
    /// Persist one video's watched flag
    SetWatched {
        playlist_id: String,
        video_id: String,
        watched: bool,
    },
    /// Open a URL in the system browser
    OpenBrowser { url: String },
}

/// Result events delivered back into the loop and routed to the active view
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// The tracked playlists finished loading (startup refresh or the reload
    /// after a removal)
    ListLoaded(Vec<Playlist>),
    /// A search round-trip finished
    SearchResults(Vec<Playlist>),
    /// An adopted playlist arrived with its full video list
    PlaylistFetched(Playlist),
    /// A background task failed
    Error(String),
}
