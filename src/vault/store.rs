//! JSON-file playlist persistence
//!
//! Every tracked playlist lives in its own file at
//! `<data_dir>/vidvault/playlists/<id>.json`, so removing one never has to
//! rewrite the others.

use std::fs;
use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

use super::models::Playlist;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not determine a data directory for playlist storage")]
    MissingDataDir,
    #[error("playlist {0} is not tracked")]
    UnknownPlaylist(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Decode(#[from] serde_json::Error),
}

/// Storage port consumed by the dashboard
pub trait Store: Send + Sync {
    fn list_playlists(&self) -> Result<Vec<Playlist>, StoreError>;
    fn save_playlist(&self, playlist: &Playlist) -> Result<(), StoreError>;
    fn delete_playlist(&self, id: &str) -> Result<(), StoreError>;
    fn set_video_watched(
        &self,
        playlist_id: &str,
        video_id: &str,
        watched: bool,
    ) -> Result<(), StoreError>;
}

/// One-JSON-file-per-playlist store
pub struct JsonStore {
    playlist_dir: PathBuf,
}

impl JsonStore {
    /// Open the store in the user's data directory, creating it when missing
    pub fn open() -> Result<Self, StoreError> {
        let dir = dirs::data_dir()
            .ok_or(StoreError::MissingDataDir)?
            .join("vidvault")
            .join("playlists");
        Self::at(dir)
    }

    /// Open the store rooted at an explicit directory
    pub fn at(playlist_dir: PathBuf) -> Result<Self, StoreError> {
        fs::create_dir_all(&playlist_dir)?;
        Ok(Self { playlist_dir })
    }

    fn playlist_path(&self, id: &str) -> PathBuf {
        self.playlist_dir.join(format!("{id}.json"))
    }

    fn load_playlist(&self, id: &str) -> Result<Playlist, StoreError> {
        let path = self.playlist_path(id);
        if !path.exists() {
            return Err(StoreError::UnknownPlaylist(id.to_string()));
        }
        let contents = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

impl Store for JsonStore {
    fn list_playlists(&self) -> Result<Vec<Playlist>, StoreError> {
        let mut playlists = Vec::new();

        for entry in fs::read_dir(&self.playlist_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let contents = fs::read_to_string(&path)?;
            playlists.push(serde_json::from_str(&contents)?);
        }

        debug!("Loaded {} playlists from {}", playlists.len(), self.playlist_dir.display());
        Ok(playlists)
    }

    fn save_playlist(&self, playlist: &Playlist) -> Result<(), StoreError> {
        let path = self.playlist_path(&playlist.id);
        let contents = serde_json::to_string_pretty(playlist)?;
        fs::write(&path, contents)?;

        debug!("Saved playlist {} to {}", playlist.id, path.display());
        Ok(())
    }

    fn delete_playlist(&self, id: &str) -> Result<(), StoreError> {
        let path = self.playlist_path(id);
        if path.exists() {
            fs::remove_file(&path)?;
            debug!("Deleted playlist {}", id);
        }
        Ok(())
    }

    fn set_video_watched(
        &self,
        playlist_id: &str,
        video_id: &str,
        watched: bool,
    ) -> Result<(), StoreError> {
        let mut playlist = self.load_playlist(playlist_id)?;

        for video in &mut playlist.videos {
            if video.id == video_id {
                video.watched = watched;
            }
        }

        self.save_playlist(&playlist)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vault::models::Video;
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    fn playlist(id: &str) -> Playlist {
        Playlist {
            id: id.to_string(),
            title: format!("Playlist {id}"),
            description: String::new(),
            published_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            videos: vec![Video {
                id: "v1".to_string(),
                title: "First".to_string(),
                description: String::new(),
                published_at: Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap(),
                playlist_id: id.to_string(),
                watched: false,
            }],
            updated: false,
        }
    }

    fn open_store(dir: &TempDir) -> JsonStore {
        JsonStore::at(dir.path().join("playlists")).unwrap()
    }

    #[test]
    fn save_then_list_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);

        store.save_playlist(&playlist("a")).unwrap();
        store.save_playlist(&playlist("b")).unwrap();

        let mut listed = store.list_playlists().unwrap();
        listed.sort_by(|x, y| x.id.cmp(&y.id));

        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0], playlist("a"));
        assert_eq!(listed[1], playlist("b"));
    }

    #[test]
    fn delete_removes_only_the_target() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);

        store.save_playlist(&playlist("a")).unwrap();
        store.save_playlist(&playlist("b")).unwrap();
        store.delete_playlist("a").unwrap();

        let listed = store.list_playlists().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, "b");
    }

    #[test]
    fn delete_of_untracked_playlist_is_ok() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);
        assert!(store.delete_playlist("missing").is_ok());
    }

    #[test]
    fn set_video_watched_persists() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);

        store.save_playlist(&playlist("a")).unwrap();
        store.set_video_watched("a", "v1", true).unwrap();

        let listed = store.list_playlists().unwrap();
        assert!(listed[0].videos[0].watched);
    }

    #[test]
    fn set_video_watched_on_untracked_playlist_fails() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);

        let err = store.set_video_watched("missing", "v1", true).unwrap_err();
        assert!(matches!(err, StoreError::UnknownPlaylist(_)));
    }

    #[test]
    fn updated_flag_does_not_survive_a_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);

        let mut tracked = playlist("a");
        tracked.updated = true;
        store.save_playlist(&tracked).unwrap();

        let listed = store.list_playlists().unwrap();
        assert!(!listed[0].updated);
    }
}
