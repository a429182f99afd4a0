//! Playlist and video domain types

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// How long a video counts as newly published
const FRESH_WINDOW_DAYS: i64 = 3;

/// A single video inside a tracked playlist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "publishedAt")]
    pub published_at: DateTime<Utc>,
    #[serde(rename = "playlistId")]
    pub playlist_id: String,
    pub watched: bool,
}

impl Video {
    /// Whether the video was published within the last few days, for the
    /// `>NEW<` marker in the playlist view.
    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(self.published_at) < Duration::days(FRESH_WINDOW_DAYS)
    }
}

/// A tracked playlist with its locally cached videos
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "publishedAt")]
    pub published_at: DateTime<Utc>,
    #[serde(default)]
    pub videos: Vec<Video>,
    /// True iff the last reconciliation appended new videos. Recomputed each
    /// session, never persisted.
    #[serde(skip)]
    pub updated: bool,
}

impl Playlist {
    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }

    /// URL the system browser is pointed at when the playlist is opened
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/playlist?list={}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn video_published_at(ts: DateTime<Utc>) -> Video {
        Video {
            id: "v1".to_string(),
            title: "A video".to_string(),
            description: String::new(),
            published_at: ts,
            playlist_id: "p1".to_string(),
            watched: false,
        }
    }

    #[test]
    fn fresh_within_three_days() {
        let now = Utc.with_ymd_and_hms(2024, 6, 10, 12, 0, 0).unwrap();
        let video = video_published_at(now - Duration::days(2));
        assert!(video.is_fresh(now));
    }

    #[test]
    fn stale_after_three_days() {
        let now = Utc.with_ymd_and_hms(2024, 6, 10, 12, 0, 0).unwrap();
        let video = video_published_at(now - Duration::days(4));
        assert!(!video.is_fresh(now));
    }

    #[test]
    fn updated_flag_is_not_serialized() {
        let playlist = Playlist {
            id: "p1".to_string(),
            title: "Test".to_string(),
            description: String::new(),
            published_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            videos: Vec::new(),
            updated: true,
        };

        let json = serde_json::to_string(&playlist).unwrap();
        assert!(!json.contains("updated"));

        let restored: Playlist = serde_json::from_str(&json).unwrap();
        assert!(!restored.updated);
    }

    #[test]
    fn watch_url_points_at_the_playlist() {
        let playlist = Playlist {
            id: "PL123".to_string(),
            title: String::new(),
            description: String::new(),
            published_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            videos: Vec::new(),
            updated: false,
        };
        assert_eq!(
            playlist.watch_url(),
            "https://www.youtube.com/playlist?list=PL123"
        );
    }
}
