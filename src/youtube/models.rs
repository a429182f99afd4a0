//! YouTube Data API v3 response models

use chrono::{DateTime, Utc};
use serde::Deserialize;

// Search response (search?type=playlist)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchListResponse {
    #[serde(default)]
    pub items: Vec<SearchResult>,
    pub next_page_token: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResult {
    pub id: SearchResultId,
    pub snippet: PlaylistSnippet,
}

/// Search results carry their playlist id one level down
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultId {
    pub playlist_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistSnippet {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub published_at: DateTime<Utc>,
}

// Playlist items response (playlistItems)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemListResponse {
    #[serde(default)]
    pub items: Vec<PlaylistItem>,
    pub next_page_token: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistItem {
    pub snippet: PlaylistItemSnippet,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemSnippet {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub published_at: DateTime<Utc>,
    pub playlist_id: String,
    pub resource_id: ResourceId,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceId {
    pub video_id: String,
}

// Error envelope returned with non-2xx statuses
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiError,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    pub code: i32,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_search_response() {
        let body = r#"{
            "nextPageToken": "CAEQAA",
            "items": [
                {
                    "id": {"kind": "youtube#playlist", "playlistId": "PL123"},
                    "snippet": {
                        "title": "Rust talks",
                        "description": "Conference recordings",
                        "publishedAt": "2023-05-04T10:00:00Z"
                    }
                },
                {
                    "id": {"kind": "youtube#channel"},
                    "snippet": {
                        "title": "Not a playlist",
                        "publishedAt": "2023-05-04T10:00:00Z"
                    }
                }
            ]
        }"#;

        let parsed: SearchListResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.next_page_token.as_deref(), Some("CAEQAA"));
        assert_eq!(parsed.items.len(), 2);
        assert_eq!(parsed.items[0].id.playlist_id.as_deref(), Some("PL123"));
        assert_eq!(parsed.items[0].snippet.title, "Rust talks");
        assert!(parsed.items[1].id.playlist_id.is_none());
        assert_eq!(parsed.items[1].snippet.description, "");
    }

    #[test]
    fn parses_a_playlist_items_response() {
        let body = r#"{
            "items": [
                {
                    "snippet": {
                        "title": "Episode 1",
                        "description": "Pilot",
                        "publishedAt": "2024-02-01T08:30:00Z",
                        "playlistId": "PL123",
                        "resourceId": {"kind": "youtube#video", "videoId": "abc"}
                    }
                }
            ]
        }"#;

        let parsed: PlaylistItemListResponse = serde_json::from_str(body).unwrap();
        assert!(parsed.next_page_token.is_none());
        assert_eq!(parsed.items[0].snippet.resource_id.video_id, "abc");
        assert_eq!(parsed.items[0].snippet.playlist_id, "PL123");
    }

    #[test]
    fn parses_an_error_envelope() {
        let body = r#"{"error": {"code": 403, "message": "quotaExceeded"}}"#;
        let parsed: ApiErrorResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.error.code, 403);
        assert_eq!(parsed.error.message, "quotaExceeded");
    }
}
