//! YouTube Data API HTTP client

use anyhow::{Context, Result};
use reqwest::Client;
use tracing::debug;

use crate::vault::{Playlist, Video};

use super::models::*;

const API_BASE: &str = "https://www.googleapis.com/youtube/v3";

/// Page size for playlistItems pagination (API maximum)
const ITEMS_PER_PAGE: u32 = 50;

/// Search results requested per query
const SEARCH_RESULTS: u32 = 25;

/// HTTP client for the YouTube Data API v3
#[derive(Clone)]
pub struct YouTubeClient {
    api_key: String,
    http_client: Client,
}

impl YouTubeClient {
    /// Create a new client for the given API key
    pub fn new(api_key: &str) -> Result<Self> {
        let http_client = Client::builder()
            .user_agent("vidvault/0.1.0")
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            api_key: api_key.trim().to_string(),
            http_client,
        })
    }

    /// Build an endpoint URL with the API key appended
    fn build_url(&self, endpoint: &str, params: &[(&str, &str)]) -> String {
        let query: String = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        format!("{}/{}?{}&key={}", API_BASE, endpoint, query, self.api_key)
    }

    /// Search public playlists by keyword
    ///
    /// Returned playlists carry metadata only; their video lists are empty
    /// until [`Self::playlist_items`] is called.
    pub async fn search_playlists(&self, query: &str) -> Result<Vec<Playlist>> {
        let max_results = SEARCH_RESULTS.to_string();
        let url = self.build_url(
            "search",
            &[
                ("part", "snippet"),
                ("type", "playlist"),
                ("maxResults", &max_results),
                ("q", query),
            ],
        );
        debug!("Searching playlists for {:?}", query);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .context("Failed to reach the YouTube API")?;
        let body: SearchListResponse = Self::check_response(response)
            .await?
            .json()
            .await
            .context("Failed to parse search response")?;

        let playlists: Vec<Playlist> = body
            .items
            .into_iter()
            .filter_map(|result| {
                let id = result.id.playlist_id?;
                Some(Playlist {
                    id,
                    title: result.snippet.title,
                    description: result.snippet.description,
                    published_at: result.snippet.published_at,
                    videos: Vec::new(),
                    updated: false,
                })
            })
            .collect();

        debug!("Found {} playlists", playlists.len());
        Ok(playlists)
    }

    /// Fetch every video of a playlist, following pagination until the feed
    /// is exhausted
    pub async fn playlist_items(&self, playlist_id: &str) -> Result<Vec<Video>> {
        let mut videos = Vec::new();
        let mut page_token = String::new();
        let max_results = ITEMS_PER_PAGE.to_string();

        loop {
            let mut params = vec![
                ("part", "snippet"),
                ("playlistId", playlist_id),
                ("maxResults", max_results.as_str()),
            ];
            if !page_token.is_empty() {
                params.push(("pageToken", page_token.as_str()));
            }

            let url = self.build_url("playlistItems", &params);
            let response = self
                .http_client
                .get(&url)
                .send()
                .await
                .context("Failed to fetch playlist items")?;
            let body: PlaylistItemListResponse = Self::check_response(response)
                .await?
                .json()
                .await
                .context("Failed to parse playlist items response")?;

            for item in body.items {
                videos.push(Video {
                    id: item.snippet.resource_id.video_id,
                    title: item.snippet.title,
                    description: item.snippet.description,
                    published_at: item.snippet.published_at,
                    playlist_id: item.snippet.playlist_id,
                    watched: false,
                });
            }

            match body.next_page_token {
                Some(token) if !token.is_empty() => page_token = token,
                _ => break,
            }
        }

        debug!("Fetched {} videos for playlist {}", videos.len(), playlist_id);
        Ok(videos)
    }

    /// Turn a non-2xx response into the API's own error message
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        if let Ok(envelope) = response.json::<ApiErrorResponse>().await {
            anyhow::bail!(
                "YouTube API error {}: {}",
                envelope.error.code,
                envelope.error.message
            );
        }
        anyhow::bail!("YouTube API request failed with status {}", status)
    }
}
