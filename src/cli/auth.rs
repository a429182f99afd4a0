//! Keyring-based storage for the YouTube API key

use anyhow::{Context, Result};
use dialoguer::Password;
use keyring::Entry;
use tracing::{debug, info};

const KEYRING_SERVICE: &str = "vidvault";

/// Manages API key storage
pub struct AuthManager;

impl AuthManager {
    /// Resolve the YouTube API key.
    ///
    /// Loads the key from the keyring, or prompts for a new one and verifies
    /// it against the API before storing.
    pub async fn api_key(key: Option<String>, force: bool) -> Result<String> {
        if !force {
            if let Ok(stored) = Self::load() {
                debug!("Found existing API key in keyring");
                return Ok(stored);
            }
        } else {
            debug!("Force flag set, ignoring stored API key");
        }

        let key = key.unwrap_or_else(|| {
            Password::new()
                .with_prompt("YouTube API key")
                .interact()
                .expect("Failed to read API key")
        });
        let key = key.trim().to_string();

        // Verify the key works before persisting it
        Self::verify(&key).await?;

        Self::store(&key)?;
        info!("API key stored in keyring");

        Ok(key)
    }

    /// Load the API key from the keyring
    pub fn load() -> Result<String> {
        Self::entry()?
            .get_password()
            .context("No YouTube API key in keyring")
    }

    /// Store the API key in the keyring
    pub fn store(key: &str) -> Result<()> {
        Self::entry()?
            .set_password(key)
            .context("Failed to store API key in keyring")?;

        debug!("API key stored in keyring");
        Ok(())
    }

    /// Verify the API key with a minimal search request
    async fn verify(key: &str) -> Result<()> {
        use crate::youtube::YouTubeClient;

        debug!("Verifying API key");

        let client = YouTubeClient::new(key)?;
        client
            .search_playlists("verify")
            .await
            .context("Failed to verify the API key")?;

        info!("API key verified successfully");
        Ok(())
    }

    fn entry() -> Result<Entry> {
        Entry::new(KEYRING_SERVICE, "youtube:api-key").context("Failed to access keyring")
    }
}
