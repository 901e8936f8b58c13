//! Configuration management for the genre filter CLI.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. It provides a centralized way to
//! manage application configuration including Spotify API credentials, tag
//! provider settings, and the local callback server address.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use dotenv;
use std::{env, path::PathBuf};

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `genresift/.env`. This allows users to store
/// credentials securely without hardcoding sensitive values.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/genresift/.env`
/// - macOS: `~/Library/Application Support/genresift/.env`
/// - Windows: `%LOCALAPPDATA%/genresift/.env`
///
/// # Errors
///
/// This function will return an error if:
/// - The parent directory cannot be created
/// - The `.env` file cannot be read or parsed
///
/// # Example
///
/// ```
/// use genresift::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("genresift/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    dotenv::from_path(path).map_err(|e| e.to_string())?;
    Ok(())
}

/// Returns the server address for the local OAuth callback server.
///
/// # Panics
///
/// Panics if the `SERVER_ADDRESS` environment variable is not set.
///
/// # Example
///
/// ```
/// let addr = server_addr(); // e.g., "127.0.0.1:8080"
/// ```
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").expect("SERVER_ADDRESS must be set")
}

/// Returns the Spotify user ID that owns created playlists.
///
/// The `--user` CLI flag takes precedence over this value, and when neither
/// is present the id is resolved from the `/me` endpoint instead, so this
/// accessor returns an `Option` rather than panicking.
///
/// # Example
///
/// ```
/// let user_id = spotify_user(); // e.g., Some("username".to_string())
/// ```
pub fn spotify_user() -> Option<String> {
    env::var("SPOTIFY_USER_ID").ok()
}

/// Returns the Spotify API client ID for authentication.
///
/// Retrieves the `SPOTIFY_API_AUTH_CLIENT_ID` environment variable which
/// contains the client ID obtained when registering the application with
/// Spotify's developer platform.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_AUTH_CLIENT_ID` environment variable is not set.
pub fn spotify_client_id() -> String {
    env::var("SPOTIFY_API_AUTH_CLIENT_ID").expect("SPOTIFY_API_AUTH_CLIENT_ID must be set")
}

/// Returns the Spotify OAuth redirect URI.
///
/// This must match the redirect URI registered in the Spotify application
/// settings.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_REDIRECT_URI` environment variable is not set.
pub fn spotify_redirect_uri() -> String {
    env::var("SPOTIFY_API_REDIRECT_URI").expect("SPOTIFY_API_REDIRECT_URI must be set")
}

/// Returns the Spotify API scope permissions.
///
/// The scope must cover private playlist reads and playlist modification for
/// the filter pipeline to work end to end.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_AUTH_SCOPE` environment variable is not set.
///
/// # Example
///
/// ```
/// let scope = spotify_scope(); // e.g., "playlist-read-private playlist-modify-private"
/// ```
pub fn spotify_scope() -> String {
    env::var("SPOTIFY_API_AUTH_SCOPE").expect("SPOTIFY_API_AUTH_SCOPE must be set")
}

/// Returns the Spotify OAuth authorization URL.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_AUTH_URL` environment variable is not set.
pub fn spotify_apiauth_url() -> String {
    env::var("SPOTIFY_API_AUTH_URL").expect("SPOTIFY_API_AUTH_URL must be set")
}

/// Returns the Spotify Web API base URL.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_URL` environment variable is not set.
///
/// # Example
///
/// ```
/// let api_url = spotify_apiurl(); // e.g., "https://api.spotify.com/v1"
/// ```
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").expect("SPOTIFY_API_URL must be set")
}

/// Returns the Spotify OAuth token exchange URL.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_TOKEN_URL` environment variable is not set.
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL").expect("SPOTIFY_API_TOKEN_URL must be set")
}

/// Returns the MusicBrainz Web Service base URL.
///
/// # Panics
///
/// Panics if the `MUSICBRAINZ_API_URL` environment variable is not set.
///
/// # Example
///
/// ```
/// let api_url = musicbrainz_apiurl(); // e.g., "https://musicbrainz.org/ws/2"
/// ```
pub fn musicbrainz_apiurl() -> String {
    env::var("MUSICBRAINZ_API_URL").expect("MUSICBRAINZ_API_URL must be set")
}

/// Returns the User-Agent string sent with every MusicBrainz request.
///
/// MusicBrainz requires a meaningful User-Agent identifying the application
/// as part of their terms of service. It is applied once when the provider's
/// HTTP client is constructed.
///
/// # Panics
///
/// Panics if the `MUSICBRAINZ_USER_AGENT` environment variable is not set.
pub fn musicbrainz_user_agent() -> String {
    env::var("MUSICBRAINZ_USER_AGENT").expect("MUSICBRAINZ_USER_AGENT must be set")
}

/// Returns the Last.fm API base URL.
///
/// # Panics
///
/// Panics if the `LASTFM_API_URL` environment variable is not set.
///
/// # Example
///
/// ```
/// let api_url = lastfm_apiurl(); // e.g., "https://ws.audioscrobbler.com/2.0"
/// ```
pub fn lastfm_apiurl() -> String {
    env::var("LASTFM_API_URL").expect("LASTFM_API_URL must be set")
}

/// Returns the Last.fm API key.
///
/// Only required when the Last.fm tag provider is selected; the MusicBrainz
/// provider never reads it.
///
/// # Panics
///
/// Panics if the `LASTFM_API_KEY` environment variable is not set.
pub fn lastfm_api_key() -> String {
    env::var("LASTFM_API_KEY").expect("LASTFM_API_KEY must be set")
}
