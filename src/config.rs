//! Configuration management for the now-playing service.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and a `.env` file. It provides a centralized way to
//! manage application configuration including Spotify API credentials, the
//! server bind address, and the upstream endpoint URLs.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the working directory
//! 3. Application defaults (where applicable)
//!
//! Credentials are deliberately optional at this layer: the endpoints answer
//! missing configuration with an HTTP 500 and a diagnostic body, so nothing
//! here panics when a variable is absent.

use std::env;

/// Default bind address for the HTTP server.
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:3000";

/// Default OAuth redirect URI, matching the callback route of a local
/// deployment. Must agree with the redirect URI registered in the Spotify
/// application settings.
pub const DEFAULT_REDIRECT_URI: &str = "http://127.0.0.1:3000/api/spotify/callback";

/// Spotify OAuth authorization endpoint.
pub const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";

/// Spotify OAuth token exchange endpoint.
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Spotify Web API base URL.
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";

/// OAuth scopes requested during authorization. The now-playing endpoint
/// needs nothing beyond read access to the player state and history.
pub const SCOPES: &[&str] = &["user-read-currently-playing", "user-read-recently-played"];

/// Loads environment variables from a `.env` file in the working directory.
///
/// Missing files are ignored; deployments commonly provide the environment
/// directly.
pub fn load_env() {
    dotenv::dotenv().ok();
}

/// Returns the bind address for the HTTP server.
///
/// Reads the `SERVER_ADDRESS` environment variable, falling back to
/// [`DEFAULT_SERVER_ADDRESS`].
pub fn server_address() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| DEFAULT_SERVER_ADDRESS.to_string())
}

/// Returns the Spotify API client ID, if configured.
///
/// Reads the `SPOTIFY_CLIENT_ID` environment variable, the client ID
/// obtained when registering the application with Spotify's developer
/// platform.
pub fn spotify_client_id() -> Option<String> {
    env::var("SPOTIFY_CLIENT_ID").ok()
}

/// Returns the Spotify API client secret, if configured.
///
/// Reads the `SPOTIFY_CLIENT_SECRET` environment variable. The secret is
/// only ever used to build the Basic authorization header for token
/// requests and must never appear in logs.
pub fn spotify_client_secret() -> Option<String> {
    env::var("SPOTIFY_CLIENT_SECRET").ok()
}

/// Returns the long-lived refresh token, if configured.
///
/// Reads the `SPOTIFY_REFRESH_TOKEN` environment variable. The token is
/// obtained once through the callback endpoint and copied into the
/// environment by the operator; the service never persists it itself.
pub fn spotify_refresh_token() -> Option<String> {
    env::var("SPOTIFY_REFRESH_TOKEN").ok()
}

/// Returns the OAuth redirect URI.
///
/// Reads the `SPOTIFY_REDIRECT_URI` environment variable, falling back to
/// [`DEFAULT_REDIRECT_URI`].
pub fn spotify_redirect_uri() -> String {
    env::var("SPOTIFY_REDIRECT_URI").unwrap_or_else(|_| DEFAULT_REDIRECT_URI.to_string())
}

/// Returns the Spotify OAuth authorization URL.
pub fn spotify_auth_url() -> String {
    env::var("SPOTIFY_AUTH_URL").unwrap_or_else(|_| DEFAULT_AUTH_URL.to_string())
}

/// Returns the Spotify OAuth token exchange URL.
pub fn spotify_token_url() -> String {
    env::var("SPOTIFY_TOKEN_URL").unwrap_or_else(|_| DEFAULT_TOKEN_URL.to_string())
}

/// Returns the Spotify Web API base URL.
pub fn spotify_api_url() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}
