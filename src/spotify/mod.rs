//! # Spotify Integration Module
//!
//! This module is the integration layer between the service and the Spotify
//! Web API. It handles all HTTP communication with Spotify: OAuth token
//! grants and the player queries backing the now-playing endpoint.
//!
//! ## Core Modules
//!
//! - [`auth`] - OAuth 2.0 authorization-code flow: authorize URL
//!   construction and the credential exchange client. Both grant types
//!   (`authorization_code` and `refresh_token`) go through one shared
//!   request path authenticated with an HTTP Basic header, and upstream
//!   rejections are returned as data ([`auth::TokenExchange::Denied`])
//!   rather than errors, so each caller decides how much detail to expose.
//! - [`player`] - Player state queries: currently-playing,
//!   recently-played, and the fallback sequence combining them.
//!
//! ## Error Handling
//!
//! Transport failures surface as `Err`; they are logged by the API layer
//! and never retried. A non-success status from the player endpoints is
//! "nothing playing", not an error.

pub mod auth;
pub mod player;
