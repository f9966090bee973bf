//! # API Module
//!
//! HTTP endpoints served by the application, implemented as
//! [Axum](https://docs.rs/axum) handlers and wired together in
//! [`crate::server`].
//!
//! ## Endpoints
//!
//! - [`auth`] - Authorization initiator: redirects the operator's browser
//!   to Spotify's consent screen with the fixed scope set.
//! - [`callback`] - OAuth callback: exchanges the authorization code for a
//!   token pair and renders the refresh token for manual copy into the
//!   service configuration. Only ever seen by the site operator during
//!   setup.
//! - [`now_playing`] - Now-playing fetcher polled by the site's frontend:
//!   refreshes the access token, queries the current track, and falls back
//!   to the listening history.
//! - [`health`] - Health check returning status and version information.
//!
//! Each handler is a stateless request/response cycle; there is no shared
//! state between them, and the refresh token obtained by the callback moves
//! into configuration by hand, never through this process.

mod auth;
mod callback;
mod health;
mod now_playing;

pub use auth::auth;
pub use callback::callback;
pub use health::health;
pub use now_playing::now_playing;

use axum::{
    http::{StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
};

/// A plain `302 Found` redirect. axum's `Redirect` helpers only offer
/// 303/307/308.
pub(crate) fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(LOCATION, location)]).into_response()
}
