use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

use crate::{api::found, config, spotify::auth::authorize_url, warning};

/// Starts the authorization flow by redirecting to Spotify's consent
/// screen.
///
/// One-shot: reads the client ID and redirect URI from configuration and
/// answers with a `302` carrying the authorize URL. A missing client ID or
/// an unusable authorization endpoint is a configuration error and yields a
/// diagnostic `500` instead of a redirect.
pub async fn auth() -> Response {
    let Some(client_id) = config::spotify_client_id() else {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "SPOTIFY_CLIENT_ID not configured" })),
        )
            .into_response();
    };

    match authorize_url(&client_id, &config::spotify_redirect_uri()) {
        Ok(url) => found(&url),
        Err(e) => {
            warning!("Failed to build authorization URL: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Invalid SPOTIFY_AUTH_URL configuration" })),
            )
                .into_response()
        }
    }
}
