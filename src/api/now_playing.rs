use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

use crate::{
    config,
    spotify::{auth::AuthClient, player},
    warning,
};

/// Reports the track currently playing on the configured account, or the
/// most recently played one when nothing is active.
///
/// Stateless and read-only against the provider, so overlapping polls from
/// the frontend are safe and merely redundant. Upstream failures are logged
/// here and answered with a generic body; the detail never reaches the
/// caller.
pub async fn now_playing() -> Response {
    let (Some(auth), Some(refresh_token)) =
        (AuthClient::from_config(), config::spotify_refresh_token())
    else {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Spotify credentials not configured" })),
        )
            .into_response();
    };

    match player::fetch_now_playing(&auth, &config::spotify_api_url(), &refresh_token).await {
        Ok(now_playing) => Json(now_playing).into_response(),
        Err(e) => {
            warning!("Spotify API error: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to fetch Spotify data" })),
            )
                .into_response()
        }
    }
}
