use std::collections::HashMap;

use axum::{
    extract::Query,
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
};
use serde_json::json;

use crate::{
    config,
    spotify::auth::{AuthClient, TokenExchange},
    warning,
};

/// Handles the OAuth callback from Spotify's authorization server.
///
/// Provider-reported errors and direct navigation both redirect back to the
/// site root; a real authorization code is exchanged exactly once for a
/// token pair, and the resulting refresh token is rendered for the operator
/// to copy into configuration. A failed exchange is never retried; the flow
/// has to be restarted from the authorization endpoint.
pub async fn callback(Query(params): Query<HashMap<String, String>>) -> Response {
    if let Some(error) = params.get("error") {
        return super::found(&format!("/?error={}", error));
    }

    let Some(code) = params.get("code") else {
        // Accessed directly without going through the consent screen.
        return super::found("/");
    };

    let Some(auth) = AuthClient::from_config() else {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Spotify credentials not configured" })),
        )
            .into_response();
    };

    match auth
        .exchange_authorization_code(code, &config::spotify_redirect_uri())
        .await
    {
        Ok(TokenExchange::Granted(token)) => {
            Html(token_page(token.refresh_token.as_deref().unwrap_or_default())).into_response()
        }
        Ok(TokenExchange::Denied { body, .. }) => {
            (StatusCode::INTERNAL_SERVER_ERROR, Html(denied_page(&body))).into_response()
        }
        Err(e) => {
            warning!("Token exchange failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, Html(failure_page())).into_response()
        }
    }
}

/// Success page showing the refresh token in a copy-friendly element.
///
/// This page is the only place the token ever appears; the service does not
/// persist it.
fn token_page(refresh_token: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
  <head><title>Spotify Token</title><meta charset="utf-8"></head>
  <body style="font-family: sans-serif; padding: 40px; max-width: 800px; margin: 0 auto;">
    <h1>Authorization successful</h1>
    <p>Copy your refresh token:</p>
    <div style="background: #f8f8f8; padding: 20px; border-radius: 8px;">
      <code style="word-break: break-all;">{token}</code>
    </div>
    <p>Set it in the service environment and restart:</p>
    <div style="background: #f8f8f8; padding: 20px; border-radius: 8px;">
      <code>SPOTIFY_REFRESH_TOKEN={token}</code>
    </div>
    <p>This token will not be shown again.</p>
    <p><a href="/">Back to site</a></p>
  </body>
</html>"#,
        token = refresh_token
    )
}

/// Error page embedding the provider's response body verbatim. Operator
/// only, so upstream detail is acceptable here.
fn denied_page(upstream_body: &str) -> String {
    format!(
        r#"<html>
  <head><title>Spotify Auth Error</title></head>
  <body style="font-family: monospace; padding: 40px; max-width: 800px; margin: 0 auto;">
    <h1>Error getting token</h1>
    <pre style="background: #f0f0f0; padding: 20px; border-radius: 8px; overflow: auto;">{}</pre>
    <p><a href="/api/spotify/auth">Try again</a></p>
  </body>
</html>"#,
        upstream_body
    )
}

fn failure_page() -> String {
    r#"<html>
  <head><title>Spotify Auth Error</title></head>
  <body style="font-family: monospace; padding: 40px; max-width: 800px; margin: 0 auto;">
    <h1>Error</h1>
    <p>Token exchange failed. Check the server log.</p>
    <p><a href="/api/spotify/auth">Try again</a></p>
  </body>
</html>"#
        .to_string()
}
