use std::{collections::HashMap, net::SocketAddr, sync::Arc};

use axum::{
    Extension, Form, Router,
    extract::Query,
    http::{HeaderMap, StatusCode, header::LOCATION},
    response::{IntoResponse, Json, Response},
    routing::post,
};
use base64::{Engine, engine::general_purpose::STANDARD};
use serde_json::json;
use tokio::sync::Mutex;

use sponow::api;

/// Stand-in for Spotify's token endpoint, recording what the handlers send.
#[derive(Default)]
struct TokenServer {
    hits: usize,
    grant_types: Vec<String>,
    authorization: Option<String>,
    deny: bool,
}

async fn token_endpoint(
    Extension(state): Extension<Arc<Mutex<TokenServer>>>,
    headers: HeaderMap,
    Form(form): Form<HashMap<String, String>>,
) -> Response {
    let mut state = state.lock().await;
    state.hits += 1;
    if let Some(grant_type) = form.get("grant_type") {
        state.grant_types.push(grant_type.clone());
    }
    state.authorization = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    if state.deny {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "invalid_grant",
                "error_description": "Invalid authorization code"
            })),
        )
            .into_response()
    } else {
        Json(json!({
            "access_token": "fresh-access-token",
            "token_type": "Bearer",
            "refresh_token": "long-lived-refresh-token",
            "scope": "user-read-currently-playing",
            "expires_in": 3600
        }))
        .into_response()
    }
}

async fn start_token_server(state: Arc<Mutex<TokenServer>>) -> SocketAddr {
    let app = Router::new().route("/api/token", post(token_endpoint).layer(Extension(state)));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

async fn body_string(res: Response) -> String {
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn params(pairs: &[(&str, &str)]) -> Query<HashMap<String, String>> {
    Query(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    )
}

fn location(res: &Response) -> String {
    res.headers()
        .get(LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

// The handlers read credentials from the process environment, so every
// scenario runs inside this one test in a fixed order: everything that
// depends on missing configuration first, then the configured cases against
// a local token server.
#[tokio::test]
async fn test_auth_and_callback_endpoints() {
    // --- unconfigured ---

    // Authorization initiator without a client ID answers 500, no redirect.
    let res = api::auth().await;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_string(res).await.contains("SPOTIFY_CLIENT_ID not configured"));

    // Direct navigation to the callback goes back to the site root.
    let res = api::callback(params(&[])).await;
    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(location(&res), "/");

    // A provider-reported error is forwarded to the root, untouched.
    let res = api::callback(params(&[("error", "access_denied")])).await;
    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(location(&res), "/?error=access_denied");

    // A code without credentials is a configuration error, not an exchange.
    let res = api::callback(params(&[("code", "abc123")])).await;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(
        body_string(res)
            .await
            .contains("Spotify credentials not configured")
    );

    // --- configured, against a local token server ---

    let state = Arc::new(Mutex::new(TokenServer {
        deny: true,
        ..TokenServer::default()
    }));
    let addr = start_token_server(Arc::clone(&state)).await;

    unsafe {
        std::env::set_var("SPOTIFY_CLIENT_ID", "test-client-id");
        std::env::set_var("SPOTIFY_CLIENT_SECRET", "test-client-secret");
        std::env::set_var("SPOTIFY_TOKEN_URL", format!("http://{}/api/token", addr));
    }

    // Initiator now redirects to the consent screen.
    let res = api::auth().await;
    assert_eq!(res.status(), StatusCode::FOUND);
    let target = location(&res);
    assert!(target.contains("client_id=test-client-id"));
    assert!(target.contains("scope=user-read-currently-playing+user-read-recently-played"));

    // Rejected exchange: exactly one POST, upstream body echoed into the page.
    let res = api::callback(params(&[("code", "bad-code")])).await;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_string(res).await.contains("invalid_grant"));
    {
        let state = state.lock().await;
        assert_eq!(state.hits, 1);
        assert_eq!(state.grant_types, vec!["authorization_code"]);
        let expected = format!(
            "Basic {}",
            STANDARD.encode("test-client-id:test-client-secret")
        );
        assert_eq!(state.authorization.as_deref(), Some(expected.as_str()));
    }

    // Granted exchange: the page carries the refresh token for copy-paste.
    state.lock().await.deny = false;
    let res = api::callback(params(&[("code", "good-code")])).await;
    assert_eq!(res.status(), StatusCode::OK);
    let page = body_string(res).await;
    assert!(page.contains("long-lived-refresh-token"));
    assert!(page.contains("SPOTIFY_REFRESH_TOKEN=long-lived-refresh-token"));
    assert_eq!(state.lock().await.hits, 2);

    // A malformed authorization endpoint override must not take the
    // initiator down; it answers with its diagnostic 500.
    unsafe {
        std::env::set_var("SPOTIFY_AUTH_URL", "not a url");
    }
    let res = api::auth().await;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(
        body_string(res)
            .await
            .contains("Invalid SPOTIFY_AUTH_URL configuration")
    );
}
