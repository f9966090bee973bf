use axum::{Router, routing::get};
use std::{net::SocketAddr, str::FromStr};

use crate::{api, error, success};

/// Builds the application router.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/api/spotify", get(api::now_playing))
        .route("/api/spotify/auth", get(api::auth))
        .route("/api/spotify/callback", get(api::callback))
}

pub async fn start_api_server(address: &str) {
    let addr = match SocketAddr::from_str(address) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    success!("Listening on http://{}", addr);
    axum::serve(listener, router()).await.unwrap();
}
