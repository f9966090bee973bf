use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::{Client, StatusCode, Url, header::AUTHORIZATION};

use crate::{Res, config, types::TokenPair};

/// Outcome of a token request against Spotify's token endpoint.
///
/// Upstream rejections carry the raw response body so the caller chooses
/// what to surface: the callback page shows it to the operator, the
/// now-playing endpoint only logs it.
#[derive(Debug, Clone)]
pub enum TokenExchange {
    Granted(TokenPair),
    Denied { status: StatusCode, body: String },
}

/// Client for Spotify's token endpoint.
///
/// Holds the application credentials and performs both grant types used by
/// the service. Stateless beyond its configuration; one instance is built
/// per request.
pub struct AuthClient {
    client_id: String,
    client_secret: String,
    token_url: String,
}

impl AuthClient {
    pub fn new(client_id: String, client_secret: String) -> Self {
        AuthClient {
            client_id,
            client_secret,
            token_url: config::spotify_token_url(),
        }
    }

    /// Builds a client from the environment, or `None` if either credential
    /// is missing.
    pub fn from_config() -> Option<Self> {
        Some(Self::new(
            config::spotify_client_id()?,
            config::spotify_client_secret()?,
        ))
    }

    /// Overrides the token endpoint URL.
    pub fn with_token_url(mut self, url: impl Into<String>) -> Self {
        self.token_url = url.into();
        self
    }

    /// Exchanges a single-use authorization code for a token pair.
    ///
    /// Performs exactly one POST with `grant_type=authorization_code`; a
    /// failed exchange is not retried and requires restarting the
    /// authorization flow.
    pub async fn exchange_authorization_code(
        &self,
        code: &str,
        redirect_uri: &str,
    ) -> Res<TokenExchange> {
        self.token_request(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", redirect_uri),
        ])
        .await
    }

    /// Exchanges a long-lived refresh token for a fresh access token.
    pub async fn refresh_access_token(&self, refresh_token: &str) -> Res<TokenExchange> {
        self.token_request(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
        ])
        .await
    }

    async fn token_request(&self, form: &[(&str, &str)]) -> Res<TokenExchange> {
        let client = Client::new();
        let res = client
            .post(&self.token_url)
            .header(AUTHORIZATION, self.basic_auth())
            .form(form)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Ok(TokenExchange::Denied { status, body });
        }

        let token: TokenPair = res.json().await?;
        Ok(TokenExchange::Granted(token))
    }

    fn basic_auth(&self) -> String {
        let credentials = format!("{}:{}", self.client_id, self.client_secret);
        format!("Basic {}", STANDARD.encode(credentials))
    }
}

/// Constructs the authorization URL the initiator endpoint redirects to.
///
/// Scopes are space-joined; the redirect URI and scope list are
/// percent-encoded through `Url`'s query-pair serializer. Fails when the
/// configured authorization endpoint is not a valid URL, so the caller can
/// answer with a diagnostic instead of panicking.
pub fn authorize_url(client_id: &str, redirect_uri: &str) -> Res<String> {
    let url = Url::parse_with_params(
        &config::spotify_auth_url(),
        &[
            ("client_id", client_id),
            ("response_type", "code"),
            ("redirect_uri", redirect_uri),
            ("scope", &config::SCOPES.join(" ")),
        ],
    )?;

    Ok(url.into())
}
