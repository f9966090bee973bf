use reqwest::{Client, StatusCode};

use crate::{
    Res,
    spotify::auth::{AuthClient, TokenExchange},
    types::{CurrentlyPlayingResponse, NowPlaying, PlayedItem, RecentlyPlayedResponse, TrackSnapshot},
};

/// Queries the track the user is currently listening to.
///
/// A `204 No Content` or any non-success status means nothing is playing
/// and yields `Ok(None)`; only transport failures are errors.
pub async fn currently_playing(
    client: &Client,
    api_url: &str,
    access_token: &str,
) -> Res<Option<CurrentlyPlayingResponse>> {
    let res = client
        .get(format!("{}/me/player/currently-playing", api_url))
        .bearer_auth(access_token)
        .send()
        .await?;

    if res.status() == StatusCode::NO_CONTENT || !res.status().is_success() {
        return Ok(None);
    }

    let playing: CurrentlyPlayingResponse = res.json().await?;
    Ok(Some(playing))
}

/// Queries the single most recently played track.
///
/// A non-success status or an empty history yields `Ok(None)`.
pub async fn recently_played(
    client: &Client,
    api_url: &str,
    access_token: &str,
) -> Res<Option<PlayedItem>> {
    let res = client
        .get(format!("{}/me/player/recently-played", api_url))
        .query(&[("limit", "1")])
        .bearer_auth(access_token)
        .send()
        .await?;

    if !res.status().is_success() {
        return Ok(None);
    }

    let recent: RecentlyPlayedResponse = res.json().await?;
    Ok(recent.items.into_iter().next())
}

/// Runs the full now-playing sequence: refresh the access token, ask for
/// the current track, and fall back to the most recently played one.
///
/// Strictly sequential with no retries. A rejected refresh is an error
/// carrying the upstream body; callers log it and answer with a generic
/// failure, never forwarding the detail.
pub async fn fetch_now_playing(
    auth: &AuthClient,
    api_url: &str,
    refresh_token: &str,
) -> Res<NowPlaying> {
    let token = match auth.refresh_access_token(refresh_token).await? {
        TokenExchange::Granted(token) => token,
        TokenExchange::Denied { status, body } => {
            return Err(format!("token refresh rejected ({}): {}", status, body).into());
        }
    };

    let client = Client::new();

    if let Some(playing) = currently_playing(&client, api_url, &token.access_token).await? {
        let track = playing
            .item
            .as_ref()
            .and_then(TrackSnapshot::from_track)
            .ok_or("currently-playing response carried no usable track item")?;
        return Ok(NowPlaying {
            is_playing: true,
            track: Some(track),
        });
    }

    let track = recently_played(&client, api_url, &token.access_token)
        .await?
        .and_then(|item| TrackSnapshot::from_track(&item.track));

    Ok(NowPlaying {
        is_playing: false,
        track,
    })
}
