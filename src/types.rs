use serde::{Deserialize, Serialize};

/// Token pair returned by Spotify's token endpoint.
///
/// The `scope` and issue-time fields of the upstream response are dropped;
/// expiry is not tracked locally because every now-playing request mints a
/// fresh access token from the refresh token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    /// Absent on refresh grants unless Spotify chooses to rotate the token.
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default = "default_expires_in")]
    pub expires_in: u64,
}

fn default_expires_in() -> u64 {
    3600
}

/// Public JSON body of the now-playing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NowPlaying {
    pub is_playing: bool,
    pub track: Option<TrackSnapshot>,
}

/// Per-request view of a track, derived from a provider payload and never
/// cached or stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackSnapshot {
    pub name: String,
    pub artist: String,
    pub album: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album_art: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_url: Option<String>,
}

impl TrackSnapshot {
    /// Maps a provider track object into the snapshot shape.
    ///
    /// The artist is the first entry of the artists list; a track without
    /// one produces no snapshot. Missing album art and external URL are
    /// tolerated and leave their fields unset.
    pub fn from_track(track: &Track) -> Option<TrackSnapshot> {
        let artist = track.artists.first()?;
        Some(TrackSnapshot {
            name: track.name.clone(),
            artist: artist.name.clone(),
            album: track.album.name.clone(),
            album_art: track.album.images.first().map(|i| i.url.clone()),
            external_url: track.external_urls.spotify.clone(),
        })
    }
}

/// Response of `GET /me/player/currently-playing`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentlyPlayingResponse {
    pub item: Option<Track>,
}

/// Response of `GET /me/player/recently-played`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentlyPlayedResponse {
    pub items: Vec<PlayedItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayedItem {
    pub track: Track,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub name: String,
    #[serde(default)]
    pub artists: Vec<TrackArtist>,
    pub album: TrackAlbum,
    #[serde(default)]
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtist {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackAlbum {
    pub name: String,
    #[serde(default)]
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExternalUrls {
    pub spotify: Option<String>,
}
