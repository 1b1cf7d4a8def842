use std::fmt;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tabled::Tabled;

use crate::utils;

/// Client-credentials secret pair. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    client_id: String,
    client_secret: String,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &"<redacted>")
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// A bearer token from the client-credentials exchange.
///
/// Only [`TokenManager`](crate::management::TokenManager) creates tokens. The
/// expiry is stored as an absolute instant so validity can be checked without
/// remembering when the token was issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub access_token: String,
    /// Already reduced by the safety margin.
    pub expires_at: DateTime<Utc>,
}

impl Token {
    /// `true` while the current time is strictly before `expires_at`.
    pub fn is_valid(&self) -> bool {
        Utc::now() < self.expires_at
    }
}

/// Body of the token endpoint. Both fields are optional so a partial answer
/// becomes a `MalformedResponse` instead of a deserialization error.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: Option<String>,
    pub expires_in: Option<i64>,
}

/// Normalized artist profile.
///
/// Built from search results or a profile lookup by
/// [`normalize`](crate::spotify::normalize). Missing fields are already
/// defaulted, so every field is always present.
///
/// # Fields
///
/// * `id` - Catalog identifier, the identity used for deduplication
/// * `name` - Display name
/// * `followers` - Follower count, `0` when unknown
/// * `popularity` - Popularity score between 0 and 100
/// * `genres` - Genre names in catalog order, possibly empty
/// * `url` - Public profile link, empty when unknown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistRecord {
    pub id: String,
    pub name: String,
    pub followers: u64,
    pub popularity: u8,
    pub genres: Vec<String>,
    pub url: String,
}

impl ArtistRecord {
    /// Comma-joined genres, `N/A` when the artist has none.
    pub fn genre_list(&self) -> String {
        if self.genres.is_empty() {
            "N/A".to_string()
        } else {
            self.genres.join(", ")
        }
    }
}

/// One of an artist's top tracks, scoped to a single report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackRecord {
    pub title: String,
    pub album: String,
    pub popularity: u8,
    pub duration_minutes: u64,
}

#[derive(Tabled)]
pub struct ArtistTableRow {
    #[tabled(rename = "Artist")]
    pub name: String,
    #[tabled(rename = "Followers")]
    pub followers: String,
    #[tabled(rename = "Popularity")]
    pub popularity: u8,
    #[tabled(rename = "Genres")]
    pub genres: String,
}

impl From<&ArtistRecord> for ArtistTableRow {
    fn from(artist: &ArtistRecord) -> Self {
        Self {
            name: artist.name.clone(),
            followers: utils::format_thousands(artist.followers),
            popularity: artist.popularity,
            genres: artist.genre_list(),
        }
    }
}

#[derive(Tabled)]
pub struct TrackTableRow {
    #[tabled(rename = "Track")]
    pub title: String,
    #[tabled(rename = "Album")]
    pub album: String,
    #[tabled(rename = "Popularity")]
    pub popularity: u8,
    #[tabled(rename = "Duration (min)")]
    pub duration_minutes: u64,
}

impl From<&TrackRecord> for TrackTableRow {
    fn from(track: &TrackRecord) -> Self {
        Self {
            title: track.title.clone(),
            album: track.album.clone(),
            popularity: track.popularity,
            duration_minutes: track.duration_minutes,
        }
    }
}
