//! Flattening of catalog JSON into records.
//!
//! Every optional leaf has exactly one default, defined here:
//!
//! | Field                    | Missing / invalid value |
//! |--------------------------|-------------------------|
//! | `name`, `album.name`     | empty string            |
//! | `external_urls.spotify`  | empty string            |
//! | `followers.total`        | `0`                     |
//! | `popularity`             | `0` (clamped to 100)    |
//! | `genres`                 | empty list              |
//! | `duration_ms`            | `0`                     |
//!
//! Only a missing top-level container (`artists.items`, `tracks`, or a profile
//! that is not an object with an `id`) is reported as
//! [`Error::MalformedResponse`].

use serde_json::Value;

use crate::{
    Error, Res,
    types::{ArtistRecord, TrackRecord},
    utils,
};

const MS_PER_MINUTE: u64 = 60_000;

/// Reads `artists.items` of a search response.
///
/// Items without an `id` are skipped since they can be neither saved nor
/// looked up later.
pub fn normalize_artist_search(raw: &Value) -> Res<Vec<ArtistRecord>> {
    let items = raw
        .get("artists")
        .and_then(|a| a.get("items"))
        .and_then(Value::as_array)
        .ok_or_else(|| Error::MalformedResponse("search response without artists.items".into()))?;

    Ok(items
        .iter()
        .filter_map(|item| {
            let artist = artist_from_value(item);
            if artist.is_none() {
                tracing::debug!("skipping search item without id");
            }
            artist
        })
        .collect())
}

/// Reads a single artist profile payload.
pub fn normalize_artist_profile(raw: &Value) -> Res<ArtistRecord> {
    if !raw.is_object() {
        return Err(Error::MalformedResponse(
            "artist profile is not an object".into(),
        ));
    }
    artist_from_value(raw)
        .ok_or_else(|| Error::MalformedResponse("artist profile without id".into()))
}

/// Reads `tracks` of a top-tracks response.
pub fn normalize_top_tracks(raw: &Value) -> Res<Vec<TrackRecord>> {
    let tracks = raw
        .get("tracks")
        .and_then(Value::as_array)
        .ok_or_else(|| Error::MalformedResponse("top-tracks response without tracks".into()))?;

    Ok(tracks.iter().map(track_from_value).collect())
}

/// Picks the search result for `query`.
///
/// An exact case-insensitive name match wins. Otherwise the most popular
/// artist is chosen, the earliest one on ties.
pub fn best_match<'a>(query: &str, artists: &'a [ArtistRecord]) -> Option<&'a ArtistRecord> {
    let wanted = utils::normalized_name(query);
    artists
        .iter()
        .find(|a| a.name.to_lowercase() == wanted)
        .or_else(|| {
            artists
                .iter()
                .reduce(|best, a| if a.popularity > best.popularity { a } else { best })
        })
}

/// Integer minutes, floored: `125_000` → `2`, `59_000` → `0`.
pub fn duration_minutes(duration_ms: u64) -> u64 {
    duration_ms / MS_PER_MINUTE
}

fn artist_from_value(value: &Value) -> Option<ArtistRecord> {
    let id = value
        .get("id")
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())?;

    Some(ArtistRecord {
        id: id.to_string(),
        name: str_field(value, &["name"]),
        followers: count_field(value, &["followers", "total"]),
        popularity: popularity(value),
        genres: value
            .get("genres")
            .and_then(Value::as_array)
            .map(|genres| {
                genres
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default(),
        url: str_field(value, &["external_urls", "spotify"]),
    })
}

fn track_from_value(value: &Value) -> TrackRecord {
    TrackRecord {
        title: str_field(value, &["name"]),
        album: str_field(value, &["album", "name"]),
        popularity: popularity(value),
        duration_minutes: duration_minutes(count_field(value, &["duration_ms"])),
    }
}

fn lookup<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(value, |v, key| v.get(key))
}

fn str_field(value: &Value, path: &[&str]) -> String {
    lookup(value, path)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn count_field(value: &Value, path: &[&str]) -> u64 {
    lookup(value, path).and_then(Value::as_u64).unwrap_or(0)
}

fn popularity(value: &Value) -> u8 {
    count_field(value, &["popularity"]).min(100) as u8
}
