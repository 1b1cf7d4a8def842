use crate::{
    Error, Res,
    spotify::{ApiClient, normalize},
    types::{ArtistRecord, TrackRecord},
};

/// Searches the catalog for artists matching `query`.
///
/// Calls `GET /search?q={query}&type=artist&limit={limit}` and normalizes the
/// `artists.items` of the response. A search without hits yields an empty list.
///
/// # Errors
///
/// - [`Error::Validation`] for a blank query, before any request is sent
/// - [`Error::Authentication`] / [`Error::ApiRequest`] from the client
/// - [`Error::MalformedResponse`] if `artists.items` is absent
///
/// # Example
///
/// ```
/// let artists = search_artists(&mut client, "four tet", 5)?;
/// ```
pub fn search_artists(client: &mut ApiClient, query: &str, limit: u32) -> Res<Vec<ArtistRecord>> {
    let query = query.trim();
    if query.is_empty() {
        return Err(Error::Validation("search query is empty".into()));
    }

    let raw = client.get(
        "/search",
        &[
            ("q", query.to_string()),
            ("type", "artist".to_string()),
            ("limit", limit.to_string()),
        ],
    )?;
    normalize::normalize_artist_search(&raw)
}

/// Searches for `query` and returns the best match.
///
/// An artist whose name equals the query (ignoring case and surrounding
/// whitespace) wins. Otherwise the most popular result is chosen, and the
/// earlier result wins a tie. See [`normalize::best_match`].
///
/// # Arguments
///
/// * `client` - Authenticated API client
/// * `query` - Free-text artist name
/// * `limit` - Number of search results to consider
///
/// # Returns
///
/// - `Ok(Some(artist))` - The best match
/// - `Ok(None)` - The search had no results
/// - `Err(_)` - Any error of [`search_artists`]
///
/// # Example
///
/// ```
/// if let Some(artist) = find_best_artist(&mut client, "burial", 5)? {
///     println!("{} ({} followers)", artist.name, artist.followers);
/// }
/// ```
pub fn find_best_artist(
    client: &mut ApiClient,
    query: &str,
    limit: u32,
) -> Res<Option<ArtistRecord>> {
    let artists = search_artists(client, query, limit)?;
    Ok(normalize::best_match(query, &artists).cloned())
}

/// Fetches the current profile of one artist via `GET /artists/{id}`.
///
/// Comparison reports call this for every saved artist so that follower and
/// popularity figures are current rather than taken from the earlier search.
///
/// # Arguments
///
/// * `client` - Authenticated API client
/// * `artist_id` - Catalog id; must be non-empty and ASCII alphanumeric
///
/// # Errors
///
/// - [`Error::Validation`] for an empty or malformed id, before any request
/// - [`Error::ApiRequest`] for an unknown id (404) or any other failed status
/// - [`Error::MalformedResponse`] if the body is not an artist object
///
/// # Example
///
/// ```
/// let artist = get_artist(&mut client, "7Eu1txygG6nJttLHbZdQOh")?;
/// ```
pub fn get_artist(client: &mut ApiClient, artist_id: &str) -> Res<ArtistRecord> {
    let artist_id = validate_id(artist_id)?;
    let raw = client.get(&format!("/artists/{artist_id}"), &[])?;
    normalize::normalize_artist_profile(&raw)
}

/// Fetches an artist's top tracks via `GET /artists/{id}/top-tracks?market={market}`.
///
/// Durations are floored to whole minutes, so a track shorter than one minute
/// reports `0`.
///
/// # Arguments
///
/// * `client` - Authenticated API client
/// * `artist_id` - Catalog id; must be non-empty and ASCII alphanumeric
/// * `market` - ISO 3166-1 alpha-2 country code, e.g. `US`
///
/// # Returns
///
/// - `Ok(tracks)` - Tracks in the order of the response, possibly empty
/// - `Err(Error::Validation)` - The id is malformed
/// - `Err(Error::MalformedResponse)` - The response has no `tracks` array
///
/// # Example
///
/// ```
/// let tracks = get_top_tracks(&mut client, &artist.id, "US")?;
/// ```
pub fn get_top_tracks(
    client: &mut ApiClient,
    artist_id: &str,
    market: &str,
) -> Res<Vec<TrackRecord>> {
    let artist_id = validate_id(artist_id)?;
    let raw = client.get(
        &format!("/artists/{artist_id}/top-tracks"),
        &[("market", market.to_string())],
    )?;
    normalize::normalize_top_tracks(&raw)
}

fn validate_id(artist_id: &str) -> Res<&str> {
    let artist_id = artist_id.trim();
    if artist_id.is_empty() {
        return Err(Error::Validation("artist id is empty".into()));
    }
    if !artist_id.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(Error::Validation(format!(
            "artist id '{artist_id}' is not a catalog id"
        )));
    }
    Ok(artist_id)
}
