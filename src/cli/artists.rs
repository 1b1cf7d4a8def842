use tabled::Table;

use crate::{
    Res, info,
    spotify::{ApiClient, artists, normalize},
    types::{ArtistRecord, ArtistTableRow},
    utils, warning,
};

/// Searches for `query`, prints every result as a table and details of the
/// best match.
///
/// # Returns
///
/// - `Ok(Some(artist))` - The best match, for the session to save
/// - `Ok(None)` - No results; a warning was printed
/// - `Err(_)` - Validation or API errors from the search
pub fn search(client: &mut ApiClient, query: &str, limit: u32) -> Res<Option<ArtistRecord>> {
    let pb = super::spinner(format!("Searching for {}...", query.trim()));
    let results = artists::search_artists(client, query, limit);
    pb.finish_and_clear();
    let results = results?;

    let Some(best) = normalize::best_match(query, &results).cloned() else {
        warning!("No match found, try again.");
        return Ok(None);
    };

    let table_rows: Vec<ArtistTableRow> = results.iter().map(ArtistTableRow::from).collect();
    println!("{}", Table::new(table_rows));

    print_artist(&best);
    Ok(Some(best))
}

pub(super) fn print_artist(artist: &ArtistRecord) {
    println!();
    info!("Artist: {}", artist.name);
    info!("Followers: {}", utils::format_thousands(artist.followers));
    info!("Popularity: {}", artist.popularity);
    info!("Genres: {}", artist.genre_list());
    if !artist.url.is_empty() {
        info!("URL: {}", artist.url);
    }
    println!();
}
