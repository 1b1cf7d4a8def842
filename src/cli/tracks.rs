use tabled::Table;

use crate::{
    Res,
    config::SEARCH_LIMIT,
    report::{ExportOutcome, FormatSpec, RecordTable, SortOrder},
    spotify::{ApiClient, artists},
    types::{ArtistRecord, TrackTableRow},
    utils, warning,
};

use super::{ReportOptions, export_all, spinner};

/// Finds the best match for `query` and exports its top tracks.
pub fn top_tracks(
    client: &mut ApiClient,
    query: &str,
    opts: &ReportOptions,
) -> Res<Vec<ExportOutcome>> {
    let pb = spinner(format!("Searching for {}...", query.trim()));
    let artist = artists::find_best_artist(client, query, SEARCH_LIMIT);
    pb.finish_and_clear();

    match artist? {
        Some(artist) => top_tracks_report(client, &artist, opts),
        None => {
            warning!("No match found for '{}'.", query.trim());
            Ok(Vec::new())
        }
    }
}

/// Fetches, sorts, prints, and exports the top tracks of `artist` as
/// `top_tracks_<name>.<ext>`.
///
/// The sort field and order in `opts` are free text. Unknown fields sort by
/// popularity, and anything but `asc` sorts descending. An artist without top
/// tracks writes no file.
///
/// # Arguments
///
/// * `client` - Authenticated API client
/// * `artist` - A previously found artist; only its id and name are used
/// * `opts` - Sort field, order, output formats, directory and market
///
/// # Returns
///
/// One [`ExportOutcome`] per requested format, `NothingToExport` for an empty
/// track list.
///
/// # Example
///
/// ```
/// let opts = ReportOptions::new("US").with_sort("duration", "asc");
/// top_tracks_report(&mut client, &artist, &opts)?;
/// ```
pub fn top_tracks_report(
    client: &mut ApiClient,
    artist: &ArtistRecord,
    opts: &ReportOptions,
) -> Res<Vec<ExportOutcome>> {
    let pb = spinner(format!("Fetching top tracks for {}...", artist.name));
    let tracks = artists::get_top_tracks(client, &artist.id, &opts.market);
    pb.finish_and_clear();

    let table = RecordTable::new(tracks?).sort(&opts.sort, SortOrder::from_input(&opts.order));
    if !table.is_empty() {
        println!("{}", Table::new(table.records().iter().map(TrackTableRow::from)));
    }

    let stem = format!("top_tracks_{}", utils::safe_filename(&artist.name));
    export_all(&table, &stem, &FormatSpec::top_tracks(&artist.name), opts)
}
