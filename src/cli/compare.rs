use tabled::Table;

use crate::{
    Error, Res,
    config::SEARCH_LIMIT,
    management::SavedSearchSet,
    report::{ExportOutcome, FormatSpec, RecordTable, SortOrder},
    spotify::{ApiClient, artists},
    types::{ArtistRecord, ArtistTableRow},
    warning,
};

use super::{ReportOptions, export_all, spinner};

/// Best-matches every query, then exports a comparison of the distinct artists.
///
/// Queries that resolve to an artist already in the comparison are reported
/// and skipped, and queries without a match only produce a warning. The
/// collected artists go to [`comparison_report`].
///
/// # Arguments
///
/// * `client` - Authenticated API client
/// * `queries` - Free-text artist names, at least two
/// * `opts` - Sort field, order, output formats and directory
///
/// # Returns
///
/// One [`ExportOutcome`] per requested format.
///
/// # Errors
///
/// - [`Error::Validation`] if fewer than two distinct artists were found
/// - Any API or export error
///
/// # Example
///
/// ```
/// let opts = ReportOptions::new("US").with_sort("popularity", "desc");
/// compare(&mut client, &["four tet".into(), "burial".into()], &opts)?;
/// ```
pub fn compare(
    client: &mut ApiClient,
    queries: &[String],
    opts: &ReportOptions,
) -> Res<Vec<ExportOutcome>> {
    let mut saved = SavedSearchSet::new();

    for query in queries {
        let pb = spinner(format!("Searching for {}...", query.trim()));
        let artist = artists::find_best_artist(client, query, SEARCH_LIMIT);
        pb.finish_and_clear();

        match artist? {
            Some(artist) => {
                let name = artist.name.clone();
                if !saved.add(artist) {
                    warning!("{} is already part of the comparison.", name);
                }
            }
            None => warning!("No match found for '{}'.", query.trim()),
        }
    }

    comparison_report(client, &saved, opts)
}

/// Re-fetches each saved artist's profile and exports `artist_comparison.<ext>`.
///
/// # Errors
///
/// [`Error::Validation`] with fewer than two saved artists.
pub fn comparison_report(
    client: &mut ApiClient,
    saved: &SavedSearchSet,
    opts: &ReportOptions,
) -> Res<Vec<ExportOutcome>> {
    if saved.len() < 2 {
        return Err(Error::Validation(
            "at least two artists are needed for a comparison report".into(),
        ));
    }

    let pb = spinner(format!("Fetching {} artist profiles...", saved.len()));
    let profiles: Res<Vec<ArtistRecord>> = saved
        .get_artists()
        .iter()
        .map(|a| artists::get_artist(client, &a.id))
        .collect();
    pb.finish_and_clear();

    let sort_field = RecordTable::<ArtistRecord>::resolve_sort_field(&opts.sort);
    let table = RecordTable::new(profiles?).sort(sort_field, SortOrder::from_input(&opts.order));
    println!("{}", Table::new(table.records().iter().map(ArtistTableRow::from)));

    export_all(
        &table,
        "artist_comparison",
        &FormatSpec::comparison(sort_field),
        opts,
    )
}
