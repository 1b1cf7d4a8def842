use std::io::{self, BufRead, Write};

use crate::{
    Res, failure, info,
    management::SavedSearchSet,
    spotify::ApiClient,
    success, warning,
};

use super::{ReportOptions, artists, comparison_report, top_tracks_report};

/// Runs the interactive loop on stdin until `quit` or end of input.
pub fn session(client: &mut ApiClient, defaults: &ReportOptions) -> SavedSearchSet {
    let stdin = io::stdin();
    run_session(client, &mut stdin.lock(), defaults)
}

/// Interactive loop over any line source.
///
/// A failing search or report is printed and the loop continues. Returns the
/// saved artists at the end of the session.
pub fn run_session<R: BufRead>(
    client: &mut ApiClient,
    input: &mut R,
    defaults: &ReportOptions,
) -> SavedSearchSet {
    let mut saved = SavedSearchSet::new();

    loop {
        println!();
        let Some(choice) = prompt(input, "Choose an option: (search/report/saved/delete/quit) ")
        else {
            break;
        };

        match choice.to_lowercase().as_str() {
            "search" => {
                if let Err(e) = search_and_save(client, input, &mut saved) {
                    failure!("Search failed: {}", e);
                }
            }
            "report" => {
                if let Err(e) = report(client, input, &saved, defaults) {
                    failure!("Report failed: {}", e);
                }
            }
            "saved" => list_saved(&saved),
            "delete" => delete(input, &mut saved),
            "quit" => {
                info!("Goodbye!");
                break;
            }
            _ => warning!("Invalid response."),
        }
    }

    saved
}

fn prompt<R: BufRead>(input: &mut R, message: &str) -> Option<String> {
    print!("{message}");
    let _ = io::stdout().flush();

    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}

fn search_and_save<R: BufRead>(
    client: &mut ApiClient,
    input: &mut R,
    saved: &mut SavedSearchSet,
) -> Res<()> {
    let Some(query) = prompt(input, "Enter an artist name: ") else {
        return Ok(());
    };
    let Some(artist) = artists::search(client, &query, crate::config::SEARCH_LIMIT)? else {
        return Ok(());
    };

    let answer = prompt(input, "Add this artist to your saved searches? (y/n): ").unwrap_or_default();
    if answer.eq_ignore_ascii_case("y") {
        let name = artist.name.clone();
        if saved.add(artist) {
            success!("{} added to saved searches.", name);
        } else {
            warning!("{} is already in your saved searches.", name);
        }
    }
    Ok(())
}

fn report<R: BufRead>(
    client: &mut ApiClient,
    input: &mut R,
    saved: &SavedSearchSet,
    defaults: &ReportOptions,
) -> Res<()> {
    let choice = prompt(input, "Individual or comparison report? (1/2): ").unwrap_or_default();

    match choice.as_str() {
        "1" => {
            if saved.is_empty() {
                warning!("No artists saved yet.");
                return Ok(());
            }
            list_saved(saved);
            let name = prompt(input, "Enter the artist name: ").unwrap_or_default();
            let Some(artist) = saved.find_by_name(&name) else {
                warning!("Artist not in saved searches.");
                return Ok(());
            };

            let sort = prompt(input, "Sort top tracks by (track/album/popularity/duration)? [default: popularity] ")
                .unwrap_or_default();
            let order = prompt(input, "Order asc or desc? [default: desc] ").unwrap_or_default();
            top_tracks_report(client, artist, &defaults.clone().with_sort(sort, order))?;
        }
        "2" => {
            if saved.len() < 2 {
                warning!("You need at least two artists saved to generate a comparison report.");
                return Ok(());
            }
            let sort = prompt(input, "Sort by followers or popularity? [default: followers] ")
                .unwrap_or_default();
            let order = prompt(input, "Order asc or desc? [default: desc] ").unwrap_or_default();
            comparison_report(client, saved, &defaults.clone().with_sort(sort, order))?;
        }
        _ => warning!("Invalid response."),
    }
    Ok(())
}

fn list_saved(saved: &SavedSearchSet) {
    if saved.is_empty() {
        info!("No artists saved yet.");
        return;
    }
    info!("Saved artists:");
    for artist in saved.get_artists() {
        println!("  {}", artist.name);
    }
}

fn delete<R: BufRead>(input: &mut R, saved: &mut SavedSearchSet) {
    list_saved(saved);
    if saved.is_empty() {
        return;
    }
    let name = prompt(input, "Enter the artist to delete: ").unwrap_or_default();
    match saved.remove_by_name(&name) {
        Some(artist) => success!("{} has been deleted from your saved searches.", artist.name),
        None => warning!("Artist not in saved searches."),
    }
}
