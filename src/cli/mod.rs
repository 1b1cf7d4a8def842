//! # CLI Module
//!
//! User-facing commands of the report tool. Each command coordinates the
//! Spotify integration layer, the record tables, and the exporters, and
//! presents progress and results on the console.
//!
//! ## Commands
//!
//! - [`auth`] - Verifies the client credentials with one token exchange
//! - [`search`] - Lists search results and the best match for a query
//! - [`top_tracks`] / [`top_tracks_report`] - Exports an artist's top tracks
//! - [`compare`] / [`comparison_report`] - Exports a comparison of saved artists
//! - [`session`] - Interactive loop with session-scoped saved searches
//!
//! ## Error Handling
//!
//! Commands return [`Res`](crate::Res) so that the caller decides how fatal a
//! failure is: one-shot invocations exit, the interactive session reports the
//! failure and keeps running.
//!
//! ## Usage Patterns
//!
//! ```bash
//! sportcli search "four tet"
//! sportcli top-tracks "four tet" --sort duration --order asc --format pdf
//! sportcli compare "four tet" burial --sort popularity --format xlsx --format pdf
//! sportcli session
//! ```

mod artists;
mod auth;
mod compare;
mod session;
mod tracks;

use std::{path::PathBuf, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    Res,
    report::{self, ExportFormat, ExportOutcome, FormatSpec, Record, RecordTable},
    success, warning,
};

pub use artists::search;
pub use auth::auth;
pub use compare::{compare, comparison_report};
pub use session::{run_session, session};
pub use tracks::{top_tracks, top_tracks_report};

/// Report settings shared by the one-shot commands and the session.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Free-text sort field; unknown values fall back to the table default.
    pub sort: String,
    /// Free-text order; anything but `asc` sorts descending.
    pub order: String,
    pub formats: Vec<ExportFormat>,
    pub out_dir: PathBuf,
    pub market: String,
}

impl ReportOptions {
    pub fn new(market: impl Into<String>) -> Self {
        Self {
            sort: String::new(),
            order: String::new(),
            formats: vec![ExportFormat::Xlsx],
            out_dir: PathBuf::from("."),
            market: market.into(),
        }
    }

    pub fn with_sort(mut self, sort: impl Into<String>, order: impl Into<String>) -> Self {
        self.sort = sort.into();
        self.order = order.into();
        self
    }
}

fn spinner(message: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}

/// Writes `table` once per requested format as `{out_dir}/{stem}.{ext}`.
fn export_all<R: Record>(
    table: &RecordTable<R>,
    stem: &str,
    spec: &FormatSpec,
    opts: &ReportOptions,
) -> Res<Vec<ExportOutcome>> {
    let mut outcomes = Vec::with_capacity(opts.formats.len());

    for format in &opts.formats {
        let writer = format.writer();
        let path = opts.out_dir.join(format!("{stem}.{}", writer.extension()));
        let outcome = report::export(table, &path, spec, writer.as_ref())?;
        match &outcome {
            ExportOutcome::Written(path) => success!("Saved: {}", path.display()),
            ExportOutcome::NothingToExport => warning!("Nothing to export."),
        }
        outcomes.push(outcome);
    }

    Ok(outcomes)
}
