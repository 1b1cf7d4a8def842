//! Spotify Artist Report CLI Library
//!
//! This library provides functionality for looking up artists in the Spotify
//! catalog, fetching their top tracks, and exporting comparison and top-track
//! reports as spreadsheets or fixed-layout documents.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations and the interactive session
//! - `config` - Configuration management and environment variables
//! - `error` - Error taxonomy shared by every layer
//! - `management` - Token lifecycle and the session-scoped saved searches
//! - `report` - Record tables, sorting, and tabular exporters
//! - `spotify` - Spotify Web API client, endpoints, and response normalization
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use sportcli::{config, spotify};
//!
//! fn main() -> sportcli::Res<()> {
//!     config::load_env();
//!     let settings = config::Settings::from_env()?;
//!     let mut client = spotify::ApiClient::from_settings(&settings)?;
//!     let artists = spotify::artists::search_artists(&mut client, "four tet", 5)?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod report;
pub mod spotify;
pub mod types;
pub mod utils;

pub use error::{Error, Res};

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Searching for {}...", query);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Saved: {}", path.display());
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues or notices the user should see, e.g. an empty
/// search result or a report with nothing to export.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a failed action with a red cross without terminating.
///
/// The interactive session uses this to report an aborted search or report
/// while keeping the session alive.
#[macro_export]
macro_rules! failure {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "x".red().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only for fatal errors such as missing credentials or a failed one-shot
/// command. Code after this macro does not execute.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}
