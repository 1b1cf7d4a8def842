use std::path::PathBuf;

use clap::{
    ArgAction, Args, CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};
use tracing::level_filters::LevelFilter;

use sportcli::{
    Res, cli, config, error,
    report::ExportFormat,
    spotify::ApiClient,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[clap(long, short, global = true)]
    verbose: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Verify the client credentials
    Auth,

    /// Search for an artist
    Search(SearchOptions),

    /// Export the top tracks of an artist
    TopTracks(TopTracksOptions),

    /// Export a comparison of several artists
    Compare(CompareOptions),

    /// Interactive session with saved searches
    Session(ExportArgs),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct SearchOptions {
    /// Artist name to search for
    pub query: String,

    /// Number of results to request
    #[clap(long, default_value_t = config::SEARCH_LIMIT)]
    pub limit: u32,
}

#[derive(Args, Debug, Clone)]
pub struct SortArgs {
    /// Field to sort by; unknown fields use the report's default
    #[clap(long)]
    pub sort: Option<String>,

    /// Sort order (asc/desc); anything else sorts descending
    #[clap(long)]
    pub order: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    /// Output format(s); can be repeated
    #[clap(
        long = "format",
        value_enum,
        default_value = "xlsx",
        action = ArgAction::Append,
        num_args = 1
    )]
    pub formats: Vec<ExportFormat>,

    /// Directory the reports are written to
    #[clap(long, default_value = ".")]
    pub out_dir: PathBuf,
}

#[derive(Parser, Debug, Clone)]
pub struct TopTracksOptions {
    /// Artist name to search for
    pub query: String,

    #[command(flatten)]
    pub sort: SortArgs,

    #[command(flatten)]
    pub export: ExportArgs,
}

#[derive(Parser, Debug, Clone)]
pub struct CompareOptions {
    /// Artist names to compare
    #[clap(required = true, num_args = 2..)]
    pub queries: Vec<String>,

    #[command(flatten)]
    pub sort: SortArgs,

    #[command(flatten)]
    pub export: ExportArgs,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

fn report_options(
    settings: &config::Settings,
    export: ExportArgs,
    sort: Option<SortArgs>,
) -> cli::ReportOptions {
    let mut opts = cli::ReportOptions::new(settings.market.clone());
    opts.formats = export.formats;
    opts.out_dir = export.out_dir;
    if let Some(sort) = sort {
        opts = opts.with_sort(
            sort.sort.unwrap_or_default(),
            sort.order.unwrap_or_default(),
        );
    }
    opts
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    let env_filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn run(command: Command, settings: config::Settings) -> Res<()> {
    let mut client = ApiClient::from_settings(&settings)?;

    match command {
        Command::Auth => cli::auth(&mut client),
        Command::Search(opt) => cli::search(&mut client, &opt.query, opt.limit).map(|_| ()),
        Command::TopTracks(opt) => {
            let opts = report_options(&settings, opt.export, Some(opt.sort));
            cli::top_tracks(&mut client, &opt.query, &opts).map(|_| ())
        }
        Command::Compare(opt) => {
            let opts = report_options(&settings, opt.export, Some(opt.sort));
            cli::compare(&mut client, &opt.queries, &opts).map(|_| ())
        }
        Command::Session(export) => {
            let opts = report_options(&settings, export, None);
            cli::session(&mut client, &opts);
            Ok(())
        }
        Command::Completions(_) => Ok(()),
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Command::Completions(opt) = &cli.command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    config::load_env();
    let settings = match config::Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => error!("Cannot load environment. Err: {}", e),
    };

    if let Err(e) = run(cli.command, settings) {
        error!("{}", e);
    }
}
