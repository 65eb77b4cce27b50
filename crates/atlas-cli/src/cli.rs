//! CLI argument definitions for the atlas country browser.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use atlas_model::{SortKey, TopN};

#[derive(Parser)]
#[command(
    name = "atlas",
    version,
    about = "Atlas - Browse, filter, and sort the countries of the world",
    long_about = "Browse the countries of the world from your terminal.\n\n\
                  Fetches the REST Countries dataset once, keeps a local\n\
                  snapshot, and filters/sorts/truncates it for display."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Download the country dataset and write the local snapshot.
    Fetch(FetchArgs),

    /// Render the country list for a one-shot selection.
    List(ListArgs),

    /// Show the continents and sub-regions present in the dataset.
    Facets(DatasetArgs),

    /// Browse interactively: filter, sort, and truncate from a prompt.
    Browse(DatasetArgs),
}

/// Where the dataset comes from, shared by every command.
#[derive(Args)]
pub struct DatasetArgs {
    /// Path of the local dataset snapshot.
    #[arg(long = "snapshot", value_name = "PATH", default_value = "countries.json")]
    pub snapshot: PathBuf,

    /// Base URL of the REST Countries API.
    #[arg(long = "base-url", value_name = "URL", default_value = atlas_ingest::DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Refetch even if a snapshot exists.
    #[arg(long = "refresh")]
    pub refresh: bool,
}

#[derive(Args)]
pub struct FetchArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,
}

#[derive(Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Keep only countries in this continent (exact match).
    #[arg(long = "continent", value_name = "NAME", conflicts_with = "subregion")]
    pub continent: Option<String>,

    /// Keep only countries in this sub-region (exact match).
    #[arg(long = "subregion", value_name = "NAME")]
    pub subregion: Option<String>,

    /// Sort order for the list.
    #[arg(long = "sort", value_enum, default_value = "name")]
    pub sort: SortArg,

    /// Keep only the first 10 rows of the sorted list, by metric.
    #[arg(long = "top10", value_enum, value_name = "METRIC")]
    pub top10: Option<TopNArg>,

    /// Output format.
    #[arg(long = "output", value_enum, default_value = "table")]
    pub output: OutputArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SortArg {
    Name,
    Population,
    Area,
}

impl From<SortArg> for SortKey {
    fn from(value: SortArg) -> Self {
        match value {
            SortArg::Name => SortKey::Name,
            SortArg::Population => SortKey::Population,
            SortArg::Area => SortKey::Area,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum TopNArg {
    Population,
    Area,
}

impl From<TopNArg> for TopN {
    fn from(value: TopNArg) -> Self {
        match value {
            TopNArg::Population => TopN::Population,
            TopNArg::Area => TopN::Area,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
