use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the JSON fixtures
    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,

    /// Directory the dashboard report is written to
    #[arg(long, default_value = "output")]
    pub output_dir: PathBuf,

    /// JSON file overriding rate, share, split and benchmark tables
    #[arg(long)]
    pub tables_file: Option<PathBuf>,

    /// Songstats (RapidAPI) key for live artist stats
    #[clap(long, env = "SONGSTATS_API_KEY")]
    pub songstats_api_key: Option<String>,

    /// Spotify artist id used for live lookups
    #[clap(long, env = "SPOTIFY_ARTIST_ID")]
    pub spotify_artist_id: Option<String>,

    /// Never call live APIs, always read the static fixtures
    #[arg(long)]
    pub skip_live: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Build the full dashboard report (default)
    Report(ReportArgs),
    /// Estimate revenue for a cross-platform stream count
    Revenue {
        #[arg(long)]
        streams: u64,
    },
    /// Monthly streams per platform needed to reach an annual revenue goal
    Targets {
        #[arg(long)]
        annual: f64,
    },
    /// Look up the primary artist's ownership share of a song
    Split {
        #[arg(long)]
        title: String,
    },
    /// Compute the strategy score from the fixtures
    Score,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct ReportArgs {
    /// Spotify streams per month assumed for the projection
    #[arg(long, default_value_t = 50_000)]
    pub monthly_streams: u64,

    /// Number of months to project
    #[arg(long, default_value_t = 12)]
    pub months: u32,

    /// Annual revenue goal in USD
    #[arg(long, default_value_t = 120_000.0)]
    pub annual_target: f64,
}

impl Default for ReportArgs {
    fn default() -> Self {
        Self {
            monthly_streams: 50_000,
            months: 12,
            annual_target: 120_000.0,
        }
    }
}
