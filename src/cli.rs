use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::output::{ChartKind, ListFormat};
use crate::paper::parse_date;

fn date_arg(value: &str) -> Result<NaiveDate, String> {
    parse_date(value).map_err(|e| e.to_string())
}

#[derive(Parser, Debug)]
#[command(name = "papertrail")]
#[command(author, version, about = "Track the papers you read and chart them for your profile")]
#[command(long_about = "Keep a log of academic papers you have read and render it as SVG \
    charts (reading streak, calendar heatmap, tag cloud, monthly bars, cumulative \
    line, top authors) for a GitHub profile README.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    1 - Nothing matched (e.g. unknown paper ID)\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file (default: platform config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Point papertrail at a profile repository
    Init(InitArgs),

    /// Log a paper you have read
    Add(AddArgs),

    /// List logged papers, newest first
    List(ListArgs),

    /// Search titles, authors, notes and tags
    Search(SearchArgs),

    /// Print a reading summary
    Stats(StatsArgs),

    /// Delete a paper by ID
    Remove(RemoveArgs),

    /// Render the SVG charts
    Generate(GenerateArgs),
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Local checkout of the profile repository
    #[arg(long)]
    pub repo: PathBuf,

    /// GitHub username owning the repository
    #[arg(long)]
    pub username: Option<String>,

    /// Overwrite an existing configuration
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Paper title
    pub title: String,

    /// Authors (comma-separated)
    #[arg(long, short = 'a')]
    pub authors: Option<String>,

    /// Tags (comma-separated)
    #[arg(long, short = 't')]
    pub tags: Option<String>,

    /// Rating from 1 to 5
    #[arg(long, short = 'r', value_parser = clap::value_parser!(u8).range(1..=5))]
    pub rating: Option<u8>,

    /// Free-form notes
    #[arg(long, short = 'n')]
    pub notes: Option<String>,

    /// Link to the paper
    #[arg(long)]
    pub url: Option<String>,

    /// Date read, YYYY-MM-DD (default: today)
    #[arg(long, value_parser = date_arg)]
    pub date: Option<NaiveDate>,
}

#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Only papers read in this year
    #[arg(long)]
    pub year: Option<i32>,

    /// Only papers read in this month (requires --year)
    #[arg(long, requires = "year", value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: Option<u32>,

    /// Only papers carrying this tag (case-insensitive)
    #[arg(long)]
    pub tag: Option<String>,

    /// Only papers rated at least this
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub rating_min: Option<u8>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: ListFormat,
}

#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Case-insensitive substring to look for
    pub query: String,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: ListFormat,
}

#[derive(Parser, Debug)]
pub struct StatsArgs {
    /// Reference date for streaks, YYYY-MM-DD (default: today)
    #[arg(long, value_parser = date_arg)]
    pub as_of: Option<NaiveDate>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: ListFormat,
}

#[derive(Parser, Debug)]
pub struct RemoveArgs {
    /// ID of the paper to delete
    pub id: String,
}

#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Year for the heatmap and monthly chart (default: year of --as-of)
    #[arg(long)]
    pub year: Option<i32>,

    /// Reference date for streaks and the cumulative chart (default: today)
    #[arg(long, value_parser = date_arg)]
    pub as_of: Option<NaiveDate>,

    /// Directory receiving the SVG files (default: <repo>/images)
    #[arg(long, short = 'o')]
    pub out_dir: Option<PathBuf>,

    /// Paper log to read (default: <repo>/data/papers.json)
    #[arg(long, short = 'i')]
    pub input: Option<PathBuf>,

    /// Render only these charts (comma-separated, default: all)
    #[arg(long, value_delimiter = ',')]
    pub only: Vec<ChartKind>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
