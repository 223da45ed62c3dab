use std::path::Path;

use crate::cli::{Cli, StatsArgs};
use crate::stats::ReadingSummary;
use crate::store::PaperStore;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::{load_config, today};

#[must_use]
pub fn run_stats(args: &StatsArgs, cli: &Cli) -> i32 {
    match run_stats_impl(args, cli.config.as_deref()) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Format the reading summary as of `--as-of` (default: today).
///
/// # Errors
/// Returns an error if the config or the paper log cannot be read.
pub fn run_stats_impl(args: &StatsArgs, config_path: Option<&Path>) -> Result<String> {
    let config = load_config(config_path)?;
    let papers = PaperStore::new(config.papers_path()?).load()?;
    let summary = ReadingSummary::compute(&papers, args.as_of.unwrap_or_else(today));
    args.format.formatter().format_summary(&summary)
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
