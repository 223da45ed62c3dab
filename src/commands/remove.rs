use std::path::Path;

use crate::cli::{Cli, RemoveArgs};
use crate::paper::Paper;
use crate::store::PaperStore;
use crate::{EXIT_CONFIG_ERROR, EXIT_NOT_FOUND, EXIT_SUCCESS, PaperTrailError, Result};

use super::load_config;

#[must_use]
pub fn run_remove(args: &RemoveArgs, cli: &Cli) -> i32 {
    match run_remove_impl(args, cli.config.as_deref()) {
        Ok(paper) => {
            if !cli.quiet {
                println!("Removed paper {}: {}", paper.id, paper.title);
            }
            EXIT_SUCCESS
        }
        Err(e @ PaperTrailError::PaperNotFound(_)) => {
            eprintln!("Error: {e}");
            EXIT_NOT_FOUND
        }
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Delete the paper with the given ID and return it.
///
/// # Errors
/// Returns `PaperNotFound` for an unknown ID, or an error if the config or
/// the paper log cannot be read or written.
pub fn run_remove_impl(args: &RemoveArgs, config_path: Option<&Path>) -> Result<Paper> {
    let config = load_config(config_path)?;
    PaperStore::new(config.papers_path()?).remove(args.id.trim())
}

#[cfg(test)]
#[path = "remove_tests.rs"]
mod tests;
