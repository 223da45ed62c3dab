use std::path::Path;

use crate::cli::{AddArgs, Cli};
use crate::paper::{Paper, split_list};
use crate::store::PaperStore;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::{load_config, today};

/// `source` recorded for papers logged by hand.
pub const MANUAL_SOURCE: &str = "manual";

#[must_use]
pub fn run_add(args: &AddArgs, cli: &Cli) -> i32 {
    match run_add_impl(args, cli.config.as_deref()) {
        Ok(paper) => {
            if !cli.quiet {
                println!("Added paper {}: {}", paper.id, paper.title);
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Append a manually entered paper to the log.
///
/// # Errors
/// Returns an error if the config or the paper log cannot be read or written.
pub fn run_add_impl(args: &AddArgs, config_path: Option<&Path>) -> Result<Paper> {
    let config = load_config(config_path)?;
    let store = PaperStore::new(config.papers_path()?);

    let paper = build_paper(args);
    store.add(paper.clone())?;
    Ok(paper)
}

fn build_paper(args: &AddArgs) -> Paper {
    let mut paper = Paper::new(args.title.trim(), args.date.unwrap_or_else(today))
        .with_authors(args.authors.as_deref().map(split_list).unwrap_or_default())
        .with_tags(args.tags.as_deref().map(split_list).unwrap_or_default())
        .with_source(MANUAL_SOURCE);
    if let Some(rating) = args.rating {
        paper = paper.with_rating(rating);
    }
    if let Some(notes) = &args.notes {
        paper = paper.with_notes(notes);
    }
    if let Some(url) = &args.url {
        paper = paper.with_url(url);
    }
    paper
}

#[cfg(test)]
#[path = "add_tests.rs"]
mod tests;
