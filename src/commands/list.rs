use std::cmp::Reverse;
use std::path::Path;

use chrono::Datelike;

use crate::cli::{Cli, ListArgs, SearchArgs};
use crate::output::ListFormat;
use crate::paper::Paper;
use crate::store::PaperStore;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::load_config;

/// Criteria for `list`. Every set field must match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilter {
    pub year: Option<i32>,
    /// Month 1-12, only meaningful together with `year`.
    pub month: Option<u32>,
    pub tag: Option<String>,
    pub rating_min: Option<u8>,
}

impl ListFilter {
    #[must_use]
    pub fn matches(&self, paper: &Paper) -> bool {
        if let Some(year) = self.year {
            if paper.date_read.year() != year {
                return false;
            }
            if let Some(month) = self.month
                && paper.date_read.month() != month
            {
                return false;
            }
        }
        if let Some(tag) = &self.tag
            && !paper.has_tag_ignore_case(tag)
        {
            return false;
        }
        if let Some(min) = self.rating_min
            && paper.rating.is_none_or(|r| r < min)
        {
            return false;
        }
        true
    }
}

impl From<&ListArgs> for ListFilter {
    fn from(args: &ListArgs) -> Self {
        Self {
            year: args.year,
            month: args.month,
            tag: args.tag.clone(),
            rating_min: args.rating_min,
        }
    }
}

/// Papers matching `filter`, newest first. Same-day papers keep log order.
#[must_use]
pub fn filter_papers<'a>(papers: &'a [Paper], filter: &ListFilter) -> Vec<&'a Paper> {
    newest_first(papers.iter().filter(|p| filter.matches(p)).collect())
}

fn newest_first(mut papers: Vec<&Paper>) -> Vec<&Paper> {
    papers.sort_by_key(|p| Reverse(p.date_read));
    papers
}

fn print_or_fail(result: Result<String>) -> i32 {
    match result {
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

#[must_use]
pub fn run_list(args: &ListArgs, cli: &Cli) -> i32 {
    print_or_fail(run_list_impl(args, cli.config.as_deref()))
}

/// Format the filtered listing.
///
/// # Errors
/// Returns an error if the config or the paper log cannot be read.
pub fn run_list_impl(args: &ListArgs, config_path: Option<&Path>) -> Result<String> {
    let papers = load_papers(config_path)?;
    let selected = filter_papers(&papers, &ListFilter::from(args));
    log::debug!("{} of {} papers match", selected.len(), papers.len());
    format_listing(&selected, args.format)
}

#[must_use]
pub fn run_search(args: &SearchArgs, cli: &Cli) -> i32 {
    print_or_fail(run_search_impl(args, cli.config.as_deref()))
}

/// Format papers whose title, authors, notes or tags contain the query.
///
/// # Errors
/// Returns an error if the config or the paper log cannot be read.
pub fn run_search_impl(args: &SearchArgs, config_path: Option<&Path>) -> Result<String> {
    let papers = load_papers(config_path)?;
    let hits = newest_first(
        papers
            .iter()
            .filter(|p| p.matches_query(&args.query))
            .collect(),
    );
    format_listing(&hits, args.format)
}

fn load_papers(config_path: Option<&Path>) -> Result<Vec<Paper>> {
    let config = load_config(config_path)?;
    PaperStore::new(config.papers_path()?).load()
}

fn format_listing(papers: &[&Paper], format: ListFormat) -> Result<String> {
    format.formatter().format_papers(papers)
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
