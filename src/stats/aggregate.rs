//! Per-day, per-month, per-tag and per-author aggregation.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use indexmap::IndexMap;

use crate::paper::Paper;

/// Titles read on each day, in input order. Restricted to `year` when given.
#[must_use]
pub fn papers_by_day(papers: &[Paper], year: Option<i32>) -> BTreeMap<NaiveDate, Vec<&str>> {
    let mut days: BTreeMap<NaiveDate, Vec<&str>> = BTreeMap::new();
    for paper in papers {
        if year.is_some_and(|y| paper.date_read.year() != y) {
            continue;
        }
        days.entry(paper.date_read)
            .or_default()
            .push(paper.title.as_str());
    }
    days
}

/// Number of papers read on each day.
#[must_use]
pub fn day_counts(papers: &[Paper]) -> BTreeMap<NaiveDate, usize> {
    let mut counts = BTreeMap::new();
    for paper in papers {
        *counts.entry(paper.date_read).or_insert(0) += 1;
    }
    counts
}

/// Tag frequencies keyed in first-seen order. Case-sensitive.
#[must_use]
pub fn tag_counts(papers: &[Paper]) -> IndexMap<&str, usize> {
    count_labels(papers.iter().flat_map(|p| p.tags.iter()))
}

/// Author frequencies keyed in first-seen order.
#[must_use]
pub fn author_counts(papers: &[Paper]) -> IndexMap<&str, usize> {
    count_labels(papers.iter().flat_map(|p| p.authors.iter()))
}

fn count_labels<'a>(labels: impl Iterator<Item = &'a String>) -> IndexMap<&'a str, usize> {
    let mut counts = IndexMap::new();
    for label in labels {
        *counts.entry(label.as_str()).or_insert(0) += 1;
    }
    counts
}

/// The `n` most frequent labels, descending by count.
///
/// Ties keep first-seen order (the sort is stable over the insertion-ordered map).
#[must_use]
pub fn top_n<'a>(counts: &IndexMap<&'a str, usize>, n: usize) -> Vec<(&'a str, usize)> {
    let mut ranked: Vec<(&str, usize)> = counts.iter().map(|(k, v)| (*k, *v)).collect();
    ranked.sort_by_key(|&(_, count)| Reverse(count));
    ranked.truncate(n);
    ranked
}

/// Papers per month (index 0 = January) for `year`.
#[must_use]
pub fn monthly_counts(papers: &[Paper], year: i32) -> [usize; 12] {
    let mut months = [0usize; 12];
    for paper in papers.iter().filter(|p| p.date_read.year() == year) {
        months[paper.date_read.month0() as usize] += 1;
    }
    months
}

/// Running total of papers for every day from the first read date through `as_of`.
///
/// The range is extended to the latest read date when papers are dated after
/// `as_of`, so the final entry always equals the total paper count.
/// Returns an empty series for an empty log.
#[must_use]
pub fn cumulative_series(papers: &[Paper], as_of: NaiveDate) -> Vec<(NaiveDate, usize)> {
    let counts = day_counts(papers);
    let (Some((&first, _)), Some((&last_read, _))) =
        (counts.first_key_value(), counts.last_key_value())
    else {
        return Vec::new();
    };
    let last = as_of.max(last_read);

    let mut running = 0;
    first
        .iter_days()
        .take_while(|day| *day <= last)
        .map(|day| {
            running += counts.get(&day).copied().unwrap_or(0);
            (day, running)
        })
        .collect()
}

#[cfg(test)]
#[path = "aggregate_tests.rs"]
mod tests;
