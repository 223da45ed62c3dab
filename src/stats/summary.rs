//! Totals, streaks, and top labels for the `stats` command.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use super::aggregate::{author_counts, tag_counts, top_n};
use super::streak::Streaks;
use crate::output::svg::pluralize;
use crate::paper::Paper;

/// Number of tags and authors listed in the summary.
pub const SUMMARY_TOP_N: usize = 5;

/// Headline reading statistics as of a given date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadingSummary {
    pub total: usize,
    pub this_year: usize,
    pub streaks: Streaks,
    pub top_tags: Vec<(String, usize)>,
    pub top_authors: Vec<(String, usize)>,
}

impl ReadingSummary {
    #[must_use]
    pub fn compute(papers: &[Paper], as_of: NaiveDate) -> Self {
        let owned = |ranked: Vec<(&str, usize)>| {
            ranked
                .into_iter()
                .map(|(label, count)| (label.to_string(), count))
                .collect()
        };

        Self {
            total: papers.len(),
            this_year: papers
                .iter()
                .filter(|p| p.date_read.year() == as_of.year())
                .count(),
            streaks: Streaks::from_papers(papers, as_of),
            top_tags: owned(top_n(&tag_counts(papers), SUMMARY_TOP_N)),
            top_authors: owned(top_n(&author_counts(papers), SUMMARY_TOP_N)),
        }
    }

    /// Render the summary as plain text, one statistic per line.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut lines = vec![
            format!("Total papers: {}", self.total),
            format!("This year: {}", self.this_year),
            format!("Current streak: {}", pluralize(self.streaks.current, "day")),
            format!("Longest streak: {}", pluralize(self.streaks.longest, "day")),
        ];
        if !self.top_tags.is_empty() {
            lines.push(format!("Top tags: {}", join_ranked(&self.top_tags)));
        }
        if !self.top_authors.is_empty() {
            lines.push(format!("Top authors: {}", join_ranked(&self.top_authors)));
        }
        lines.join("\n")
    }
}

fn join_ranked(ranked: &[(String, usize)]) -> String {
    ranked
        .iter()
        .map(|(label, count)| format!("{label} ({count})"))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
