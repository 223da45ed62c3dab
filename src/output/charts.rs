//! The fixed set of profile charts and batch rendering.

use chrono::{Datelike, NaiveDate};
use rayon::prelude::*;

use super::svg::{
    DEFAULT_TOP_AUTHORS, DEFAULT_TOP_TAGS, render_authors, render_cumulative, render_heatmap,
    render_monthly, render_streak, render_tags,
};
use crate::paper::Paper;

/// Inputs shared by all renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Year for the heatmap and monthly chart.
    pub year: i32,
    /// "Today" for streaks and the cumulative chart.
    pub as_of: NaiveDate,
    pub tag_limit: usize,
    pub author_limit: usize,
}

impl RenderOptions {
    /// Defaults relative to `as_of`: its year, 12 tags, 8 authors.
    #[must_use]
    pub fn new(as_of: NaiveDate) -> Self {
        Self {
            year: as_of.year(),
            as_of,
            tag_limit: DEFAULT_TOP_TAGS,
            author_limit: DEFAULT_TOP_AUTHORS,
        }
    }

    #[must_use]
    pub const fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    #[must_use]
    pub const fn with_limits(mut self, tag_limit: usize, author_limit: usize) -> Self {
        self.tag_limit = tag_limit;
        self.author_limit = author_limit;
        self
    }
}

/// One generated image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    Heatmap,
    Streak,
    Tags,
    Monthly,
    Cumulative,
    Authors,
}

impl ChartKind {
    pub const ALL: [Self; 6] = [
        Self::Heatmap,
        Self::Streak,
        Self::Tags,
        Self::Monthly,
        Self::Cumulative,
        Self::Authors,
    ];

    /// Artifact name, used as the output file stem.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Heatmap => "heatmap",
            Self::Streak => "streak",
            Self::Tags => "tags",
            Self::Monthly => "monthly",
            Self::Cumulative => "cumulative",
            Self::Authors => "authors",
        }
    }

    #[must_use]
    pub fn file_name(self) -> String {
        format!("{}.svg", self.name())
    }

    #[must_use]
    pub fn render(self, papers: &[Paper], options: &RenderOptions) -> String {
        match self {
            Self::Heatmap => render_heatmap(papers, options.year),
            Self::Streak => render_streak(papers, options.as_of),
            Self::Tags => render_tags(papers, options.tag_limit),
            Self::Monthly => render_monthly(papers, options.year),
            Self::Cumulative => render_cumulative(papers, options.as_of),
            Self::Authors => render_authors(papers, options.author_limit),
        }
    }
}

impl std::str::FromStr for ChartKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown chart: {s}"))
    }
}

/// Render `kinds` in parallel. Renderers share no state, so no locking is needed.
#[must_use]
pub fn render_charts(
    kinds: &[ChartKind],
    papers: &[Paper],
    options: &RenderOptions,
) -> Vec<(ChartKind, String)> {
    kinds
        .par_iter()
        .map(|&kind| (kind, kind.render(papers, options)))
        .collect()
}

#[cfg(test)]
#[path = "charts_tests.rs"]
mod tests;
