mod charts;
mod json;
pub mod svg;
mod text;

pub use charts::{ChartKind, RenderOptions, render_charts};
pub use json::JsonFormatter;
pub use text::TextFormatter;

use crate::error::Result;
use crate::paper::Paper;
use crate::stats::ReadingSummary;

/// Trait for formatting paper listings and summaries for the terminal.
pub trait OutputFormatter {
    /// Format a list of papers in the given order.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format_papers(&self, papers: &[&Paper]) -> Result<String>;

    /// Format a reading summary.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format_summary(&self, summary: &ReadingSummary) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListFormat {
    #[default]
    Text,
    Json,
}

impl ListFormat {
    #[must_use]
    pub fn formatter(self) -> &'static dyn OutputFormatter {
        match self {
            Self::Text => &TextFormatter,
            Self::Json => &JsonFormatter,
        }
    }
}

impl std::str::FromStr for ListFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
