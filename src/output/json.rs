use crate::error::Result;
use crate::paper::Paper;
use crate::stats::ReadingSummary;

use super::OutputFormatter;

/// Pretty-printed JSON, in the same shape as `papers.json`.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_papers(&self, papers: &[&Paper]) -> Result<String> {
        let json = serde_json::to_string_pretty(papers)?;
        Ok(format!("{json}\n"))
    }

    fn format_summary(&self, summary: &ReadingSummary) -> Result<String> {
        let json = serde_json::to_string_pretty(summary)?;
        Ok(format!("{json}\n"))
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
