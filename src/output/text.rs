use std::fmt::Write;

use crate::error::Result;
use crate::paper::Paper;
use crate::stats::ReadingSummary;

use super::OutputFormatter;
use super::svg::pluralize;

/// Indent for the detail lines under each paper.
const DETAIL_INDENT: &str = "    ";

/// Human-readable listing, one block per paper.
pub struct TextFormatter;

impl TextFormatter {
    fn write_paper(output: &mut String, paper: &Paper) {
        let _ = writeln!(output, "{}  [{}]  {}", paper.date_read, paper.id, paper.title);
        if !paper.authors.is_empty() {
            let _ = writeln!(output, "{DETAIL_INDENT}Authors: {}", paper.authors.join(", "));
        }
        if !paper.tags.is_empty() {
            let _ = writeln!(output, "{DETAIL_INDENT}Tags: {}", paper.tags.join(", "));
        }
        if let Some(rating) = paper.rating {
            let _ = writeln!(output, "{DETAIL_INDENT}Rating: {rating}/5");
        }
        if let Some(url) = &paper.url {
            let _ = writeln!(output, "{DETAIL_INDENT}{url}");
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format_papers(&self, papers: &[&Paper]) -> Result<String> {
        if papers.is_empty() {
            return Ok("No papers found.\n".to_string());
        }

        let mut output = String::new();
        for paper in papers {
            Self::write_paper(&mut output, paper);
        }
        let _ = writeln!(output, "\n{}", pluralize(papers.len(), "paper"));
        Ok(output)
    }

    fn format_summary(&self, summary: &ReadingSummary) -> Result<String> {
        if summary.total == 0 {
            return Ok("No papers yet.\n".to_string());
        }
        Ok(format!("{}\n", summary.to_text()))
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
