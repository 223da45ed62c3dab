//! Cumulative papers-read line chart, sampled once per day.

use chrono::NaiveDate;

use super::builder::{SvgBuilder, render_placeholder};
use super::element::{Label, Line, SvgElement};
use super::style::{TextAnchor, palette};
use crate::paper::Paper;
use crate::stats::cumulative_series;

const WIDTH: f64 = 400.0;
const HEIGHT: f64 = 180.0;
const CHART_LEFT: f64 = 45.0;
const CHART_RIGHT: f64 = WIDTH - 15.0;
const CHART_TOP: f64 = 30.0;
const CHART_BOTTOM: f64 = HEIGHT - 30.0;

/// Running total from the first read date through the as-of date.
#[derive(Debug)]
pub struct CumulativeChart {
    series: Vec<(NaiveDate, usize)>,
}

impl CumulativeChart {
    #[must_use]
    pub fn from_papers(papers: &[Paper], as_of: NaiveDate) -> Self {
        Self {
            series: cumulative_series(papers, as_of),
        }
    }

    /// Chart coordinates for every day. The x span is at least one day and
    /// the y axis is normalized to the final total.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn points(&self) -> Vec<(f64, f64)> {
        let (Some((first, _)), Some((last, total))) = (self.series.first(), self.series.last())
        else {
            return Vec::new();
        };
        let span_days = (*last - *first).num_days().max(1) as f64;
        let total = (*total).max(1) as f64;
        let chart_width = CHART_RIGHT - CHART_LEFT;
        let chart_height = CHART_BOTTOM - CHART_TOP;

        self.series
            .iter()
            .map(|(day, running)| {
                let offset = (*day - *first).num_days() as f64;
                let x = (offset / span_days).mul_add(chart_width, CHART_LEFT);
                let y = (*running as f64 / total).mul_add(-chart_height, CHART_BOTTOM);
                (x, y)
            })
            .collect()
    }
}

impl SvgElement for CumulativeChart {
    fn render(&self) -> String {
        let (Some((first, _)), Some((last, total))) = (self.series.first(), self.series.last())
        else {
            return render_placeholder("No papers yet", WIDTH, HEIGHT);
        };

        let line = Line::new(self.points(), palette::ACCENT).with_fill(palette::BAR, CHART_BOTTOM);
        let axis_label = |x: f64, y: f64, text: String| Label::new(x, y, text, palette::DIM);

        SvgBuilder::new(WIDTH, HEIGHT)
            .with_title("Cumulative papers read")
            .push_element(
                &Label::new(CHART_LEFT, 18.0, "Cumulative papers read", palette::TEXT)
                    .with_font_size(13.0)
                    .with_weight(600),
            )
            .push_element(&line)
            .push_element(&axis_label(
                CHART_LEFT,
                CHART_BOTTOM + 18.0,
                first.format("%b %Y").to_string(),
            ))
            .push_element(
                &axis_label(CHART_RIGHT, CHART_BOTTOM + 18.0, last.format("%b %Y").to_string())
                    .with_anchor(TextAnchor::End),
            )
            .push_element(
                &axis_label(CHART_LEFT - 5.0, CHART_BOTTOM, "0".to_string())
                    .with_anchor(TextAnchor::End),
            )
            .push_element(
                &axis_label(CHART_LEFT - 5.0, CHART_TOP + 5.0, total.to_string())
                    .with_anchor(TextAnchor::End),
            )
            .build()
    }
}

/// Render the cumulative chart through `as_of`.
#[must_use]
pub fn render_cumulative(papers: &[Paper], as_of: NaiveDate) -> String {
    CumulativeChart::from_papers(papers, as_of).render()
}

#[cfg(test)]
#[path = "cumulative_tests.rs"]
mod tests;
