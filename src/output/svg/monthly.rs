//! Papers-per-month bar chart for one year.

use super::builder::SvgBuilder;
use super::data::{DataPoint, max_value};
use super::element::{Bar, Label, SvgElement};
use super::format::pluralize;
use super::style::{TextAnchor, palette};
use crate::paper::Paper;
use crate::stats::monthly_counts;

const MONTH_INITIALS: [&str; 12] = ["J", "F", "M", "A", "M", "J", "J", "A", "S", "O", "N", "D"];
const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const BAR_WIDTH: f64 = 28.0;
const BAR_GAP: f64 = 6.0;
const CHART_HEIGHT: f64 = 120.0;
const MARGIN_LEFT: f64 = 40.0;
const MARGIN_TOP: f64 = 30.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 40.0;

/// Twelve vertical bars, one per month, scaled to the busiest month.
#[derive(Debug)]
pub struct MonthlyChart {
    year: i32,
    data: Vec<DataPoint>,
}

impl MonthlyChart {
    #[must_use]
    pub fn from_papers(papers: &[Paper], year: i32) -> Self {
        let data = monthly_counts(papers, year)
            .into_iter()
            .zip(MONTH_NAMES)
            .map(|(count, name)| DataPoint::new(name, count))
            .collect();
        Self { year, data }
    }
}

impl SvgElement for MonthlyChart {
    #[allow(clippy::cast_precision_loss)]
    fn render(&self) -> String {
        // At least 1 so an empty year renders flat bars.
        let max = max_value(&self.data).max(1);
        let step = BAR_WIDTH + BAR_GAP;
        let width = (self.data.len() as f64).mul_add(step, MARGIN_LEFT + MARGIN_RIGHT);
        let height = MARGIN_TOP + CHART_HEIGHT + MARGIN_BOTTOM;
        let baseline = MARGIN_TOP + CHART_HEIGHT;
        let heading = format!("Papers per month ({})", self.year);

        let mut builder = SvgBuilder::new(width, height)
            .with_title(&heading)
            .push_element(
                &Label::new(MARGIN_LEFT, 18.0, &heading, palette::TEXT)
                    .with_font_size(13.0)
                    .with_weight(600),
            );

        for (i, (point, initial)) in self.data.iter().zip(MONTH_INITIALS).enumerate() {
            let x = (i as f64).mul_add(step, MARGIN_LEFT);
            let bar_height = (point.ratio_of(max) * CHART_HEIGHT).floor();
            let y = baseline - bar_height;
            let center = x + (BAR_WIDTH / 2.0).floor();

            let bar = Bar::new(x, y, BAR_WIDTH, bar_height, palette::BAR).with_tooltip(vec![
                format!("{}: {}", point.label, pluralize(point.value, "paper")),
            ]);
            builder = builder.push_element(&bar).push_element(
                &Label::new(center, baseline + 16.0, initial, palette::DIM)
                    .with_anchor(TextAnchor::Middle),
            );

            if point.value > 0 {
                builder = builder.push_element(
                    &Label::new(center, y - 4.0, point.value.to_string(), palette::DIM)
                        .with_anchor(TextAnchor::Middle),
                );
            }
        }

        builder.build()
    }
}

/// Render the monthly bar chart for `year`.
#[must_use]
pub fn render_monthly(papers: &[Paper], year: i32) -> String {
    MonthlyChart::from_papers(papers, year).render()
}

#[cfg(test)]
#[path = "monthly_tests.rs"]
mod tests;
