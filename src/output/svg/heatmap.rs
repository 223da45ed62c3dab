//! Calendar heatmap of papers read per day, one column per week.
//!
//! The grid starts at the Monday on or before January 1 and runs Monday-first
//! down each column. Cells outside the target year are drawn with the empty
//! color so every column stays seven cells tall, but they never carry counts
//! or month labels.

use std::collections::BTreeMap;

use chrono::{Datelike, Days, NaiveDate};

use super::builder::SvgBuilder;
use super::element::{Bar, Label, SvgElement};
use super::format::pluralize;
use super::style::{ChartColor, TextAnchor, palette};
use crate::paper::Paper;
use crate::stats::papers_by_day;

const CELL_SIZE: f64 = 13.0;
const CELL_STEP: f64 = 16.0;
const CELL_RADIUS: f64 = 2.0;
const MARGIN_LEFT: f64 = 40.0;
const MARGIN_TOP: f64 = 30.0;
const MARGIN_END: f64 = 10.0;

/// Columns drawn for a regular year.
pub const MIN_WEEKS: u64 = 53;
const DAYS_PER_WEEK: u64 = 7;

/// Titles listed in a cell tooltip.
const TOOLTIP_TITLES: usize = 5;

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const DAY_LABELS: [&str; 7] = ["Mon", "", "Wed", "", "Fri", "", "Sun"];

/// Color step for a day's count relative to the year's busiest day.
///
/// Any nonzero count gets at least step 1; only counts near the maximum reach
/// the top step. Integer division gives the exact floor of
/// `count / max_count * (steps - 1)`.
#[must_use]
pub const fn color_bucket(count: usize, max_count: usize, steps: usize) -> usize {
    if count == 0 || max_count == 0 || steps < 2 {
        return 0;
    }
    let scaled = count * (steps - 1) / max_count + 1;
    if scaled < steps - 1 { scaled } else { steps - 1 }
}

/// A GitHub-style contribution calendar for one year.
#[derive(Debug)]
pub struct CalendarHeatmap<'a> {
    year: i32,
    days: BTreeMap<NaiveDate, Vec<&'a str>>,
    scale: &'static [ChartColor],
}

impl<'a> CalendarHeatmap<'a> {
    #[must_use]
    pub fn from_papers(papers: &'a [Paper], year: i32) -> Self {
        Self {
            year,
            days: papers_by_day(papers, Some(year)),
            scale: &palette::HEATMAP_SCALE,
        }
    }

    /// Papers read in the target year.
    #[must_use]
    pub fn total(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    fn max_count(&self) -> usize {
        self.days.values().map(Vec::len).max().unwrap_or(0)
    }

    /// Monday on or before January 1 of the target year.
    fn grid_origin(&self) -> NaiveDate {
        let jan1 = NaiveDate::from_ymd_opt(self.year, 1, 1).unwrap_or_default();
        let lead = u64::from(jan1.weekday().num_days_from_monday());
        jan1.checked_sub_days(Days::new(lead)).unwrap_or(jan1)
    }

    /// Number of week columns: 53, or 54 when a leap year starts on a Sunday.
    fn week_count(&self, origin: NaiveDate) -> u64 {
        let dec31 = NaiveDate::from_ymd_opt(self.year, 12, 31).unwrap_or(origin);
        let span = u64::try_from((dec31 - origin).num_days()).unwrap_or(0) + 1;
        span.div_ceil(DAYS_PER_WEEK).max(MIN_WEEKS)
    }

    fn tooltip(&self, day: NaiveDate) -> Vec<String> {
        let mut lines = vec![day.to_string()];
        if let Some(titles) = self.days.get(&day) {
            lines.push(pluralize(titles.len(), "paper"));
            lines.extend(
                titles
                    .iter()
                    .take(TOOLTIP_TITLES)
                    .map(|title| format!("\u{2022} {title}")),
            );
        }
        lines
    }

    fn cell(&self, day: NaiveDate, x: f64, y: f64, max_count: usize) -> Bar {
        let count = if day.year() == self.year {
            self.days.get(&day).map_or(0, Vec::len)
        } else {
            0
        };
        let color = self.scale[color_bucket(count, max_count, self.scale.len())];
        Bar::new(x, y, CELL_SIZE, CELL_SIZE, color)
            .with_radius(CELL_RADIUS)
            .with_tooltip(self.tooltip(day))
    }
}

impl SvgElement for CalendarHeatmap<'_> {
    #[allow(clippy::cast_precision_loss)]
    fn render(&self) -> String {
        let origin = self.grid_origin();
        let weeks = self.week_count(origin);
        let max_count = self.max_count();

        let mut cells = Vec::with_capacity(usize::try_from(weeks * DAYS_PER_WEEK).unwrap_or(0));
        let mut month_x: BTreeMap<u32, f64> = BTreeMap::new();

        for week in 0..weeks {
            let x = (week as f64).mul_add(CELL_STEP, MARGIN_LEFT);
            for dow in 0..DAYS_PER_WEEK {
                let Some(day) = origin.checked_add_days(Days::new(week * DAYS_PER_WEEK + dow))
                else {
                    continue;
                };
                let y = (dow as f64).mul_add(CELL_STEP, MARGIN_TOP);
                cells.push(self.cell(day, x, y, max_count));

                if day.year() == self.year && day.day() <= 7 {
                    month_x.entry(day.month()).or_insert(x);
                }
            }
        }

        let width = (weeks as f64).mul_add(CELL_STEP, MARGIN_LEFT + MARGIN_END);
        let height = (DAYS_PER_WEEK as f64).mul_add(CELL_STEP, MARGIN_TOP + MARGIN_END);
        let heading = format!("{} read in {}", pluralize(self.total(), "paper"), self.year);

        let mut builder = SvgBuilder::new(width, height)
            .with_title(&heading)
            .push_element(
                &Label::new(MARGIN_LEFT, 18.0, &heading, palette::TEXT)
                    .with_font_size(14.0)
                    .with_weight(600),
            );

        for (month, x) in month_x {
            let name = MONTH_NAMES[(month - 1) as usize];
            builder = builder.push_element(
                &Label::new(x, MARGIN_TOP - 8.0, name, palette::DIM).with_font_size(11.0),
            );
        }

        for (row, name) in DAY_LABELS.iter().enumerate() {
            if name.is_empty() {
                continue;
            }
            let y = (row as f64).mul_add(CELL_STEP, MARGIN_TOP + CELL_SIZE - 2.0);
            builder = builder.push_element(
                &Label::new(MARGIN_LEFT - 8.0, y, *name, palette::DIM).with_anchor(TextAnchor::End),
            );
        }

        for cell in &cells {
            builder = builder.push_element(cell);
        }

        builder.build()
    }
}

/// Render the calendar heatmap for `year`.
#[must_use]
pub fn render_heatmap(papers: &[Paper], year: i32) -> String {
    CalendarHeatmap::from_papers(papers, year).render()
}

#[cfg(test)]
#[path = "heatmap_tests.rs"]
mod tests;
