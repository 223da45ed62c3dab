//! Badge showing the current and longest reading streaks.

use chrono::NaiveDate;

use super::builder::SvgBuilder;
use super::element::{Label, SvgElement};
use super::format::pluralize;
use super::style::palette;
use crate::paper::Paper;
use crate::stats::Streaks;

const WIDTH: f64 = 320.0;
const HEIGHT: f64 = 60.0;
const SECOND_COLUMN_X: f64 = 180.0;

#[derive(Debug, Clone, Copy)]
pub struct StreakBadge {
    streaks: Streaks,
}

impl StreakBadge {
    #[must_use]
    pub const fn new(streaks: Streaks) -> Self {
        Self { streaks }
    }

    #[must_use]
    pub fn from_papers(papers: &[Paper], as_of: NaiveDate) -> Self {
        Self::new(Streaks::from_papers(papers, as_of))
    }
}

impl SvgElement for StreakBadge {
    fn render(&self) -> String {
        let columns = [
            (20.0, "Current streak", self.streaks.current, palette::ACCENT),
            (SECOND_COLUMN_X, "Longest streak", self.streaks.longest, palette::ACCENT_ALT),
        ];

        columns
            .into_iter()
            .fold(
                SvgBuilder::new(WIDTH, HEIGHT).with_title("Reading streaks"),
                |builder, (x, caption, days, color)| {
                    builder
                        .push_element(
                            &Label::new(x, 25.0, caption, palette::TEXT)
                                .with_font_size(13.0)
                                .with_weight(600),
                        )
                        .push_element(
                            &Label::new(x, 45.0, pluralize(days, "day"), color)
                                .with_font_size(20.0)
                                .with_weight(700),
                        )
                },
            )
            .build()
    }
}

/// Render the streak badge as of `as_of`.
#[must_use]
pub fn render_streak(papers: &[Paper], as_of: NaiveDate) -> String {
    StreakBadge::from_papers(papers, as_of).render()
}

#[cfg(test)]
#[path = "streak_tests.rs"]
mod tests;
