//! Current and longest reading streaks.

use std::collections::BTreeSet;

use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::paper::Paper;

/// Consecutive-day reading streaks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Streaks {
    /// Consecutive days ending at `as_of` (or the day before, if nothing is
    /// logged for `as_of` yet).
    pub current: usize,
    /// Longest run of consecutive days anywhere in the history.
    pub longest: usize,
}

impl Streaks {
    /// Compute streaks from the distinct read dates of `papers`.
    #[must_use]
    pub fn from_papers(papers: &[Paper], as_of: NaiveDate) -> Self {
        Self::compute(papers.iter().map(|p| p.date_read), as_of)
    }

    /// Compute streaks from a set of read dates (duplicates are ignored).
    ///
    /// A missing entry for `as_of` itself does not break the current streak:
    /// counting then starts from the previous day. Any other missing day ends it.
    #[must_use]
    pub fn compute(dates: impl IntoIterator<Item = NaiveDate>, as_of: NaiveDate) -> Self {
        let dates: BTreeSet<NaiveDate> = dates.into_iter().collect();
        Self {
            current: current_streak(&dates, as_of),
            longest: longest_streak(&dates),
        }
    }
}

fn current_streak(dates: &BTreeSet<NaiveDate>, as_of: NaiveDate) -> usize {
    let mut check = if dates.contains(&as_of) {
        Some(as_of)
    } else {
        as_of.checked_sub_days(Days::new(1))
    };

    let mut count = 0;
    while let Some(day) = check.filter(|d| dates.contains(d)) {
        count += 1;
        check = day.pred_opt();
    }
    count
}

fn longest_streak(dates: &BTreeSet<NaiveDate>) -> usize {
    let mut longest = 0;
    let mut run = 0;
    let mut previous: Option<NaiveDate> = None;

    for &day in dates {
        run = match previous {
            Some(prev) if prev.succ_opt() == Some(day) => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        previous = Some(day);
    }
    longest
}

#[cfg(test)]
#[path = "streak_tests.rs"]
mod tests;
