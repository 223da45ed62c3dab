//! Reading statistics derived from the paper log.
//!
//! Everything here is computed per call from a borrowed paper slice; nothing is
//! cached. Functions that depend on "today" take an explicit `as_of` date.

mod aggregate;
mod streak;
mod summary;

pub use aggregate::{
    author_counts, cumulative_series, day_counts, monthly_counts, papers_by_day, tag_counts, top_n,
};
pub use streak::Streaks;
pub use summary::{ReadingSummary, SUMMARY_TOP_N};
