//! SVG chart generation for the profile page.
//!
//! Every renderer is a pure function of the paper slice and its options and
//! returns a complete standalone document:
//! - fixed `width`/`height` plus a matching `viewBox`
//! - no scripts or external references
//! - `<title>` elements for screen readers and hover tooltips

mod authors;
mod builder;
mod cumulative;
mod data;
mod element;
mod format;
mod heatmap;
mod monthly;
mod streak;
mod style;
mod tag_cloud;

pub use authors::{AuthorChart, DEFAULT_TOP_AUTHORS, MAX_NAME_CHARS, render_authors};
pub use builder::{SvgBuilder, render_placeholder};
pub use cumulative::{CumulativeChart, render_cumulative};
pub use data::DataPoint;
pub use element::{Bar, Label, Line, SvgElement};
pub use format::{pluralize, truncate_label, xml_escape};
pub use heatmap::{CalendarHeatmap, color_bucket, render_heatmap};
pub use monthly::{MonthlyChart, render_monthly};
pub use streak::{StreakBadge, render_streak};
pub use style::{ChartColor, FONT_FAMILY, TextAnchor, palette};
pub use tag_cloud::{DEFAULT_TOP_TAGS, TagCloud, TagPill, render_tags};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
