//! Horizontal bar chart of the most-read authors.

use super::builder::{SvgBuilder, render_placeholder};
use super::data::{DataPoint, max_value};
use super::element::{Bar, Label, SvgElement};
use super::format::truncate_label;
use super::style::{TextAnchor, palette};
use crate::paper::Paper;
use crate::stats::{author_counts, top_n};

/// Default number of authors shown.
pub const DEFAULT_TOP_AUTHORS: usize = 8;

/// Names longer than this are cut with an ellipsis.
pub const MAX_NAME_CHARS: usize = 20;

const WIDTH: f64 = 400.0;
const EMPTY_HEIGHT: f64 = 80.0;
const BAR_HEIGHT: f64 = 20.0;
const BAR_GAP: f64 = 6.0;
const MARGIN_TOP: f64 = 30.0;
const MARGIN_BOTTOM: f64 = 10.0;
const NAME_COLUMN: f64 = 150.0;
const BAR_SPAN: f64 = 220.0;

#[derive(Debug)]
pub struct AuthorChart {
    data: Vec<DataPoint>,
}

impl AuthorChart {
    #[must_use]
    pub fn from_papers(papers: &[Paper], top: usize) -> Self {
        let data = top_n(&author_counts(papers), top)
            .into_iter()
            .map(|(author, count)| DataPoint::new(author, count))
            .collect();
        Self { data }
    }
}

impl SvgElement for AuthorChart {
    #[allow(clippy::cast_precision_loss)]
    fn render(&self) -> String {
        if self.data.is_empty() {
            return render_placeholder("No authors yet", WIDTH, EMPTY_HEIGHT);
        }

        let max = max_value(&self.data);
        let row_step = BAR_HEIGHT + BAR_GAP;
        let height = (self.data.len() as f64).mul_add(row_step, MARGIN_TOP + MARGIN_BOTTOM);

        let mut builder = SvgBuilder::new(WIDTH, height)
            .with_title("Top Authors")
            .push_element(
                &Label::new(20.0, 18.0, "Top Authors", palette::TEXT)
                    .with_font_size(13.0)
                    .with_weight(600),
            );

        for (i, point) in self.data.iter().enumerate() {
            let y = (i as f64).mul_add(row_step, MARGIN_TOP);
            let text_y = y + BAR_HEIGHT - 5.0;
            let bar_width = (point.ratio_of(max) * BAR_SPAN).floor();

            let name = Label::new(
                NAME_COLUMN - 8.0,
                text_y,
                truncate_label(&point.label, MAX_NAME_CHARS),
                palette::TEXT,
            )
            .with_anchor(TextAnchor::End)
            .with_font_size(11.0);
            let bar = Bar::new(NAME_COLUMN, y, bar_width, BAR_HEIGHT, palette::BAR)
                .with_tooltip(vec![format!("{}: {}", point.label, point.value)]);
            let count = Label::new(
                NAME_COLUMN + bar_width + 6.0,
                text_y,
                point.value.to_string(),
                palette::DIM,
            )
            .with_font_size(11.0);

            builder = builder
                .push_element(&name)
                .push_element(&bar)
                .push_element(&count);
        }

        builder.build()
    }
}

/// Render the `top` most-read authors.
#[must_use]
pub fn render_authors(papers: &[Paper], top: usize) -> String {
    AuthorChart::from_papers(papers, top).render()
}

#[cfg(test)]
#[path = "authors_tests.rs"]
mod tests;
