//! Tag cloud: the most frequent tags as pills sized by frequency.

use super::builder::{SvgBuilder, render_placeholder};
use super::element::{Bar, Label, SvgElement};
use super::style::palette;
use crate::paper::Paper;
use crate::stats::{tag_counts, top_n};

/// Default number of tags shown.
pub const DEFAULT_TOP_TAGS: usize = 12;

const WIDTH: f64 = 400.0;
const EMPTY_HEIGHT: f64 = 80.0;
const MARGIN_X: f64 = 20.0;
const FIRST_ROW_Y: f64 = 35.0;
const ROW_HEIGHT: f64 = 30.0;
const PILL_GAP: f64 = 8.0;
const PILL_PADDING: f64 = 8.0;
const MIN_FONT: usize = 11;
const FONT_RANGE: usize = 10;
/// Average glyph width as a share of the font size.
const GLYPH_WIDTH_RATIO: f64 = 0.6;

/// A positioned tag pill.
#[derive(Debug, Clone, PartialEq)]
pub struct TagPill {
    pub text: String,
    pub font_size: usize,
    pub x: f64,
    /// Text baseline.
    pub y: f64,
    pub width: f64,
}

#[derive(Debug)]
pub struct TagCloud {
    tags: Vec<(String, usize)>,
}

impl TagCloud {
    #[must_use]
    pub fn from_papers(papers: &[Paper], top: usize) -> Self {
        let tags = top_n(&tag_counts(papers), top)
            .into_iter()
            .map(|(tag, count)| (tag.to_string(), count))
            .collect();
        Self { tags }
    }

    /// Font size between `MIN_FONT` and `MIN_FONT + FONT_RANGE`, linear in
    /// `count / max_count`.
    #[must_use]
    pub const fn font_size(count: usize, max_count: usize) -> usize {
        if max_count == 0 {
            return MIN_FONT;
        }
        MIN_FONT + count * FONT_RANGE / max_count
    }

    /// Estimated pill width: character count times average glyph width plus padding.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn pill_width(text: &str, font_size: usize) -> f64 {
        let glyph = font_size as f64 * GLYPH_WIDTH_RATIO;
        (text.chars().count() as f64).mul_add(glyph, PILL_PADDING * 2.0)
    }

    /// Flow pills left to right, wrapping when the next pill would cross the
    /// right margin.
    #[must_use]
    pub fn layout(&self) -> Vec<TagPill> {
        let max_count = self.tags.first().map_or(0, |(_, count)| *count);
        let mut x = MARGIN_X;
        let mut y = FIRST_ROW_Y;

        self.tags
            .iter()
            .map(|(tag, count)| {
                let text = format!("{tag} ({count})");
                let font_size = Self::font_size(*count, max_count);
                let width = Self::pill_width(&text, font_size);

                if x > MARGIN_X && x + width > WIDTH - MARGIN_X {
                    x = MARGIN_X;
                    y += ROW_HEIGHT;
                }
                let pill = TagPill {
                    text,
                    font_size,
                    x,
                    y,
                    width,
                };
                x += width + PILL_GAP;
                pill
            })
            .collect()
    }
}

impl SvgElement for TagCloud {
    #[allow(clippy::cast_precision_loss)]
    fn render(&self) -> String {
        if self.tags.is_empty() {
            return render_placeholder("No tags yet", WIDTH, EMPTY_HEIGHT);
        }

        let pills = self.layout();
        let last_row = pills.last().map_or(FIRST_ROW_Y, |p| p.y);

        let mut builder = SvgBuilder::new(WIDTH, last_row + 40.0)
            .with_title("Top Tags")
            .push_element(
                &Label::new(MARGIN_X, 18.0, "Top Tags", palette::TEXT)
                    .with_font_size(13.0)
                    .with_weight(600),
            );

        for pill in &pills {
            let size = pill.font_size as f64;
            let pill_height = size + 10.0;
            let background = Bar::new(
                pill.x,
                pill.y - size + 2.0,
                pill.width.round(),
                pill_height,
                palette::SURFACE,
            )
            .with_radius((pill_height / 2.0).floor());
            let text = Label::new(pill.x + PILL_PADDING, pill.y + 6.0, &pill.text, palette::TEXT)
                .with_font_size(size);
            builder = builder.push_element(&background).push_element(&text);
        }

        builder.build()
    }
}

/// Render the `top` most frequent tags.
#[must_use]
pub fn render_tags(papers: &[Paper], top: usize) -> String {
    TagCloud::from_papers(papers, top).render()
}

#[cfg(test)]
#[path = "tag_cloud_tests.rs"]
mod tests;
