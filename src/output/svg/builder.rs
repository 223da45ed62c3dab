//! SVG document builder shared by every chart.

use std::fmt::Write;

use super::element::{Label, SvgElement};
use super::format::xml_escape;
use super::style::{TextAnchor, palette};

/// Corner radius of the background panel.
const PANEL_RADIUS: f64 = 6.0;

/// Builder for a standalone SVG document on the dark background panel.
#[derive(Debug, Default)]
pub struct SvgBuilder {
    width: f64,
    height: f64,
    title: String,
    elements: Vec<String>,
}

impl SvgBuilder {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            title: String::new(),
            elements: Vec::new(),
        }
    }

    /// Accessible name, emitted as the document's `<title>`.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn push_element<E: SvgElement>(mut self, element: &E) -> Self {
        self.elements.push(element.render());
        self
    }

    #[must_use]
    pub fn build(self) -> String {
        let mut output = String::new();

        let _ = writeln!(
            output,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" role="img">"#,
            w = self.width,
            h = self.height
        );

        if !self.title.is_empty() {
            let escaped = xml_escape(&self.title);
            let _ = writeln!(output, "  <title>{escaped}</title>");
        }

        let _ = writeln!(
            output,
            r#"  <rect width="100%" height="100%" fill="{}" rx="{PANEL_RADIUS}"/>"#,
            palette::BACKGROUND
        );

        for element in self.elements {
            for line in element.lines() {
                let _ = writeln!(output, "  {line}");
            }
        }

        output.push_str("</svg>");
        output
    }
}

/// Fixed-size panel with a centered message, used when a chart has no data.
#[must_use]
pub fn render_placeholder(message: &str, width: f64, height: f64) -> String {
    let label = Label::new(width / 2.0, height / 2.0 + 5.0, message, palette::DIM)
        .with_anchor(TextAnchor::Middle)
        .with_font_size(13.0);
    SvgBuilder::new(width, height)
        .with_title(message)
        .push_element(&label)
        .build()
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
