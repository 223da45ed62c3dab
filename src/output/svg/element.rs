//! Primitive SVG elements: bars, text labels, and lines.

use std::fmt::Write;

use super::format::xml_escape;
use super::style::{ChartColor, FONT_FAMILY, TextAnchor};

/// Line-break entity for `<title>` tooltips (raw newlines are collapsed).
const TOOLTIP_BREAK: &str = "&#10;";

/// Base trait for SVG elements.
pub trait SvgElement {
    /// Render the element to an SVG string.
    fn render(&self) -> String;
}

/// A rounded rectangle with an optional multi-line tooltip.
///
/// Used for chart bars, heatmap cells and tag pills.
#[derive(Debug, Clone)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: ChartColor,
    pub radius: f64,
    /// Tooltip lines, escaped and joined with a line-break entity on render.
    pub tooltip: Vec<String>,
}

impl Bar {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64, color: ChartColor) -> Self {
        Self {
            x,
            y,
            width,
            height,
            color,
            radius: 3.0,
            tooltip: Vec::new(),
        }
    }

    #[must_use]
    pub const fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    #[must_use]
    pub fn with_tooltip(mut self, lines: Vec<String>) -> Self {
        self.tooltip = lines;
        self
    }
}

impl SvgElement for Bar {
    fn render(&self) -> String {
        let mut output = format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{r}" ry="{r}" fill="{}""#,
            self.x,
            self.y,
            self.width,
            self.height,
            self.color,
            r = self.radius,
        );

        if self.tooltip.is_empty() {
            output.push_str("/>");
        } else {
            let title = self
                .tooltip
                .iter()
                .map(|line| xml_escape(line))
                .collect::<Vec<_>>()
                .join(TOOLTIP_BREAK);
            let _ = write!(output, "><title>{title}</title></rect>");
        }
        output
    }
}

/// A text label. Content is escaped on render.
#[derive(Debug, Clone)]
pub struct Label {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub color: ChartColor,
    pub font_size: f64,
    pub anchor: TextAnchor,
    pub font_weight: Option<u16>,
}

impl Label {
    #[must_use]
    pub fn new(x: f64, y: f64, text: impl Into<String>, color: ChartColor) -> Self {
        Self {
            x,
            y,
            text: text.into(),
            color,
            font_size: 10.0,
            anchor: TextAnchor::Start,
            font_weight: None,
        }
    }

    #[must_use]
    pub const fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    #[must_use]
    pub const fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    #[must_use]
    pub const fn with_weight(mut self, weight: u16) -> Self {
        self.font_weight = Some(weight);
        self
    }
}

impl SvgElement for Label {
    fn render(&self) -> String {
        let mut output = format!(r#"<text x="{}" y="{}""#, self.x, self.y);
        if self.anchor != TextAnchor::Start {
            let _ = write!(output, r#" text-anchor="{}""#, self.anchor);
        }
        let _ = write!(
            output,
            r#" fill="{}" font-size="{}""#,
            self.color, self.font_size
        );
        if let Some(weight) = self.font_weight {
            let _ = write!(output, r#" font-weight="{weight}""#);
        }
        let _ = write!(
            output,
            r#" font-family="{FONT_FAMILY}">{}</text>"#,
            xml_escape(&self.text)
        );
        output
    }
}

/// A polyline with an optional filled area beneath it.
#[derive(Debug, Clone)]
pub struct Line {
    pub points: Vec<(f64, f64)>,
    pub color: ChartColor,
    pub stroke_width: f64,
    pub fill: Option<ChartColor>,
    pub fill_opacity: f64,
    /// Y-coordinate of the baseline for the fill area.
    /// In SVG coordinates, higher values are lower on screen.
    pub baseline_y: f64,
}

impl Line {
    #[must_use]
    pub const fn new(points: Vec<(f64, f64)>, color: ChartColor) -> Self {
        Self {
            points,
            color,
            stroke_width: 2.0,
            fill: None,
            fill_opacity: 0.3,
            baseline_y: 0.0,
        }
    }

    /// Fill the area between the line and `baseline_y` with `color`.
    #[must_use]
    pub const fn with_fill(mut self, color: ChartColor, baseline_y: f64) -> Self {
        self.fill = Some(color);
        self.baseline_y = baseline_y;
        self
    }

    fn point_list(&self) -> String {
        self.points
            .iter()
            .map(|(x, y)| format!("{x:.1},{y:.1}"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl SvgElement for Line {
    fn render(&self) -> String {
        if self.points.is_empty() {
            return String::new();
        }

        let points = self.point_list();
        let mut output = String::new();

        if let Some(fill) = self.fill {
            let first_x = self.points[0].0;
            let last_x = self.points[self.points.len() - 1].0;
            let baseline = self.baseline_y;
            let _ = writeln!(
                output,
                r#"<polygon points="{first_x:.1},{baseline:.1} {points} {last_x:.1},{baseline:.1}" fill="{fill}" opacity="{}"/>"#,
                self.fill_opacity
            );
        }

        let _ = write!(
            output,
            r#"<polyline points="{points}" fill="none" stroke="{}" stroke-width="{}" stroke-linecap="round" stroke-linejoin="round"/>"#,
            self.color, self.stroke_width
        );

        output
    }
}

#[cfg(test)]
#[path = "element_tests.rs"]
mod tests;
