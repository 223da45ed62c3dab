//! SVG styling primitives: the shared palette, font stack and text anchoring.

use std::fmt;

/// Font stack applied to every text element.
pub const FONT_FAMILY: &str = "system-ui, -apple-system, sans-serif";

/// A literal color value (e.g. `#a6d189`).
///
/// Charts are embedded as standalone images, so colors are always concrete
/// values rather than CSS variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartColor(&'static str);

impl ChartColor {
    #[must_use]
    pub const fn hex(color: &'static str) -> Self {
        Self(color)
    }
}

impl fmt::Display for ChartColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Dark profile-card palette shared by all charts.
pub mod palette {
    use super::ChartColor;

    pub const BACKGROUND: ChartColor = ChartColor::hex("#303446");
    pub const TEXT: ChartColor = ChartColor::hex("#c6d0f5");
    pub const DIM: ChartColor = ChartColor::hex("#a5adce");
    pub const ACCENT: ChartColor = ChartColor::hex("#a6d189");
    pub const ACCENT_ALT: ChartColor = ChartColor::hex("#81c8be");
    pub const BAR: ChartColor = ChartColor::hex("#8caaee");
    pub const SURFACE: ChartColor = ChartColor::hex("#414559");

    /// Heatmap scale from empty to busiest day.
    pub const HEATMAP_SCALE: [ChartColor; 5] = [
        SURFACE,
        ChartColor::hex("#4e6350"),
        ChartColor::hex("#5a8147"),
        ChartColor::hex("#80a86b"),
        ACCENT,
    ];
}

/// Text anchor position for labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl fmt::Display for TextAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Middle => write!(f, "middle"),
            Self::End => write!(f, "end"),
        }
    }
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
