//! Tests for primitive SVG elements.

use super::*;

mod bar_tests {
    use super::*;

    #[test]
    fn bar_renders_self_closing_without_tooltip() {
        let svg = Bar::new(10.0, 20.0, 28.0, 80.0, ChartColor::hex("#8caaee")).render();
        assert_eq!(
            svg,
            r##"<rect x="10" y="20" width="28" height="80" rx="3" ry="3" fill="#8caaee"/>"##
        );
    }

    #[test]
    fn bar_joins_tooltip_lines_with_entity() {
        let svg = Bar::new(0.0, 0.0, 13.0, 13.0, ChartColor::hex("#000"))
            .with_radius(2.0)
            .with_tooltip(vec!["2025-03-15".to_string(), "2 papers".to_string()]);
        let svg = svg.render();
        assert!(svg.contains("<title>2025-03-15&#10;2 papers</title></rect>"));
        assert!(svg.contains("rx=\"2\""));
        assert!(!svg.contains('\n'));
    }

    #[test]
    fn bar_escapes_tooltip() {
        let svg = Bar::new(0.0, 0.0, 10.0, 10.0, ChartColor::hex("#000"))
            .with_tooltip(vec!["Test <script>".to_string()])
            .render();
        assert!(svg.contains("&lt;script&gt;"));
        assert!(!svg.contains("<script>"));
    }
}

mod label_tests {
    use super::*;

    #[test]
    fn label_defaults_omit_anchor_and_weight() {
        let svg = Label::new(20.0, 18.0, "Top Tags", ChartColor::hex("#fff")).render();
        assert!(svg.starts_with(r##"<text x="20" y="18" fill="#fff" font-size="10""##));
        assert!(!svg.contains("text-anchor"));
        assert!(!svg.contains("font-weight"));
        assert!(svg.ends_with(">Top Tags</text>"));
    }

    #[test]
    fn label_with_anchor_and_weight() {
        let svg = Label::new(0.0, 0.0, "x", ChartColor::hex("#fff"))
            .with_anchor(TextAnchor::End)
            .with_font_size(13.0)
            .with_weight(600)
            .render();
        assert!(svg.contains(r#"text-anchor="end""#));
        assert!(svg.contains(r#"font-size="13""#));
        assert!(svg.contains(r#"font-weight="600""#));
        assert!(svg.contains(FONT_FAMILY));
    }

    #[test]
    fn label_escapes_text() {
        let svg = Label::new(0.0, 0.0, "R&D <draft>", ChartColor::hex("#fff")).render();
        assert!(svg.contains("R&amp;D &lt;draft&gt;"));
    }
}

mod line_tests {
    use super::*;

    #[test]
    fn empty_line_renders_nothing() {
        let line = Line::new(Vec::new(), ChartColor::hex("#000"));
        assert!(line.render().is_empty());
    }

    #[test]
    fn line_renders_polyline_with_one_decimal() {
        let line = Line::new(vec![(0.0, 10.0), (5.27, 2.0)], ChartColor::hex("#a6d189"));
        let svg = line.render();
        assert!(svg.contains(r#"<polyline points="0.0,10.0 5.3,2.0""#));
        assert!(!svg.contains("<polygon"));
    }

    #[test]
    fn filled_line_closes_to_baseline() {
        let line = Line::new(vec![(45.0, 150.0), (385.0, 30.0)], ChartColor::hex("#a6d189"))
            .with_fill(ChartColor::hex("#8caaee"), 150.0);
        let svg = line.render();
        assert!(svg.contains(
            r##"<polygon points="45.0,150.0 45.0,150.0 385.0,30.0 385.0,150.0" fill="#8caaee""##
        ));
        assert!(svg.contains("<polyline"));
    }

    #[test]
    fn default_stroke_width() {
        let svg = Line::new(vec![(0.0, 0.0)], ChartColor::hex("#000")).render();
        assert!(svg.contains(r#"stroke-width="2""#));
    }
}
