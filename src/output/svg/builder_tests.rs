//! Tests for SVG composition builder.

use super::*;
use crate::output::svg::element::Bar;
use crate::output::svg::style::ChartColor;

#[test]
fn builder_creates_svg() {
    let svg = SvgBuilder::new(200.0, 100.0)
        .with_title("Custom SVG")
        .build();

    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
    assert!(svg.contains("width=\"200\" height=\"100\""));
    assert!(svg.contains("viewBox=\"0 0 200 100\""));
    assert!(svg.contains("<title>Custom SVG</title>"));
    assert!(svg.ends_with("</svg>"));
    // No static IDs
    assert!(!svg.contains("id=\""));
}

#[test]
fn builder_draws_background_panel() {
    let svg = SvgBuilder::new(10.0, 10.0).build();
    assert!(svg.contains(r##"<rect width="100%" height="100%" fill="#303446" rx="6"/>"##));
}

#[test]
fn builder_adds_elements() {
    let bar = Bar::new(10.0, 10.0, 30.0, 50.0, ChartColor::hex("#000"));
    let svg = SvgBuilder::new(100.0, 100.0).push_element(&bar).build();
    assert!(svg.contains("<rect x=\"10\""));
}

#[test]
fn builder_has_no_external_references() {
    let svg = SvgBuilder::new(100.0, 100.0).build();
    assert!(!svg.contains("href"));
    assert!(!svg.contains("<script"));
}

#[test]
fn placeholder_has_message_and_fixed_size() {
    let svg = render_placeholder("No tags yet", 400.0, 80.0);
    assert!(svg.contains("width=\"400\" height=\"80\""));
    assert!(svg.contains(">No tags yet</text>"));
    assert!(svg.contains("x=\"200\" y=\"45\""));
}
