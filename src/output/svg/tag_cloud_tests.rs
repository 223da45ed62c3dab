use super::*;
use crate::test_fixtures::{paper, sample_papers};

fn position(svg: &str, needle: &str) -> usize {
    svg.find(needle)
        .unwrap_or_else(|| panic!("missing {needle}"))
}

#[test]
fn empty_tags_render_placeholder() {
    let papers = vec![paper("No tags", "2025-01-01")];
    let svg = render_tags(&papers, DEFAULT_TOP_TAGS);
    assert!(svg.contains("No tags yet"));
    assert!(svg.contains(r#"width="400" height="80""#));
}

#[test]
fn tags_ranked_by_frequency_then_first_seen() {
    let svg = render_tags(&sample_papers(), DEFAULT_TOP_TAGS);
    assert!(svg.contains("Top Tags"));
    let ml = position(&svg, ">ml (2)</text>");
    let nlp = position(&svg, ">nlp (1)</text>");
    let cv = position(&svg, ">cv (1)</text>");
    assert!(ml < nlp && nlp < cv);
}

#[test]
fn top_n_limits_tags() {
    let svg = render_tags(&sample_papers(), 1);
    assert!(svg.contains(">ml (2)</text>"));
    assert!(!svg.contains("nlp"));
}

#[test]
fn font_size_scales_linearly() {
    assert_eq!(TagCloud::font_size(2, 2), 21);
    assert_eq!(TagCloud::font_size(1, 2), 16);
    assert_eq!(TagCloud::font_size(1, 3), 14);
    assert_eq!(TagCloud::font_size(0, 0), 11);
}

#[test]
fn pill_width_estimates_from_characters() {
    // 6 chars * (10 * 0.6) + 16
    assert!((TagCloud::pill_width("ml (2)", 10) - 52.0).abs() < 1e-9);
}

#[test]
fn single_row_layout() {
    let cloud = TagCloud::from_papers(&sample_papers(), DEFAULT_TOP_TAGS);
    let pills = cloud.layout();
    assert_eq!(pills.len(), 3);
    assert!(pills.iter().all(|p| (p.y - 35.0).abs() < f64::EPSILON));
    assert!((pills[0].x - 20.0).abs() < f64::EPSILON);
    assert!(pills[1].x > pills[0].x + pills[0].width);
}

#[test]
fn pills_wrap_past_canvas_width() {
    let papers: Vec<Paper> = (0..8)
        .map(|i| paper(&format!("P{i}"), "2025-01-01").with_tags([format!("long-tag-name-{i}")]))
        .collect();
    let cloud = TagCloud::from_papers(&papers, DEFAULT_TOP_TAGS);
    let pills = cloud.layout();

    assert!(pills.iter().any(|p| p.y > 35.0));
    for pill in &pills {
        assert!(pill.x + pill.width <= 380.0 || (pill.x - 20.0).abs() < f64::EPSILON);
    }

    let svg = cloud.render();
    let last_row = pills.last().unwrap().y;
    assert!(svg.contains(&format!(r#"height="{}""#, last_row + 40.0)));
}

#[test]
fn tag_text_is_escaped() {
    let papers = vec![paper("P", "2025-01-01").with_tags(["c++ & <rust>"])];
    let svg = render_tags(&papers, DEFAULT_TOP_TAGS);
    assert!(svg.contains("c++ &amp; &lt;rust&gt; (1)"));
}
