use super::*;
use crate::test_fixtures::{paper, sample_papers};

#[test]
fn empty_input_renders_placeholder() {
    let svg = render_authors(&[], DEFAULT_TOP_AUTHORS);
    assert!(svg.contains("No authors yet"));
    assert!(svg.contains(r#"width="400" height="80""#));
}

#[test]
fn papers_without_authors_render_placeholder() {
    let svg = render_authors(&[paper("Anonymous", "2025-01-01")], DEFAULT_TOP_AUTHORS);
    assert!(svg.contains("No authors yet"));
}

#[test]
fn ranks_authors_by_count_with_stable_ties() {
    let svg = AuthorChart::from_papers(&sample_papers(), DEFAULT_TOP_AUTHORS).render();
    let alice = svg.find("<title>Alice: 2</title>").unwrap();
    let bob = svg.find("<title>Bob: 1</title>").unwrap();
    let charlie = svg.find("<title>Charlie: 1</title>").unwrap();
    assert!(alice < bob && bob < charlie);
}

#[test]
fn renders_rows_scaled_to_top_author() {
    let svg = render_authors(&sample_papers(), DEFAULT_TOP_AUTHORS);
    assert!(svg.contains("Top Authors"));
    // 30 + 3 * 26 + 10
    assert!(svg.contains(r#"width="400" height="118""#));
    assert!(svg.contains(r#"<rect x="150" y="30" width="220" height="20""#));
    assert!(svg.contains(r#"<rect x="150" y="56" width="110" height="20""#));
    assert!(svg.contains("<title>Alice: 2</title>"));
    assert!(svg.contains(r#"<text x="376" y="45""#));
}

#[test]
fn long_names_truncated_with_full_tooltip() {
    let name = "Bartholomew Montgomery-Smythe";
    let papers = vec![paper("P", "2025-01-01").with_authors([name])];
    let svg = render_authors(&papers, DEFAULT_TOP_AUTHORS);
    assert!(svg.contains(">Bartholomew Montgo\u{2026}</text>"));
    assert!(svg.contains(&format!("<title>{name}: 1</title>")));
}

#[test]
fn top_n_limits_rows() {
    let svg = render_authors(&sample_papers(), 1);
    assert_eq!(svg.matches("<rect x=").count(), 1);
    assert!(!svg.contains("Charlie"));
}

#[test]
fn author_names_are_escaped() {
    let papers = vec![paper("P", "2025-01-01").with_authors(["O'Brien & <Co>"])];
    let svg = render_authors(&papers, DEFAULT_TOP_AUTHORS);
    assert!(svg.contains("O&#39;Brien &amp; &lt;Co&gt;"));
    assert!(!svg.contains("<Co>"));
}
