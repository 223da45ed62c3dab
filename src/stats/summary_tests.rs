use super::*;
use crate::test_fixtures::{date, paper, sample_papers};

#[test]
fn summary_counts_totals_and_year() {
    let summary = ReadingSummary::compute(&sample_papers(), date("2025-02-16"));
    assert_eq!(summary.total, 3);
    assert_eq!(summary.this_year, 3);
    assert_eq!(summary.streaks.current, 2);
    assert_eq!(summary.streaks.longest, 2);
}

#[test]
fn summary_year_is_relative_to_as_of() {
    let summary = ReadingSummary::compute(&sample_papers(), date("2026-01-01"));
    assert_eq!(summary.this_year, 0);
    assert_eq!(summary.streaks.current, 0);
}

#[test]
fn summary_ranks_tags_and_authors() {
    let summary = ReadingSummary::compute(&sample_papers(), date("2025-02-16"));
    assert_eq!(summary.top_tags[0], ("ml".to_string(), 2));
    assert_eq!(summary.top_authors[0], ("Alice".to_string(), 2));
    assert_eq!(summary.top_authors.len(), 3);
}

#[test]
fn summary_text_lists_everything() {
    let text = ReadingSummary::compute(&sample_papers(), date("2025-02-16")).to_text();
    assert!(text.contains("Total papers: 3"));
    assert!(text.contains("Current streak: 2 days"));
    assert!(text.contains("Top tags: ml (2), nlp (1), cv (1)"));
    assert!(text.contains("Top authors: Alice (2), Bob (1), Charlie (1)"));
}

#[test]
fn summary_text_omits_empty_rankings() {
    let text = ReadingSummary::compute(&[], date("2025-02-16")).to_text();
    assert!(text.contains("Total papers: 0"));
    assert!(!text.contains("Top tags"));
    assert!(!text.contains("Top authors"));
}

#[test]
fn summary_text_uses_singular_for_one_day_streak() {
    let papers = vec![paper("Only", "2025-02-16")];
    let text = ReadingSummary::compute(&papers, date("2025-02-16")).to_text();
    assert!(text.contains("Current streak: 1 day\n"));
    assert!(text.contains("Longest streak: 1 day"));
    assert!(!text.contains("1 days"));
}
