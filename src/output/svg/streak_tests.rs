use super::*;
use crate::test_fixtures::{date, paper, sample_papers};

#[test]
fn badge_has_both_streaks() {
    let svg = render_streak(&sample_papers(), date("2025-02-16"));
    assert!(svg.contains(">Current streak</text>"));
    assert!(svg.contains(">Longest streak</text>"));
    assert!(svg.contains(r#"width="320" height="60""#));
}

#[test]
fn badge_values_follow_as_of_date() {
    let svg = render_streak(&sample_papers(), date("2025-02-16"));
    assert!(svg.contains(r##"fill="#a6d189" font-size="20" font-weight="700" font-family="system-ui, -apple-system, sans-serif">2 days</text>"##));

    let later = render_streak(&sample_papers(), date("2025-03-01"));
    assert!(later.contains(r##"fill="#a6d189" font-size="20" font-weight="700" font-family="system-ui, -apple-system, sans-serif">0 days</text>"##));
    assert!(later.contains(r##"fill="#81c8be" font-size="20" font-weight="700" font-family="system-ui, -apple-system, sans-serif">2 days</text>"##));
}

#[test]
fn empty_log_shows_zero_days() {
    let svg = render_streak(&[], date("2025-02-16"));
    assert_eq!(svg.matches(">0 days</text>").count(), 2);
}

#[test]
fn single_paper_today() {
    let today = date("2025-02-16");
    let svg = render_streak(&[paper("Today", "2025-02-16")], today);
    assert_eq!(svg.matches(">1 day</text>").count(), 2);
}
