//! Shared test fixtures for stats and chart tests.

use chrono::NaiveDate;

use crate::paper::{Paper, parse_date};

pub fn date(s: &str) -> NaiveDate {
    parse_date(s).unwrap()
}

pub fn paper(title: &str, day: &str) -> Paper {
    Paper::new(title, date(day))
}

/// Three papers across January and February 2025 with overlapping tags and authors.
pub fn sample_papers() -> Vec<Paper> {
    vec![
        paper("Paper A", "2025-01-10")
            .with_tags(["ml", "nlp"])
            .with_authors(["Alice", "Bob"]),
        paper("Paper B", "2025-02-15")
            .with_tags(["ml"])
            .with_authors(["Alice"]),
        paper("Paper C", "2025-02-16")
            .with_tags(["cv"])
            .with_authors(["Charlie"]),
    ]
}
