use super::*;
use crate::commands::test_support::Workspace;
use crate::test_fixtures::{paper, sample_papers};

fn titles(papers: &[&Paper]) -> Vec<String> {
    papers.iter().map(|p| p.title.clone()).collect()
}

fn rated_papers() -> Vec<Paper> {
    vec![
        paper("Old", "2024-12-31").with_tags(["ML"]).with_rating(5),
        paper("Jan", "2025-01-05").with_tags(["ml"]).with_rating(3),
        paper("Feb", "2025-02-05").with_tags(["cv"]),
        paper("Feb twin", "2025-02-05").with_tags(["cv"]).with_rating(4),
    ]
}

mod filter_tests {
    use super::*;

    #[test]
    fn no_filter_lists_newest_first() {
        let papers = rated_papers();
        let selected = filter_papers(&papers, &ListFilter::default());
        assert_eq!(titles(&selected), vec!["Feb", "Feb twin", "Jan", "Old"]);
    }

    #[test]
    fn year_and_month() {
        let papers = rated_papers();
        let filter = ListFilter {
            year: Some(2025),
            month: Some(2),
            ..ListFilter::default()
        };
        assert_eq!(titles(&filter_papers(&papers, &filter)), vec!["Feb", "Feb twin"]);
    }

    #[test]
    fn month_without_year_is_ignored() {
        let papers = rated_papers();
        let filter = ListFilter {
            month: Some(2),
            ..ListFilter::default()
        };
        assert_eq!(filter_papers(&papers, &filter).len(), 4);
    }

    #[test]
    fn tag_is_case_insensitive() {
        let papers = rated_papers();
        let filter = ListFilter {
            tag: Some("Ml".to_string()),
            ..ListFilter::default()
        };
        assert_eq!(titles(&filter_papers(&papers, &filter)), vec!["Jan", "Old"]);
    }

    #[test]
    fn rating_min_excludes_unrated() {
        let papers = rated_papers();
        let filter = ListFilter {
            rating_min: Some(4),
            ..ListFilter::default()
        };
        assert_eq!(titles(&filter_papers(&papers, &filter)), vec!["Feb twin", "Old"]);
    }
}

mod command_tests {
    use super::*;

    fn list_args(format: ListFormat) -> ListArgs {
        ListArgs {
            year: None,
            month: None,
            tag: None,
            rating_min: None,
            format,
        }
    }

    #[test]
    fn list_reads_the_log() {
        let ws = Workspace::with_papers(&sample_papers());
        let output = run_list_impl(&list_args(ListFormat::Text), ws.config()).unwrap();
        let c = output.find("Paper C").unwrap();
        let a = output.find("Paper A").unwrap();
        assert!(c < a);
        assert!(output.ends_with("3 papers\n"));
    }

    #[test]
    fn list_json_round_trips() {
        let ws = Workspace::with_papers(&sample_papers());
        let output = run_list_impl(&list_args(ListFormat::Json), ws.config()).unwrap();
        let parsed: Vec<Paper> = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[0].title, "Paper C");
    }

    #[test]
    fn search_matches_authors_and_tags() {
        let ws = Workspace::with_papers(&sample_papers());
        let by_author = SearchArgs {
            query: "alice".to_string(),
            format: ListFormat::Text,
        };
        let output = run_search_impl(&by_author, ws.config()).unwrap();
        assert!(output.contains("Paper A"));
        assert!(output.contains("Paper B"));
        assert!(!output.contains("Paper C"));

        let by_tag = SearchArgs {
            query: "CV".to_string(),
            format: ListFormat::Text,
        };
        let output = run_search_impl(&by_tag, ws.config()).unwrap();
        assert!(output.contains("Paper C"));
        assert!(output.ends_with("1 paper\n"));
    }

    #[test]
    fn search_without_hits() {
        let ws = Workspace::with_papers(&sample_papers());
        let args = SearchArgs {
            query: "quantum".to_string(),
            format: ListFormat::Text,
        };
        assert_eq!(
            run_search_impl(&args, ws.config()).unwrap(),
            "No papers found.\n"
        );
    }
}
