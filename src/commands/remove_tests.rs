use super::*;
use crate::commands::test_support::Workspace;
use crate::test_fixtures::sample_papers;

#[test]
fn remove_deletes_by_id() {
    let papers = sample_papers();
    let ws = Workspace::with_papers(&papers);
    let args = RemoveArgs {
        id: papers[0].id.clone(),
    };

    let removed = run_remove_impl(&args, ws.config()).unwrap();
    assert_eq!(removed.title, "Paper A");

    let left: Vec<String> = ws.store().load().unwrap().into_iter().map(|p| p.title).collect();
    assert_eq!(left, vec!["Paper B", "Paper C"]);
}

#[test]
fn remove_unknown_id_is_not_found() {
    let ws = Workspace::with_papers(&sample_papers());
    let args = RemoveArgs {
        id: "nope".to_string(),
    };
    let err = run_remove_impl(&args, ws.config()).unwrap_err();
    assert!(matches!(err, PaperTrailError::PaperNotFound(_)));
    assert_eq!(ws.store().load().unwrap().len(), 3);
}
