use pretty_assertions::assert_eq;
use server::repo;
use shared_types::{IssueReportDraft, IssueStatus, Role};

use crate::common::{login_as, new_actions, seeded};

#[test]
fn student_report_is_resolved_by_the_mentor() {
    let mut store = seeded();
    let student = login_as(&store, Role::Student);
    let mentor = login_as(&store, Role::Mentor);
    let open_before = repo::issue::open_count(&store, &student.id);
    let logged = store.activity_log.len();

    let report = repo::issue::create(
        &mut store,
        &student.id,
        IssueReportDraft::new("Databases mark from October is missing."),
    )
    .unwrap();
    assert_eq!(repo::issue::open_count(&store, &student.id), open_before + 1);

    let resolved = repo::issue::resolve(&mut store, &mentor, &report.id).unwrap();

    assert_eq!(resolved.status, IssueStatus::Resolved);
    assert_eq!(repo::issue::open_count(&store, &student.id), open_before);
    assert_eq!(
        repo::issue::find_by_id(&store, "ir-1").unwrap().status,
        IssueStatus::Open
    );
    assert_eq!(
        new_actions(&store, logged),
        vec![
            "Reported an issue with marks".to_string(),
            "Resolved an issue report from Alex Johnson".to_string(),
        ]
    );
}

#[test]
fn resolving_a_missing_report_fails() {
    let mut store = seeded();
    let mentor = login_as(&store, Role::Mentor);
    let err = repo::issue::resolve(&mut store, &mentor, "ir-404").unwrap_err();
    assert_eq!(err.kind, shared_types::AppErrorKind::NotFound);
}
