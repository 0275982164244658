use pretty_assertions::assert_eq;
use server::marks_import::parse_marks_csv;
use server::repo;
use shared_types::Role;

use crate::common::{login_as, new_actions, seeded};

const UPLOAD: &str = "\
student_id,subject,score,date
student-3,Circuits,81,2023-09-18
student-9,Circuits,70,2023-09-18
student-1,Algorithms,101,2023-11-01
student-1,Algorithms,90,2023-11-01
";

#[test]
fn valid_rows_land_and_bad_rows_are_reported() {
    let mut store = seeded();
    let mentor = login_as(&store, Role::Mentor);
    let marks_before = repo::student::get(&store, "student-1").unwrap().performance.len();
    let logged = store.activity_log.len();

    let import = parse_marks_csv(UPLOAD, |id| repo::student::find_by_id(&store, id).is_some())
        .unwrap();
    let lines: Vec<u64> = import.rejected.iter().map(|r| r.line).collect();
    assert_eq!(lines, vec![3, 4]);

    let added = repo::student::import_marks(&mut store, &mentor, &import.accepted).unwrap();

    assert_eq!(added, 2);
    let alex = repo::student::get(&store, "student-1").unwrap();
    assert_eq!(alex.performance.len(), marks_before + 1);
    assert_eq!(alex.performance.last().unwrap().score, 90);
    assert!(repo::student::get(&store, "student-3")
        .unwrap()
        .subjects()
        .iter()
        .any(|s| s == "Circuits"));
    assert_eq!(new_actions(&store, logged), vec!["Uploaded 2 mark(s)".to_string()]);
}

#[test]
fn header_without_score_rejects_the_whole_upload() {
    let store = seeded();
    let err = parse_marks_csv("student_id,subject,date\nstudent-1,Maths,2023-11-01\n", |id| {
        repo::student::find_by_id(&store, id).is_some()
    })
    .unwrap_err();
    assert!(err.message.contains("score"));
}

#[test]
fn rows_naming_a_deleted_student_are_refused_at_import() {
    let mut store = seeded();
    let admin = login_as(&store, Role::Admin);
    let import = parse_marks_csv(
        "student_id,subject,score,date\nstudent-5,Finance,75,2023-11-02\n",
        |id| repo::student::find_by_id(&store, id).is_some(),
    )
    .unwrap();

    repo::student::delete(&mut store, &admin, "student-5").unwrap();
    let err = repo::student::import_marks(&mut store, &admin, &import.accepted).unwrap_err();

    assert_eq!(err.kind, shared_types::AppErrorKind::NotFound);
}
