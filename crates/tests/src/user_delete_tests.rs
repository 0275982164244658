use pretty_assertions::assert_eq;
use server::matching::suggest_mentor;
use server::repo;
use shared_types::Role;

use crate::common::{login_as, seeded};

#[test]
fn deleting_a_mentor_unassigns_their_students() {
    let mut store = seeded();
    let admin = login_as(&store, Role::Admin);

    repo::mentor::delete(&mut store, &admin, "mentor-1").unwrap();

    assert!(store.dangling_references().is_empty());
    for id in ["student-1", "student-3"] {
        assert_eq!(repo::student::get(&store, id).unwrap().assigned_mentor_id, None);
    }
    assert_eq!(repo::feedback::average_rating(&store, "mentor-1"), None);
    assert!(repo::session::find_by_id(&store, "sr-1").is_none());
    assert_eq!(
        repo::user::first_with_role(&store, Role::Mentor).unwrap().id,
        "mentor-2"
    );
}

#[test]
fn deleting_a_student_removes_their_records() {
    let mut store = seeded();
    let admin = login_as(&store, Role::Admin);

    repo::student::delete(&mut store, &admin, "student-1").unwrap();

    assert!(store.dangling_references().is_empty());
    let mentees: Vec<_> = repo::student::mentees_of(&store, "mentor-1")
        .iter()
        .map(|s| s.id().to_string())
        .collect();
    assert_eq!(mentees, vec!["student-3".to_string()]);
    assert!(repo::issue::for_student(&store, "student-1").is_empty());
    assert!(!store.has_user("student-1"));
}

#[test]
fn suggestions_follow_the_approved_directory() {
    let mut store = seeded();
    let admin = login_as(&store, Role::Admin);

    repo::mentor::delete(&mut store, &admin, "mentor-1").unwrap();

    let student = repo::student::get(&store, "student-1").unwrap();
    let approved = repo::mentor::approved(&store);
    assert!(suggest_mentor(student, &approved).is_none());
}

#[test]
fn every_workflow_keeps_the_store_consistent() {
    let mut store = seeded();
    let admin = login_as(&store, Role::Admin);
    let mentor = login_as(&store, Role::Mentor);

    repo::session::approve(&mut store, &mentor, "sr-1").unwrap();
    repo::mentor::approve(&mut store, &admin, "mentor-5").unwrap();
    repo::student::delete(&mut store, &admin, "student-3").unwrap();
    repo::mentor::delete(&mut store, &admin, "mentor-2").unwrap();

    assert_eq!(store.dangling_references(), Vec::<String>::new());
}
