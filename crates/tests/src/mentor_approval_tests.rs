use pretty_assertions::assert_eq;
use server::repo;
use shared_types::{MentorStatus, Role};

use crate::common::{login_as, new_actions, seeded};

#[test]
fn approval_moves_an_application_into_the_directory() {
    let mut store = seeded();
    let admin = login_as(&store, Role::Admin);
    let users_before = repo::user::total_users(&store);
    let logged = store.activity_log.len();

    repo::mentor::approve(&mut store, &admin, "mentor-5").unwrap();

    assert!(repo::mentor::pending(&store).is_empty());
    assert!(repo::mentor::approved(&store).iter().any(|m| m.id() == "mentor-5"));
    assert_eq!(repo::user::total_users(&store), users_before + 1);
    assert_eq!(
        new_actions(&store, logged),
        vec!["Approved mentor application for Dr. Angela Merkel".to_string()]
    );
}

#[test]
fn decisions_touch_only_the_target_mentor() {
    let mut store = seeded();
    let admin = login_as(&store, Role::Admin);
    let others: Vec<_> = store
        .mentors
        .iter()
        .filter(|m| m.id() != "mentor-5")
        .cloned()
        .collect();

    let rejected = repo::mentor::reject(&mut store, &admin, "mentor-5").unwrap();

    assert_eq!(rejected.status, MentorStatus::Rejected);
    let after: Vec<_> = store
        .mentors
        .iter()
        .filter(|m| m.id() != "mentor-5")
        .cloned()
        .collect();
    assert_eq!(after, others);
}

#[test]
fn newly_approved_mentor_shows_in_analytics_unrated() {
    let mut store = seeded();
    let admin = login_as(&store, Role::Admin);

    repo::mentor::approve(&mut store, &admin, "mentor-5").unwrap();

    let ratings = repo::feedback::ratings_by_mentor(&store);
    assert_eq!(
        ratings.last(),
        Some(&("Dr. Angela Merkel".to_string(), 0.0))
    );
}

#[test]
fn unknown_mentor_is_not_found() {
    let mut store = seeded();
    let admin = login_as(&store, Role::Admin);
    let err = repo::mentor::approve(&mut store, &admin, "mentor-99").unwrap_err();
    assert_eq!(err.kind, shared_types::AppErrorKind::NotFound);
}
