use pretty_assertions::assert_eq;
use server::repo;
use shared_types::{Role, SessionRequestDraft, SessionStatus};

use crate::common::{login_as, new_actions, seeded};

#[test]
fn approving_one_request_leaves_the_other_pending() {
    let mut store = seeded();
    let mentor = login_as(&store, Role::Mentor);
    assert_eq!(mentor.id, "mentor-1");
    assert_eq!(repo::session::pending_for_mentor(&store, "mentor-1").len(), 2);

    repo::session::approve(&mut store, &mentor, "sr-1").unwrap();

    assert_eq!(
        repo::session::find_by_id(&store, "sr-1").unwrap().status,
        SessionStatus::Approved
    );
    assert_eq!(
        repo::session::find_by_id(&store, "sr-3").unwrap().status,
        SessionStatus::Pending
    );
    let pending: Vec<_> = repo::session::pending_for_mentor(&store, "mentor-1")
        .iter()
        .map(|r| r.id.clone())
        .collect();
    assert_eq!(pending, vec!["sr-3".to_string()]);
}

#[test]
fn student_request_reaches_their_mentor() {
    let mut store = seeded();
    let logged = store.activity_log.len();
    let student = login_as(&store, Role::Student);

    let request = repo::session::create(
        &mut store,
        &student.id,
        SessionRequestDraft::new("Exam revision plan"),
    )
    .unwrap();

    assert_eq!(request.mentor_id, "mentor-1");
    assert_eq!(request.status, SessionStatus::Pending);
    assert!(repo::session::pending_for_mentor(&store, "mentor-1")
        .iter()
        .any(|r| r.id == request.id));
    assert_eq!(
        new_actions(&store, logged),
        vec!["Requested a session with Dr. Evelyn Reed".to_string()]
    );
}

#[test]
fn rejected_request_drops_out_of_the_queue() {
    let mut store = seeded();
    let mentor = login_as(&store, Role::Mentor);

    repo::session::reject(&mut store, &mentor, "sr-3").unwrap();

    let history = repo::session::for_student(&store, "student-3");
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].status, SessionStatus::Rejected);
    assert_eq!(repo::session::pending_for_mentor(&store, "mentor-1").len(), 1);
}

#[test]
fn blank_topic_is_refused_without_side_effects() {
    let mut store = seeded();
    let before = store.clone();

    let err = repo::session::create(&mut store, "student-1", SessionRequestDraft::new("   "))
        .unwrap_err();

    assert!(err.first_field_error().is_some());
    assert_eq!(store, before);
}
