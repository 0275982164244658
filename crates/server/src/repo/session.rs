use shared_types::{
    new_id, today, AppError, SessionRequest, SessionRequestDraft, SessionStatus, User,
};

use crate::error_convert::ValidateRequest;
use crate::repo::{activity, mentor, not_found, student};
use crate::store::MockStore;

pub fn find_by_id<'a>(store: &'a MockStore, id: &str) -> Option<&'a SessionRequest> {
    store.session_requests.iter().find(|r| r.id == id)
}

/// Requests addressed to a mentor that still need an answer.
pub fn pending_for_mentor<'a>(store: &'a MockStore, mentor_id: &str) -> Vec<&'a SessionRequest> {
    store
        .session_requests
        .iter()
        .filter(|r| r.mentor_id == mentor_id && r.status == SessionStatus::Pending)
        .collect()
}

pub fn for_student<'a>(store: &'a MockStore, student_id: &str) -> Vec<&'a SessionRequest> {
    store
        .session_requests
        .iter()
        .filter(|r| r.student_id == student_id)
        .collect()
}

/// Ask the student's assigned mentor for a session.
pub fn create(
    store: &mut MockStore,
    student_id: &str,
    draft: SessionRequestDraft,
) -> Result<SessionRequest, AppError> {
    draft.validate_request()?;
    let student = student::get(store, student_id)?;
    let mentor_id = student
        .assigned_mentor_id
        .clone()
        .ok_or_else(|| AppError::bad_request("You do not have an assigned mentor yet"))?;
    let student_user = student.user.clone();
    let mentor_name = mentor::get(store, &mentor_id)?.name().to_string();

    let request = SessionRequest {
        id: new_id("sr"),
        student_id: student_id.to_string(),
        mentor_id,
        topic: draft.topic,
        status: SessionStatus::Pending,
        date: today(),
    };
    store.session_requests.push(request.clone());
    tracing::info!(request_id = %request.id, student_id, "session requested");
    activity::record(
        store,
        &student_user,
        format!("Requested a session with {mentor_name}"),
    );
    Ok(request)
}

/// Change one request's status. No other request is touched.
pub fn set_status(
    store: &mut MockStore,
    actor: &User,
    id: &str,
    status: SessionStatus,
) -> Result<SessionRequest, AppError> {
    let request = store
        .session_requests
        .iter_mut()
        .find(|r| r.id == id)
        .ok_or_else(|| not_found("Session request", id))?;
    request.status = status;
    let updated = request.clone();

    tracing::info!(request_id = id, status = ?status, "session request updated");
    let student_name = student::find_by_id(store, &updated.student_id)
        .map(|s| s.name().to_string())
        .unwrap_or_else(|| updated.student_id.clone());
    let verb = match status {
        SessionStatus::Approved => "Approved",
        SessionStatus::Rejected => "Rejected",
        SessionStatus::Completed => "Completed",
        SessionStatus::Pending => "Reopened",
    };
    activity::record(
        store,
        actor,
        format!("{verb} a session request from {student_name}"),
    );
    Ok(updated)
}

pub fn approve(store: &mut MockStore, actor: &User, id: &str) -> Result<SessionRequest, AppError> {
    set_status(store, actor, id, SessionStatus::Approved)
}

pub fn reject(store: &mut MockStore, actor: &User, id: &str) -> Result<SessionRequest, AppError> {
    set_status(store, actor, id, SessionStatus::Rejected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use shared_types::AppErrorKind;

    fn reed() -> User {
        fixtures::mentors()[0].user.clone()
    }

    #[test]
    fn approving_one_request_leaves_the_other_pending() {
        let mut store = MockStore::seeded();
        assert_eq!(pending_for_mentor(&store, "mentor-1").len(), 2);

        approve(&mut store, &reed(), "sr-1").unwrap();

        assert_eq!(find_by_id(&store, "sr-1").unwrap().status, SessionStatus::Approved);
        assert_eq!(find_by_id(&store, "sr-3").unwrap().status, SessionStatus::Pending);
        assert_eq!(pending_for_mentor(&store, "mentor-1").len(), 1);
    }

    #[test]
    fn create_targets_assigned_mentor() {
        let mut store = MockStore::seeded();
        let request =
            create(&mut store, "student-5", SessionRequestDraft::new("  Budget review  ")).unwrap();
        assert_eq!(request.mentor_id, "mentor-4");
        assert_eq!(request.topic, "Budget review");
        assert_eq!(request.status, SessionStatus::Pending);
        assert_eq!(pending_for_mentor(&store, "mentor-4").len(), 1);
    }

    #[test]
    fn create_rejects_blank_topic() {
        let mut store = MockStore::seeded();
        let err = create(&mut store, "student-1", SessionRequestDraft::new(" ")).unwrap_err();
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert_eq!(store.session_requests.len(), 3);
    }

    #[test]
    fn unknown_request_is_not_found() {
        let mut store = MockStore::seeded();
        let err = reject(&mut store, &reed(), "sr-404").unwrap_err();
        assert_eq!(err.kind, AppErrorKind::NotFound);
    }
}
