use shared_types::{new_id, today, AppError, SessionReport, SessionReportDraft, User};

use crate::error_convert::ValidateRequest;
use crate::repo::{activity, student};
use crate::store::MockStore;

pub fn for_student<'a>(store: &'a MockStore, student_id: &str) -> Vec<&'a SessionReport> {
    store
        .session_reports
        .iter()
        .filter(|r| r.student_id == student_id)
        .collect()
}

/// A mentor logs notes after meeting one of their mentees.
pub fn create(
    store: &mut MockStore,
    mentor: &User,
    student_id: &str,
    draft: SessionReportDraft,
) -> Result<SessionReport, AppError> {
    draft.validate_request()?;
    let student_name = student::get(store, student_id)?.name().to_string();
    let session_id = store
        .session_requests
        .iter()
        .rev()
        .find(|r| r.student_id == student_id && r.mentor_id == mentor.id)
        .map(|r| r.id.clone());

    let report = SessionReport {
        id: new_id("rep"),
        session_id,
        mentor_id: mentor.id.clone(),
        student_id: student_id.to_string(),
        notes: draft.notes,
        action_items: draft.action_items,
        date: today(),
    };
    store.session_reports.push(report.clone());
    tracing::info!(report_id = %report.id, student_id, "session report logged");
    activity::record(
        store,
        mentor,
        format!("Submitted a session report for {student_name}"),
    );
    Ok(report)
}
