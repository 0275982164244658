use shared_types::{AppError, CareerAssessmentStatus, Mark, Student, User};

use crate::marks_import::ImportedMark;
use crate::repo::{activity, not_found};
use crate::store::MockStore;

pub fn list(store: &MockStore) -> &[Student] {
    &store.students
}

pub fn find_by_id<'a>(store: &'a MockStore, id: &str) -> Option<&'a Student> {
    store.students.iter().find(|s| s.id() == id)
}

pub fn get<'a>(store: &'a MockStore, id: &str) -> Result<&'a Student, AppError> {
    find_by_id(store, id).ok_or_else(|| not_found("Student", id))
}

fn get_mut<'a>(store: &'a mut MockStore, id: &str) -> Result<&'a mut Student, AppError> {
    store
        .students
        .iter_mut()
        .find(|s| s.id() == id)
        .ok_or_else(|| not_found("Student", id))
}

/// Students on a mentor's mentee list, in list order.
pub fn mentees_of<'a>(store: &'a MockStore, mentor_id: &str) -> Vec<&'a Student> {
    let Some(mentor) = store.mentors.iter().find(|m| m.id() == mentor_id) else {
        return Vec::new();
    };
    mentor
        .mentee_ids
        .iter()
        .filter_map(|id| find_by_id(store, id))
        .collect()
}

/// Append marks to a student's record.
pub fn append_marks(store: &mut MockStore, id: &str, marks: Vec<Mark>) -> Result<usize, AppError> {
    let student = get_mut(store, id)?;
    let added = marks.len();
    student.performance.extend(marks);
    tracing::info!(student_id = id, added, "marks appended");
    Ok(added)
}

/// Apply the valid rows of an import, grouped per student.
///
/// Every row must name a known student; otherwise nothing is applied.
pub fn import_marks(
    store: &mut MockStore,
    actor: &User,
    rows: &[ImportedMark],
) -> Result<usize, AppError> {
    if let Some(unknown) = rows.iter().find(|r| find_by_id(store, &r.student_id).is_none()) {
        return Err(not_found("Student", &unknown.student_id));
    }
    for row in rows {
        append_marks(store, &row.student_id, vec![row.mark.clone()])?;
    }
    if !rows.is_empty() {
        activity::record(store, actor, format!("Uploaded {} mark(s)", rows.len()));
    }
    Ok(rows.len())
}

fn set_career_status(
    store: &mut MockStore,
    id: &str,
    status: CareerAssessmentStatus,
    report: Option<String>,
) -> Result<Student, AppError> {
    let student = get_mut(store, id)?;
    student.career_assessment_status = status;
    student.career_report = report;
    tracing::info!(student_id = id, status = ?status, "career assessment status changed");
    Ok(student.clone())
}

/// Mark the questionnaire as in progress while the report is generated.
pub fn begin_assessment(store: &mut MockStore, id: &str) -> Result<Student, AppError> {
    set_career_status(store, id, CareerAssessmentStatus::InProgress, None)
}

/// Attach a generated report and wait for the mentor to verify it.
pub fn submit_career_report(
    store: &mut MockStore,
    id: &str,
    report: String,
) -> Result<Student, AppError> {
    set_career_status(
        store,
        id,
        CareerAssessmentStatus::PendingVerification,
        Some(report),
    )
}

/// Mentor releases a pending report to the student.
pub fn verify_career_report(
    store: &mut MockStore,
    actor: &User,
    id: &str,
) -> Result<Student, AppError> {
    let student = get(store, id)?;
    if student.career_assessment_status != CareerAssessmentStatus::PendingVerification {
        return Err(AppError::bad_request(format!(
            "{} has no career report awaiting verification",
            student.name()
        )));
    }
    let report = student.career_report.clone();
    let name = student.name().to_string();
    let updated = set_career_status(store, id, CareerAssessmentStatus::Completed, report)?;
    activity::record(store, actor, format!("Verified the career report for {name}"));
    Ok(updated)
}

/// "Retake Assessment": drop the report and start over.
pub fn reset_assessment(store: &mut MockStore, id: &str) -> Result<Student, AppError> {
    set_career_status(store, id, CareerAssessmentStatus::NotStarted, None)
}

/// Remove a student and every record that points at them.
pub fn delete(store: &mut MockStore, actor: &User, id: &str) -> Result<Student, AppError> {
    let index = store
        .students
        .iter()
        .position(|s| s.id() == id)
        .ok_or_else(|| not_found("Student", id))?;
    let removed = store.students.remove(index);

    for mentor in &mut store.mentors {
        mentor.mentee_ids.retain(|m| m != id);
    }
    store.feedback.retain(|f| f.student_id != id);
    store.session_requests.retain(|r| r.student_id != id);
    store.session_reports.retain(|r| r.student_id != id);
    store.issue_reports.retain(|i| i.student_id != id);

    tracing::info!(student_id = id, "student deleted");
    activity::record(store, actor, format!("Deleted student {}", removed.name()));
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use shared_types::AppErrorKind;

    #[test]
    fn mentees_follow_mentor_list() {
        let store = MockStore::seeded();
        let names: Vec<_> = mentees_of(&store, "mentor-1").iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["Alex Johnson", "Chen Wei"]);
        assert!(mentees_of(&store, "mentor-5").is_empty());
        assert!(mentees_of(&store, "ghost").is_empty());
    }

    #[test]
    fn verify_requires_pending_report() {
        let mut store = MockStore::seeded();
        let mentor = fixtures::mentors()[0].user.clone();
        let err = verify_career_report(&mut store, &mentor, "student-1").unwrap_err();
        assert_eq!(err.kind, AppErrorKind::BadRequest);

        let verified = verify_career_report(&mut store, &mentor, "student-4").unwrap();
        assert_eq!(verified.career_assessment_status, CareerAssessmentStatus::Completed);
        assert_eq!(
            verified.career_report.as_deref(),
            Some("AI analysis pending mentor review.")
        );
    }

    #[test]
    fn reset_clears_report() {
        let mut store = MockStore::seeded();
        let student = reset_assessment(&mut store, "student-2").unwrap();
        assert_eq!(student.career_assessment_status, CareerAssessmentStatus::NotStarted);
        assert!(student.career_report.is_none());
    }

    #[test]
    fn delete_cascades_to_related_records() {
        let mut store = MockStore::seeded();
        let admin = fixtures::admin();
        delete(&mut store, &admin, "student-1").unwrap();
        assert!(find_by_id(&store, "student-1").is_none());
        assert!(store.dangling_references().is_empty());
        assert!(store.issue_reports.iter().all(|i| i.student_id != "student-1"));
    }

    #[test]
    fn unknown_student_is_not_found() {
        let mut store = MockStore::seeded();
        let err = append_marks(&mut store, "student-99", vec![]).unwrap_err();
        assert_eq!(err.kind, AppErrorKind::NotFound);
        assert_eq!(err.message, "Student student-99 not found");
    }
}
