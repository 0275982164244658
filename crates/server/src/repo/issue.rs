use shared_types::{new_id, today, AppError, IssueReport, IssueReportDraft, IssueStatus, User};

use crate::error_convert::ValidateRequest;
use crate::repo::{activity, not_found, student};
use crate::store::MockStore;

pub fn find_by_id<'a>(store: &'a MockStore, id: &str) -> Option<&'a IssueReport> {
    store.issue_reports.iter().find(|i| i.id == id)
}

pub fn for_student<'a>(store: &'a MockStore, student_id: &str) -> Vec<&'a IssueReport> {
    store
        .issue_reports
        .iter()
        .filter(|i| i.student_id == student_id)
        .collect()
}

pub fn open_count(store: &MockStore, student_id: &str) -> usize {
    for_student(store, student_id)
        .iter()
        .filter(|i| i.is_open())
        .count()
}

/// File a complaint about marks.
pub fn create(
    store: &mut MockStore,
    student_id: &str,
    draft: IssueReportDraft,
) -> Result<IssueReport, AppError> {
    draft.validate_request()?;
    let student_user = student::get(store, student_id)?.user.clone();

    let report = IssueReport {
        id: new_id("ir"),
        student_id: student_id.to_string(),
        description: draft.description,
        status: IssueStatus::Open,
        date: today(),
    };
    store.issue_reports.push(report.clone());
    tracing::info!(issue_id = %report.id, student_id, "issue reported");
    activity::record(store, &student_user, "Reported an issue with marks");
    Ok(report)
}

/// Close exactly one report.
pub fn resolve(store: &mut MockStore, actor: &User, id: &str) -> Result<IssueReport, AppError> {
    let issue = store
        .issue_reports
        .iter_mut()
        .find(|i| i.id == id)
        .ok_or_else(|| not_found("Issue report", id))?;
    issue.status = IssueStatus::Resolved;
    let resolved = issue.clone();

    tracing::info!(issue_id = id, "issue resolved");
    let student_name = student::find_by_id(store, &resolved.student_id)
        .map(|s| s.name().to_string())
        .unwrap_or_else(|| resolved.student_id.clone());
    activity::record(
        store,
        actor,
        format!("Resolved an issue report from {student_name}"),
    );
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn resolve_flips_only_target() {
        let mut store = MockStore::seeded();
        let reed = fixtures::mentors()[0].user.clone();
        resolve(&mut store, &reed, "ir-1").unwrap();
        assert_eq!(find_by_id(&store, "ir-1").unwrap().status, IssueStatus::Resolved);
        assert_eq!(find_by_id(&store, "ir-2").unwrap().status, IssueStatus::Open);
        assert_eq!(find_by_id(&store, "ir-3").unwrap().status, IssueStatus::Resolved);
    }

    #[test]
    fn create_adds_open_report() {
        let mut store = MockStore::seeded();
        assert_eq!(open_count(&store, "student-5"), 0);
        create(&mut store, "student-5", IssueReportDraft::new("Accounting mark missing")).unwrap();
        assert_eq!(open_count(&store, "student-5"), 1);
    }

    #[test]
    fn blank_description_rejected() {
        let mut store = MockStore::seeded();
        assert!(create(&mut store, "student-5", IssueReportDraft::new("\n")).is_err());
        assert!(for_student(&store, "student-5").is_empty());
    }
}
