use shared_types::{
    ActivityLogEntry, Admin, Feedback, IssueReport, Mentor, SessionReport, SessionRequest, Student,
};

use crate::fixtures;

/// In-memory collections standing in for a database.
///
/// One store exists per page load. It is seeded from the fixtures and only
/// changed through the functions in [`crate::repo`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MockStore {
    pub students: Vec<Student>,
    pub mentors: Vec<Mentor>,
    pub admins: Vec<Admin>,
    pub feedback: Vec<Feedback>,
    pub session_requests: Vec<SessionRequest>,
    pub session_reports: Vec<SessionReport>,
    pub issue_reports: Vec<IssueReport>,
    pub activity_log: Vec<ActivityLogEntry>,
}

impl MockStore {
    /// A store holding the demo fixtures.
    pub fn seeded() -> Self {
        Self {
            students: fixtures::students(),
            mentors: fixtures::mentors(),
            admins: vec![fixtures::admin()],
            feedback: fixtures::feedback(),
            session_requests: fixtures::session_requests(),
            session_reports: Vec::new(),
            issue_reports: fixtures::issue_reports(),
            activity_log: fixtures::activity_log(),
        }
    }

    /// Whether `id` names any account in the store.
    pub fn has_user(&self, id: &str) -> bool {
        self.students.iter().any(|s| s.id() == id)
            || self.mentors.iter().any(|m| m.id() == id)
            || self.admins.iter().any(|a| a.id == id)
    }

    fn has_student(&self, id: &str) -> bool {
        self.students.iter().any(|s| s.id() == id)
    }

    fn has_mentor(&self, id: &str) -> bool {
        self.mentors.iter().any(|m| m.id() == id)
    }

    /// Every relation id that does not resolve, as `"<record>.<field> -> <id>"`.
    /// Empty for a consistent store.
    pub fn dangling_references(&self) -> Vec<String> {
        let mut dangling = Vec::new();

        for s in &self.students {
            if let Some(mentor_id) = &s.assigned_mentor_id {
                if !self.has_mentor(mentor_id) {
                    dangling.push(format!("{}.assigned_mentor_id -> {mentor_id}", s.id()));
                }
            }
        }
        for m in &self.mentors {
            for mentee in &m.mentee_ids {
                if !self.has_student(mentee) {
                    dangling.push(format!("{}.mentee_ids -> {mentee}", m.id()));
                }
            }
        }
        for f in &self.feedback {
            if !self.has_mentor(&f.mentor_id) {
                dangling.push(format!("{}.mentor_id -> {}", f.id, f.mentor_id));
            }
            if !self.has_student(&f.student_id) {
                dangling.push(format!("{}.student_id -> {}", f.id, f.student_id));
            }
        }
        for r in &self.session_requests {
            if !self.has_mentor(&r.mentor_id) {
                dangling.push(format!("{}.mentor_id -> {}", r.id, r.mentor_id));
            }
            if !self.has_student(&r.student_id) {
                dangling.push(format!("{}.student_id -> {}", r.id, r.student_id));
            }
        }
        for r in &self.session_reports {
            if !self.has_mentor(&r.mentor_id) {
                dangling.push(format!("{}.mentor_id -> {}", r.id, r.mentor_id));
            }
            if !self.has_student(&r.student_id) {
                dangling.push(format!("{}.student_id -> {}", r.id, r.student_id));
            }
        }
        for i in &self.issue_reports {
            if !self.has_student(&i.student_id) {
                dangling.push(format!("{}.student_id -> {}", i.id, i.student_id));
            }
        }

        dangling
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_store_is_consistent() {
        let store = MockStore::seeded();
        assert!(store.dangling_references().is_empty(), "{:?}", store.dangling_references());
    }

    #[test]
    fn seeded_store_sizes() {
        let store = MockStore::seeded();
        assert_eq!(store.students.len(), 5);
        assert_eq!(store.mentors.len(), 6);
        assert_eq!(store.admins.len(), 1);
        assert_eq!(store.feedback.len(), 7);
        assert_eq!(store.session_requests.len(), 3);
        assert_eq!(store.issue_reports.len(), 3);
        assert_eq!(store.activity_log.len(), 7);
    }

    #[test]
    fn dangling_mentor_reference_is_reported() {
        let mut store = MockStore::seeded();
        store.students[0].assigned_mentor_id = Some("mentor-404".to_string());
        assert_eq!(
            store.dangling_references(),
            vec!["student-1.assigned_mentor_id -> mentor-404".to_string()]
        );
    }

    #[test]
    fn has_user_covers_every_role() {
        let store = MockStore::seeded();
        assert!(store.has_user("student-3"));
        assert!(store.has_user("mentor-6"));
        assert!(store.has_user("admin-1"));
        assert!(!store.has_user("ghost"));
    }
}
