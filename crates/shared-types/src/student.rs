use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::User;

/// Progress of a student's career-path assessment.
///
/// Moves `NotStarted -> InProgress -> PendingVerification -> Completed`;
/// retaking resets to `NotStarted`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CareerAssessmentStatus {
    #[default]
    NotStarted,
    InProgress,
    PendingVerification,
    Completed,
}

impl CareerAssessmentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CareerAssessmentStatus::NotStarted => "Not started",
            CareerAssessmentStatus::InProgress => "In progress",
            CareerAssessmentStatus::PendingVerification => "Pending verification",
            CareerAssessmentStatus::Completed => "Completed",
        }
    }
}

/// A single graded result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Mark {
    pub subject: String,
    pub score: u8,
    pub date: NaiveDate,
}

impl Mark {
    pub fn new(subject: &str, score: u8, date: NaiveDate) -> Self {
        Self {
            subject: subject.to_string(),
            score,
            date,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Student {
    #[serde(flatten)]
    pub user: User,
    pub major: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub assigned_mentor_id: Option<String>,
    pub performance: Vec<Mark>,
    pub career_assessment_status: CareerAssessmentStatus,
    pub career_report: Option<String>,
}

impl Student {
    pub fn id(&self) -> &str {
        &self.user.id
    }

    pub fn name(&self) -> &str {
        &self.user.name
    }

    /// Distinct subjects in the order they first appear.
    pub fn subjects(&self) -> Vec<String> {
        let mut subjects: Vec<String> = Vec::new();
        for mark in &self.performance {
            if !subjects.contains(&mark.subject) {
                subjects.push(mark.subject.clone());
            }
        }
        subjects
    }

    /// Mean score across all marks, or `None` without any.
    pub fn average_score(&self) -> Option<f64> {
        if self.performance.is_empty() {
            return None;
        }
        let total: u32 = self.performance.iter().map(|m| u32::from(m.score)).sum();
        Some(f64::from(total) / self.performance.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Role;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn student(marks: Vec<Mark>) -> Student {
        Student {
            user: User::new("student-9", "Test Student", "t@u.edu", Role::Student),
            major: "History".to_string(),
            strengths: vec![],
            weaknesses: vec![],
            assigned_mentor_id: None,
            performance: marks,
            career_assessment_status: CareerAssessmentStatus::default(),
            career_report: None,
        }
    }

    #[test]
    fn subjects_are_distinct_in_first_seen_order() {
        let s = student(vec![
            Mark::new("Algorithms", 65, date("2023-09-15")),
            Mark::new("Databases", 72, date("2023-09-20")),
            Mark::new("Algorithms", 75, date("2023-10-15")),
        ]);
        assert_eq!(s.subjects(), vec!["Algorithms", "Databases"]);
    }

    #[test]
    fn average_score_handles_empty() {
        assert_eq!(student(vec![]).average_score(), None);
        let s = student(vec![
            Mark::new("A", 60, date("2023-09-15")),
            Mark::new("B", 91, date("2023-09-16")),
        ]);
        assert_eq!(s.average_score(), Some(75.5));
    }

    #[test]
    fn status_uses_screaming_snake_case() {
        let json = serde_json::to_string(&CareerAssessmentStatus::PendingVerification).unwrap();
        assert_eq!(json, "\"PENDING_VERIFICATION\"");
    }

    #[test]
    fn student_flattens_user_fields() {
        let value = serde_json::to_value(student(vec![])).unwrap();
        assert_eq!(value["id"], "student-9");
        assert_eq!(value["role"], "STUDENT");
        assert_eq!(value["career_assessment_status"], "NOT_STARTED");
    }
}
