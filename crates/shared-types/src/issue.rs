use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[cfg(feature = "validation")]
use validator::Validate;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueStatus {
    Open,
    Resolved,
}

/// A student's complaint about a recorded mark.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IssueReport {
    pub id: String,
    pub student_id: String,
    pub description: String,
    pub status: IssueStatus,
    pub date: NaiveDate,
}

impl IssueReport {
    pub fn is_open(&self) -> bool {
        self.status == IssueStatus::Open
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct IssueReportDraft {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Please describe the issue with your marks"))
    )]
    pub description: String,
}

impl IssueReportDraft {
    pub fn new(description: &str) -> Self {
        Self {
            description: description.trim().to_string(),
        }
    }
}
