use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[cfg(feature = "validation")]
use validator::Validate;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionStatus {
    Pending,
    Approved,
    Completed,
    Rejected,
}

impl SessionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SessionStatus::Pending => "Pending",
            SessionStatus::Approved => "Approved",
            SessionStatus::Completed => "Completed",
            SessionStatus::Rejected => "Rejected",
        }
    }
}

/// A student asking their mentor for a meeting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionRequest {
    pub id: String,
    pub student_id: String,
    pub mentor_id: String,
    pub topic: String,
    pub status: SessionStatus,
    pub date: NaiveDate,
}

/// Notes a mentor logs after meeting a mentee.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionReport {
    pub id: String,
    pub session_id: Option<String>,
    pub mentor_id: String,
    pub student_id: String,
    pub notes: String,
    pub action_items: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct SessionRequestDraft {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Please describe what you would like to discuss"))
    )]
    pub topic: String,
}

impl SessionRequestDraft {
    pub fn new(topic: &str) -> Self {
        Self {
            topic: topic.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct SessionReportDraft {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Session notes are required"))
    )]
    pub notes: String,
    pub action_items: String,
}

impl SessionReportDraft {
    pub fn new(notes: &str, action_items: &str) -> Self {
        Self {
            notes: notes.trim().to_string(),
            action_items: action_items.trim().to_string(),
        }
    }
}
