use serde::{Deserialize, Serialize};

use crate::User;

/// Whether an admin has accepted a mentor's application.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MentorStatus {
    Pending,
    Approved,
    Rejected,
}

impl MentorStatus {
    pub fn label(&self) -> &'static str {
        match self {
            MentorStatus::Pending => "Pending",
            MentorStatus::Approved => "Approved",
            MentorStatus::Rejected => "Rejected",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Mentor {
    #[serde(flatten)]
    pub user: User,
    pub expertise: Vec<String>,
    pub mentee_ids: Vec<String>,
    pub status: MentorStatus,
    pub bio: String,
}

impl Mentor {
    pub fn id(&self) -> &str {
        &self.user.id
    }

    pub fn name(&self) -> &str {
        &self.user.name
    }

    pub fn is_approved(&self) -> bool {
        self.status == MentorStatus::Approved
    }

    pub fn has_expertise(&self, area: &str) -> bool {
        self.expertise.iter().any(|e| e.eq_ignore_ascii_case(area))
    }
}
