use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[cfg(feature = "validation")]
use validator::Validate;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// A student's rating of a mentor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Feedback {
    pub id: String,
    pub mentor_id: String,
    pub student_id: String,
    pub rating: u8,
    pub comment: String,
    pub date: NaiveDate,
}

impl Feedback {
    /// Strip the author so the record can be shown to the mentor.
    pub fn anonymized(&self) -> AnonymousFeedback {
        AnonymousFeedback {
            id: self.id.clone(),
            mentor_id: self.mentor_id.clone(),
            rating: self.rating,
            comment: self.comment.clone(),
            date: self.date,
        }
    }
}

/// Feedback as mentors see it: no student id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnonymousFeedback {
    pub id: String,
    pub mentor_id: String,
    pub rating: u8,
    pub comment: String,
    pub date: NaiveDate,
}

/// Render a rating as filled and empty stars, e.g. `★★★★☆`.
pub fn star_string(rating: u8) -> String {
    let filled = rating.min(MAX_RATING) as usize;
    let empty = MAX_RATING as usize - filled;
    format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
}

/// Form input for the "Give Anonymous Feedback" dialog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct FeedbackDraft {
    #[cfg_attr(
        feature = "validation",
        validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))
    )]
    pub rating: u8,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Please add a comment"))
    )]
    pub comment: String,
}

impl FeedbackDraft {
    pub fn new(rating: u8, comment: &str) -> Self {
        Self {
            rating,
            comment: comment.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_fill_to_rating() {
        assert_eq!(star_string(4), "★★★★☆");
        assert_eq!(star_string(5), "★★★★★");
        assert_eq!(star_string(9), "★★★★★");
    }

    #[test]
    fn anonymized_drops_student() {
        let fb = Feedback {
            id: "f-1".into(),
            mentor_id: "mentor-1".into(),
            student_id: "student-1".into(),
            rating: 5,
            comment: "Great".into(),
            date: NaiveDate::from_ymd_opt(2023, 10, 28).unwrap(),
        };
        let value = serde_json::to_value(fb.anonymized()).unwrap();
        assert!(value.get("student_id").is_none());
        assert_eq!(value["rating"], 5);
    }

    #[test]
    fn draft_trims_comment() {
        assert_eq!(FeedbackDraft::new(3, "  ok  ").comment, "ok");
    }
}
