use serde::{Deserialize, Serialize};

pub const PREP_TIPS_FALLBACK: &str = "Failed to generate preparation tips.";
pub const ACADEMIC_ADVICE_FALLBACK: &str = "An error occurred. Please try again.";
pub const FEEDBACK_ANALYSIS_FALLBACK: &str = "Failed to analyze feedback. Please try again.";
pub const CAREER_INSIGHTS_FALLBACK: &str =
    "Failed to generate career insights. Please try again later.";

/// The four things the AI advisor is asked to write.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AdvisorTask {
    SessionPrepTips,
    AcademicAdvice,
    FeedbackAnalysis,
    CareerInsights,
}

impl AdvisorTask {
    /// Static text shown in place of a failed generation.
    pub fn fallback(&self) -> &'static str {
        match self {
            AdvisorTask::SessionPrepTips => PREP_TIPS_FALLBACK,
            AdvisorTask::AcademicAdvice => ACADEMIC_ADVICE_FALLBACK,
            AdvisorTask::FeedbackAnalysis => FEEDBACK_ANALYSIS_FALLBACK,
            AdvisorTask::CareerInsights => CAREER_INSIGHTS_FALLBACK,
        }
    }

    /// Collapse a generation result into displayable text.
    pub fn text_or_fallback<E>(&self, result: Result<String, E>) -> String {
        match result {
            Ok(text) if !text.trim().is_empty() => text,
            _ => self.fallback().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ChatSender {
    User,
    Ai,
}

/// One bubble in the AI advisor conversation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub sender: ChatSender,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: ChatSender::User,
            text: text.into(),
        }
    }

    pub fn ai(text: impl Into<String>) -> Self {
        Self {
            sender: ChatSender::Ai,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failures_map_to_fixed_strings() {
        let failed: Result<String, ()> = Err(());
        assert_eq!(
            AdvisorTask::SessionPrepTips.text_or_fallback(failed),
            "Failed to generate preparation tips."
        );
        let failed: Result<String, ()> = Err(());
        assert_eq!(
            AdvisorTask::AcademicAdvice.text_or_fallback(failed),
            "An error occurred. Please try again."
        );
    }

    #[test]
    fn blank_output_counts_as_failure() {
        let blank: Result<String, ()> = Ok("  \n".into());
        assert_eq!(
            AdvisorTask::FeedbackAnalysis.text_or_fallback(blank),
            FEEDBACK_ANALYSIS_FALLBACK
        );
    }

    #[test]
    fn success_passes_through() {
        let ok: Result<String, ()> = Ok("Study graphs.".into());
        assert_eq!(AdvisorTask::CareerInsights.text_or_fallback(ok), "Study graphs.");
    }
}
