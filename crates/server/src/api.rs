//! Server functions. Data-bearing arguments come from the browser store;
//! the server only holds the Gemini credential.

use dioxus::prelude::*;
use shared_types::{AnonymousFeedback, CareerAnswers, FeatureFlags, Student};

#[cfg(feature = "server")]
use crate::advisor::{self, prompts};

#[cfg(feature = "server")]
use crate::error_convert::AppErrorExt;

#[cfg(feature = "server")]
use shared_types::AdvisorTask;

/// Get the current feature flags. Flags are not sensitive.
#[server]
pub async fn get_feature_flags() -> Result<FeatureFlags, ServerFnError> {
    Ok(crate::config::feature_flags().clone())
}

/// Mentor-facing preparation plan for one mentee.
#[server]
pub async fn get_session_prep_tips(student: Student) -> Result<String, ServerFnError> {
    tracing::debug!(student_id = %student.id(), "prep tips requested");
    let prompt = prompts::session_prep_tips(&student);
    advisor::run(AdvisorTask::SessionPrepTips, prompt)
        .await
        .map_err(|e| e.into_server_fn_error())
}

/// Answer a student's chat question.
#[server]
pub async fn get_academic_advice(question: String) -> Result<String, ServerFnError> {
    if question.trim().is_empty() {
        return Err(shared_types::AppError::bad_request("Ask a question first").into_server_fn_error());
    }
    advisor::run(AdvisorTask::AcademicAdvice, prompts::academic_advice(&question))
        .await
        .map_err(|e| e.into_server_fn_error())
}

/// Summarise anonymous feedback for one mentor or the whole programme.
#[server]
pub async fn analyze_feedback(
    feedback: Vec<AnonymousFeedback>,
    mentor_name: Option<String>,
) -> Result<String, ServerFnError> {
    tracing::debug!(entries = feedback.len(), "feedback analysis requested");
    let prompt = prompts::feedback_analysis(&feedback, mentor_name.as_deref());
    advisor::run(AdvisorTask::FeedbackAnalysis, prompt)
        .await
        .map_err(|e| e.into_server_fn_error())
}

/// Generate a career report. The configured verification delay is applied
/// whether or not generation succeeds.
#[server]
pub async fn get_career_insights(answers: CareerAnswers) -> Result<String, ServerFnError> {
    let questions = crate::fixtures::career_questions();
    if !shared_types::all_answered(&questions, &answers) {
        return Err(shared_types::AppError::bad_request("Answer every question before submitting")
            .into_server_fn_error());
    }
    let result = advisor::run(
        AdvisorTask::CareerInsights,
        prompts::career_insights(&questions, &answers),
    )
    .await;

    let delay = crate::config::advisor_config().verification_delay_ms;
    tokio::time::sleep(std::time::Duration::from_millis(delay)).await;
    result.map_err(|e| e.into_server_fn_error())
}
