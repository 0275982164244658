//! AI advisor: prompt builders plus, on the server, the Gemini call.

pub mod prompts;

#[cfg(feature = "server")]
pub mod gemini;

#[cfg(feature = "server")]
use shared_types::{AdvisorTask, AppError};

/// Run one advisor task end to end. Fails with `Disabled` when the feature
/// flag is off or no API key is set, `Upstream` when Gemini fails.
#[cfg(feature = "server")]
#[tracing::instrument(skip(prompt))]
pub async fn run(task: AdvisorTask, prompt: String) -> Result<String, AppError> {
    if !crate::config::feature_flags().ai_advisor {
        return Err(AppError::disabled("The AI advisor is turned off"));
    }
    let client = gemini::GeminiClient::from_env(crate::config::advisor_config())?;
    let result = client.generate(&prompt).await;
    if let Err(e) = &result {
        tracing::warn!(error = %e, "advisor task failed");
    }
    result
}
