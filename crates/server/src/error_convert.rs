use dioxus::prelude::ServerFnError;
use shared_types::AppError;

/// Convert an AppError into a ServerFnError by serializing as JSON.
pub fn app_error_to_server_fn_error(err: AppError) -> ServerFnError {
    let json = serde_json::to_string(&err).unwrap_or_else(|_| err.message.clone());
    ServerFnError::new(json)
}

/// Extension trait providing `.into_server_fn_error()` on AppError.
pub trait AppErrorExt {
    fn into_server_fn_error(self) -> ServerFnError;
}

impl AppErrorExt for AppError {
    fn into_server_fn_error(self) -> ServerFnError {
        app_error_to_server_fn_error(self)
    }
}

/// Trait for validating form drafts before they reach the store.
pub trait ValidateRequest {
    fn validate_request(&self) -> Result<(), AppError>;
}

impl<T: validator::Validate> ValidateRequest for T {
    fn validate_request(&self) -> Result<(), AppError> {
        self.validate().map_err(AppError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{AppErrorKind, FeedbackDraft, SessionRequestDraft};

    #[test]
    fn server_fn_error_carries_structured_payload() {
        let err = AppError::upstream("Gemini returned 503").into_server_fn_error();
        let parsed = AppError::from_server_error(&err.to_string()).unwrap();
        assert_eq!(parsed.kind, AppErrorKind::Upstream);
        assert_eq!(parsed.message, "Gemini returned 503");
    }

    #[test]
    fn blank_topic_fails_validation() {
        let err = SessionRequestDraft::new("   ").validate_request().unwrap_err();
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert!(err.field_errors.contains_key("topic"));
    }

    #[test]
    fn rating_out_of_range_fails_validation() {
        let err = FeedbackDraft::new(6, "fine").validate_request().unwrap_err();
        assert_eq!(
            err.field_errors.get("rating").map(String::as_str),
            Some("Rating must be between 1 and 5")
        );
        assert!(FeedbackDraft::new(5, "fine").validate_request().is_ok());
    }
}
