pub mod admin;
pub mod layout;
pub mod login;
pub mod mentor;
pub mod student;

use dioxus::prelude::*;
use shared_types::{AdvisorTask, AppError, AppErrorKind};
use shared_ui::{Alert, AlertKind};

/// Inline message for a failed save: the field error when there is one.
pub(crate) fn form_error(err: &AppError) -> String {
    err.first_field_error()
        .map(str::to_string)
        .unwrap_or_else(|| err.message.clone())
}

/// Log a failed advisor call. Returns the structured kind when the server
/// sent an `AppError`, so `Disabled` and `Upstream` show up in the logs.
pub(crate) fn log_advisor_failure(
    task: AdvisorTask,
    err: &ServerFnError,
) -> Option<AppErrorKind> {
    let raw = err.to_string();
    match AppError::from_server_error(&raw) {
        Some(app_err) => {
            tracing::warn!(
                ?task,
                kind = %app_err.kind,
                message = %app_err.message,
                "advisor call failed"
            );
            Some(app_err.kind)
        }
        None => {
            tracing::warn!(?task, error = %raw, "advisor call failed");
            None
        }
    }
}

/// Shown in place of generation controls when the advisor flag is off.
#[component]
pub(crate) fn AdvisorOffNotice() -> Element {
    rsx! {
        Alert { kind: AlertKind::Info,
            "The AI advisor is turned off, so generated content is unavailable."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_failures_keep_their_kind() {
        let payload = serde_json::to_string(&AppError::disabled("AI advisor is turned off"));
        let err = ServerFnError::new(payload.unwrap_or_default());
        assert_eq!(
            log_advisor_failure(AdvisorTask::AcademicAdvice, &err),
            Some(AppErrorKind::Disabled)
        );
    }

    #[test]
    fn plain_failures_have_no_kind() {
        let err = ServerFnError::new("connection reset");
        assert_eq!(log_advisor_failure(AdvisorTask::SessionPrepTips, &err), None);
    }

    #[test]
    fn notice_names_the_switched_off_advisor() {
        let mut dom = VirtualDom::new(AdvisorOffNotice);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("AI advisor is turned off"));
    }
}
