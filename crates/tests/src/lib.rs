//! Cross-repo workflow tests against a freshly seeded store.

#[cfg(test)]
mod common;

#[cfg(test)]
mod session_workflow_tests;

#[cfg(test)]
mod mentor_approval_tests;

#[cfg(test)]
mod career_flow_tests;

#[cfg(test)]
mod marks_upload_tests;

#[cfg(test)]
mod issue_workflow_tests;

#[cfg(test)]
mod user_delete_tests;

#[cfg(test)]
mod advisor_prompt_tests;
