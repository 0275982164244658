mod advisor;
mod career;
mod home;
mod modals;
mod performance;

use dioxus::prelude::*;
use server::repo;
use shared_types::{AdvisorTask, CareerAnswers, ChatMessage, FeatureFlags};
use shared_ui::SidebarMenuButton;

use crate::nav::StudentView;
use crate::routes::layout::DashboardShell;
use crate::routes::log_advisor_failure;
use crate::session::{use_session, use_store};

use advisor::AdvisorChat;
use career::CareerPath;
use home::StudentHome;
use modals::{FeedbackModal, IssueModal, SessionRequestModal};
use performance::Performance;

/// Which student modal is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StudentModal {
    Feedback,
    SessionRequest,
    Issue,
}

#[component]
pub fn StudentDashboard() -> Element {
    let session = use_session();
    let mut store = use_store();
    let flags: FeatureFlags = use_context();
    let ai_enabled = flags.ai_advisor;
    let student_id = session.user().id;

    let mut view = use_signal(StudentView::default);
    let mut modal = use_signal(|| Option::<StudentModal>::None);

    // Chat history and pending calls live here so switching views keeps them.
    let mut messages = use_signal(Vec::<ChatMessage>::new);
    let mut chat_loading = use_signal(|| false);

    let send_question = move |question: String| {
        if !ai_enabled || question.trim().is_empty() || chat_loading() {
            return;
        }
        messages.write().push(ChatMessage::user(question.clone()));
        chat_loading.set(true);
        spawn(async move {
            let result = server::api::get_academic_advice(question).await;
            if let Err(e) = &result {
                log_advisor_failure(AdvisorTask::AcademicAdvice, e);
            }
            let reply = AdvisorTask::AcademicAdvice.text_or_fallback(result);
            messages.write().push(ChatMessage::ai(reply));
            chat_loading.set(false);
        });
    };

    let career_student_id = student_id.clone();
    let submit_assessment = move |answers: CareerAnswers| {
        let id = career_student_id.clone();
        if !ai_enabled {
            return;
        }
        if let Err(e) = repo::student::begin_assessment(&mut store.write(), &id) {
            tracing::warn!(error = %e, "could not start assessment");
            return;
        }
        spawn(async move {
            let result = server::api::get_career_insights(answers).await;
            if let Err(e) = &result {
                log_advisor_failure(AdvisorTask::CareerInsights, e);
            }
            let report = AdvisorTask::CareerInsights.text_or_fallback(result);
            if let Err(e) = repo::student::submit_career_report(&mut store.write(), &id, report) {
                tracing::warn!(error = %e, "could not store career report");
            }
        });
    };

    let current = view();
    let content = match current {
        StudentView::Dashboard => rsx! {
            StudentHome {
                student_id: student_id.clone(),
                on_request_session: move |_| modal.set(Some(StudentModal::SessionRequest)),
                on_give_feedback: move |_| modal.set(Some(StudentModal::Feedback)),
            }
        },
        StudentView::AiAdvisor => rsx! {
            AdvisorChat {
                messages: messages(),
                loading: chat_loading(),
                ai_enabled,
                on_send: send_question,
            }
        },
        StudentView::Performance => rsx! {
            Performance {
                student_id: student_id.clone(),
                on_report_issue: move |_| modal.set(Some(StudentModal::Issue)),
            }
        },
        StudentView::CareerPath => rsx! {
            CareerPath {
                student_id: student_id.clone(),
                ai_enabled,
                on_submit: submit_assessment,
            }
        },
    };

    let close = move |_: ()| modal.set(None);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./student.css") }

        DashboardShell {
            title: current.label().to_string(),
            nav: rsx! {
                for item in StudentView::ALL {
                    SidebarMenuButton {
                        key: "{item.label()}",
                        active: item == current,
                        onclick: move |_| view.set(item),
                        {item.icon()}
                        "{item.label()}"
                    }
                }
            },
            {content}
        }

        FeedbackModal {
            open: modal() == Some(StudentModal::Feedback),
            student_id: student_id.clone(),
            on_close: close,
        }
        SessionRequestModal {
            open: modal() == Some(StudentModal::SessionRequest),
            student_id: student_id.clone(),
            on_close: close,
        }
        IssueModal {
            open: modal() == Some(StudentModal::Issue),
            student_id: student_id.clone(),
            on_close: close,
        }
    }
}
