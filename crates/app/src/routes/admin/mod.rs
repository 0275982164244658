mod activity;
mod analytics;
mod approval;
mod feedback;
mod home;
mod users;

use dioxus::prelude::*;
use server::repo;
use shared_types::{AdvisorTask, FeatureFlags, Feedback};
use shared_ui::SidebarMenuButton;

use crate::nav::AdminView;
use crate::routes::layout::DashboardShell;
use crate::routes::log_advisor_failure;
use crate::session::use_store;

use activity::ActivityLog;
use analytics::Analytics;
use approval::MentorApproval;
use feedback::FeedbackReview;
use home::AdminHome;
use users::UserManagement;

#[component]
pub fn AdminDashboard() -> Element {
    let store = use_store();
    let flags: FeatureFlags = use_context();
    let ai_enabled = flags.ai_advisor;
    let mut view = use_signal(AdminView::default);

    // Feedback filter and its generated analysis survive view switches.
    let mut feedback_mentor = use_signal(|| Option::<String>::None);
    let mut analysis = use_signal(|| Option::<String>::None);
    let mut analyzing = use_signal(|| false);

    let select_mentor = move |mentor_id: Option<String>| {
        if feedback_mentor() != mentor_id {
            feedback_mentor.set(mentor_id);
            analysis.set(None);
        }
    };

    let run_analysis = move |_: ()| {
        if !ai_enabled || analyzing() {
            return;
        }
        let selected = feedback_mentor();
        let (entries, mentor_name) = {
            let data = store.read();
            let entries: Vec<_> = repo::feedback::recent(&data, selected.as_deref())
                .into_iter()
                .map(Feedback::anonymized)
                .collect();
            let name = selected
                .as_deref()
                .and_then(|id| repo::mentor::find_by_id(&data, id))
                .map(|m| m.name().to_string());
            (entries, name)
        };
        analyzing.set(true);
        spawn(async move {
            let result = server::api::analyze_feedback(entries, mentor_name).await;
            if let Err(e) = &result {
                log_advisor_failure(AdvisorTask::FeedbackAnalysis, e);
            }
            // Drop the result if the admin switched mentors meanwhile.
            if feedback_mentor() == selected {
                analysis.set(Some(AdvisorTask::FeedbackAnalysis.text_or_fallback(result)));
            }
            analyzing.set(false);
        });
    };

    let current = view();
    let content = match current {
        AdminView::Dashboard => rsx! {
            AdminHome { on_navigate: move |next: AdminView| view.set(next) }
        },
        AdminView::UserManagement => rsx! { UserManagement {} },
        AdminView::MentorApproval => rsx! { MentorApproval {} },
        AdminView::Feedback => rsx! {
            FeedbackReview {
                selected: feedback_mentor(),
                analysis: analysis(),
                analyzing: analyzing(),
                ai_enabled,
                on_select: select_mentor,
                on_analyze: run_analysis,
            }
        },
        AdminView::Analytics => rsx! { Analytics {} },
        AdminView::ActivityLog => rsx! { ActivityLog {} },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./admin.css") }

        DashboardShell {
            title: current.label().to_string(),
            nav: rsx! {
                for item in AdminView::ALL {
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
    }
}
