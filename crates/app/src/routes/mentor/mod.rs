mod home;
mod mentees;
mod requests;
mod upload;

use std::collections::HashMap;

use dioxus::prelude::*;
use server::repo;
use shared_types::{AdvisorTask, FeatureFlags};
use shared_ui::SidebarMenuButton;

use crate::nav::MentorView;
use crate::routes::layout::DashboardShell;
use crate::routes::log_advisor_failure;
use crate::session::{use_session, use_store};

use home::MentorHome;
use mentees::{MenteeList, MenteeProfile, PrepTipsButton};
use requests::SessionRequests;
use upload::UploadMarks;

#[component]
pub fn MentorDashboard() -> Element {
    let session = use_session();
    let store = use_store();
    let flags: FeatureFlags = use_context();
    let ai_enabled = flags.ai_advisor;
    let mentor_id = session.user().id;

    let mut view = use_signal(MentorView::default);

    // Generated prep tips per student, kept across view switches.
    let mut prep_tips = use_signal(HashMap::<String, String>::new);
    let mut prep_loading = use_signal(|| Option::<String>::None);

    let request_prep_tips = move |student_id: String| {
        if !ai_enabled || prep_loading().is_some() {
            return;
        }
        let Some(student) = repo::student::find_by_id(&store.read(), &student_id).cloned() else {
            return;
        };
        prep_loading.set(Some(student_id.clone()));
        spawn(async move {
            let result = server::api::get_session_prep_tips(student).await;
            if let Err(e) = &result {
                log_advisor_failure(AdvisorTask::SessionPrepTips, e);
            }
            let tips = AdvisorTask::SessionPrepTips.text_or_fallback(result);
            prep_tips.write().insert(student_id, tips);
            prep_loading.set(None);
        });
    };

    let current = view();
    let content = match current.clone() {
        MentorView::Dashboard => rsx! {
            MentorHome {
                mentor_id: mentor_id.clone(),
                on_navigate: move |next: MentorView| view.set(next),
            }
        },
        MentorView::Mentees => rsx! {
            MenteeList {
                mentor_id: mentor_id.clone(),
                on_select: move |student_id: String| view.set(MentorView::MenteeProfile { student_id }),
            }
        },
        MentorView::MenteeProfile { student_id } => rsx! {
            MenteeProfile {
                key: "{student_id}",
                tips: prep_tips.read().get(&student_id).cloned(),
                tips_button: PrepTipsButton::for_student(
                    prep_loading().as_deref(),
                    &student_id,
                    ai_enabled,
                ),
                ai_enabled,
                on_prep_tips: request_prep_tips,
                on_back: move |_| view.set(MentorView::Mentees),
                student_id: student_id.clone(),
            }
        },
        MentorView::SessionRequests => rsx! {
            SessionRequests { mentor_id: mentor_id.clone() }
        },
        MentorView::UploadMarks => rsx! {
            UploadMarks {}
        },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./mentor.css") }

        DashboardShell {
            title: current.label().to_string(),
            nav: rsx! {
                for item in MentorView::NAV {
                    SidebarMenuButton {
                        key: "{item.label()}",
                        active: current.highlights(&item),
                        onclick: {
                            let target = item.clone();
                            move |_| view.set(target.clone())
                        },
                        {item.icon()}
                        "{item.label()}"
                    }
                }
            },
            {content}
        }
    }
}
