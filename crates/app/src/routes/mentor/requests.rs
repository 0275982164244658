use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCheck, LdX};
use dioxus_free_icons::Icon;
use server::repo;
use shared_types::SessionRequest;
use shared_ui::{
    use_toast, Button, ButtonSize, ButtonVariant, Card, CardContent, CardHeader, CardTitle,
    ToastOptions,
};

use crate::format_helpers::format_date_human;
use crate::session::{use_session, use_store};

#[component]
pub fn SessionRequests(mentor_id: String) -> Element {
    let store = use_store();
    let pending: Vec<SessionRequest> = repo::session::pending_for_mentor(&store.read(), &mentor_id)
        .into_iter()
        .cloned()
        .collect();

    rsx! {
        Card {
            CardHeader { CardTitle { "Pending Session Requests" } }
            CardContent {
                if pending.is_empty() {
                    p { class: "muted", "No pending session requests." }
                } else {
                    ul { class: "plain-list",
                        for request in pending {
                            RequestRow { key: "{request.id}", request }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn RequestRow(request: SessionRequest) -> Element {
    let mut store = use_store();
    let session = use_session();
    let toast = use_toast();

    let student_name = repo::student::find_by_id(&store.read(), &request.student_id)
        .map(|s| s.name().to_string())
        .unwrap_or_else(|| "Unknown student".to_string());

    let approve_id = request.id.clone();
    let approve = move |_: MouseEvent| {
        let actor = session.user();
        match repo::session::approve(&mut store.write(), &actor, &approve_id) {
            Ok(_) => toast.success("Session approved.".to_string(), ToastOptions::new()),
            Err(e) => toast.error(e.message, ToastOptions::new()),
        }
    };
    let reject_id = request.id.clone();
    let reject = move |_: MouseEvent| {
        let actor = session.user();
        match repo::session::reject(&mut store.write(), &actor, &reject_id) {
            Ok(_) => toast.info("Session request declined.".to_string(), ToastOptions::new()),
            Err(e) => toast.error(e.message, ToastOptions::new()),
        }
    };

    rsx! {
        li { class: "plain-list-item",
            div {
                p { class: "plain-list-title", "{student_name}" }
                p { "Topic: {request.topic}" }
                p { class: "muted", "Requested {format_date_human(request.date)}" }
            }
            div { class: "row-actions",
                Button {
                    size: ButtonSize::Sm,
                    variant: ButtonVariant::Success,
                    title: "Approve request",
                    onclick: approve,
                    Icon::<LdCheck> { icon: LdCheck, width: 16, height: 16 }
                }
                Button {
                    size: ButtonSize::Sm,
                    variant: ButtonVariant::Destructive,
                    title: "Reject request",
                    onclick: reject,
                    Icon::<LdX> { icon: LdX, width: 16, height: 16 }
                }
            }
        }
    }
}
