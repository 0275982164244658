use dioxus::prelude::*;
use server::repo;
use shared_types::SessionStatus;
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card, CardContent, CardHeader,
    CardTitle, StatCard, UserAvatar,
};

use crate::format_helpers::{format_date_human, format_rating};
use crate::session::use_store;

pub(crate) fn session_badge(status: SessionStatus) -> BadgeVariant {
    match status {
        SessionStatus::Pending => BadgeVariant::Warning,
        SessionStatus::Approved => BadgeVariant::Info,
        SessionStatus::Completed => BadgeVariant::Success,
        SessionStatus::Rejected => BadgeVariant::Danger,
    }
}

/// Welcome card, headline numbers, and the student's own requests.
#[component]
pub fn StudentHome(
    student_id: String,
    on_request_session: EventHandler<()>,
    on_give_feedback: EventHandler<()>,
) -> Element {
    let store = use_store();
    let data = store.read();
    let Some(student) = repo::student::find_by_id(&data, &student_id) else {
        return rsx! { p { class: "muted", "Student record not found." } };
    };

    let mentor_name = student
        .assigned_mentor_id
        .as_deref()
        .and_then(|id| repo::mentor::find_by_id(&data, id))
        .map(|m| m.name().to_string());
    let has_mentor = mentor_name.is_some();
    let average = student.average_score();
    let open_issues = repo::issue::open_count(&data, &student_id);
    let requests: Vec<_> = repo::session::for_student(&data, &student_id)
        .into_iter()
        .rev()
        .cloned()
        .collect();
    let reports: Vec<_> = repo::session_report::for_student(&data, &student_id)
        .into_iter()
        .rev()
        .cloned()
        .collect();

    rsx! {
        Card {
            CardContent {
                div { class: "welcome",
                    UserAvatar {
                        src: student.user.avatar.clone(),
                        initials: student.user.initials(),
                        size: shared_ui::AvatarSize::Lg,
                    }
                    div { class: "welcome-text",
                        h2 { "Welcome back, {student.user.first_name()}!" }
                        p { class: "muted", "Ready to excel in your studies today?" }
                        if let Some(name) = mentor_name {
                            p { class: "welcome-mentor",
                                "Your mentor is "
                                strong { "{name}" }
                                "."
                            }
                        } else {
                            p { class: "welcome-mentor muted", "No mentor has been assigned yet." }
                        }
                    }
                    div { class: "welcome-actions",
                        Button {
                            size: ButtonSize::Sm,
                            disabled: !has_mentor,
                            onclick: move |_| on_request_session.call(()),
                            "Request Session"
                        }
                        Button {
                            size: ButtonSize::Sm,
                            variant: ButtonVariant::Secondary,
                            disabled: !has_mentor,
                            onclick: move |_| on_give_feedback.call(()),
                            "Give Feedback"
                        }
                    }
                }
            }
        }

        div { class: "grid-3",
            StatCard {
                label: "Average Score",
                value: format_rating(average),
                hint: Some(format!("{} marks recorded", student.performance.len())),
            }
            StatCard {
                label: "Major",
                value: student.major.clone(),
            }
            StatCard {
                label: "Open Issue Reports",
                value: open_issues.to_string(),
            }
        }

        div { class: "grid-2",
            Card {
                CardHeader { CardTitle { "My Session Requests" } }
                CardContent {
                    if requests.is_empty() {
                        p { class: "muted", "You have not requested a session yet." }
                    } else {
                        ul { class: "plain-list",
                            for request in requests {
                                li { key: "{request.id}", class: "plain-list-item",
                                    div {
                                        p { class: "plain-list-title", "{request.topic}" }
                                        p { class: "muted", "{format_date_human(request.date)}" }
                                    }
                                    Badge { variant: session_badge(request.status), "{request.status.label()}" }
                                }
                            }
                        }
                    }
                }
            }
            Card {
                CardHeader { CardTitle { "Session Notes" } }
                CardContent {
                    if reports.is_empty() {
                        p { class: "muted", "Notes from your mentor will appear here after a session." }
                    } else {
                        ul { class: "plain-list",
                            for report in reports {
                                li { key: "{report.id}", class: "plain-list-stack",
                                    p { class: "muted", "{format_date_human(report.date)}" }
                                    p { "{report.notes}" }
                                    if !report.action_items.trim().is_empty() {
                                        p {
                                            strong { "Action items: " }
                                            "{report.action_items}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
