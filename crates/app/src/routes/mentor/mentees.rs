use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdFileText;
use dioxus_free_icons::Icon;
use server::repo;
use shared_types::{CareerAssessmentStatus, IssueReport, SessionReportDraft, Student};
use shared_ui::{
    use_toast, Alert, AlertKind, Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card,
    CardContent, CardHeader, CardTitle, Modal, RichText, Textarea, TextSkeleton, ToastOptions,
    UserAvatar,
};

use crate::format_helpers::{format_date_human, join_or_none};
use crate::routes::{form_error, AdvisorOffNotice};
use crate::session::{use_session, use_store};

#[component]
pub fn MenteeList(mentor_id: String, on_select: EventHandler<String>) -> Element {
    let store = use_store();
    let mentees: Vec<Student> = repo::student::mentees_of(&store.read(), &mentor_id)
        .into_iter()
        .cloned()
        .collect();

    rsx! {
        if mentees.is_empty() {
            p { class: "muted", "You have no mentees assigned yet." }
        } else {
            div { class: "grid-3",
                for student in mentees {
                    MenteeCard { key: "{student.id()}", student, on_select }
                }
            }
        }
    }
}

#[component]
fn MenteeCard(student: Student, on_select: EventHandler<String>) -> Element {
    let id = student.id().to_string();
    rsx! {
        Card { class: "mentee-card", onclick: move |_| on_select.call(id.clone()),
            CardContent {
                div { class: "mentee-card-body",
                    UserAvatar {
                        src: student.user.avatar.clone(),
                        initials: student.user.initials(),
                    }
                    div {
                        p { class: "plain-list-title", "{student.name()}" }
                        p { class: "muted", "{student.major}" }
                    }
                }
                span { class: "mentee-card-link", "View Profile" }
            }
        }
    }
}

/// State of the prep-tips button on one mentee's profile. Only one
/// generation runs at a time, so every profile waits for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrepTipsButton {
    pub loading: bool,
    pub disabled: bool,
}

impl PrepTipsButton {
    pub fn for_student(in_flight: Option<&str>, student_id: &str, ai_enabled: bool) -> Self {
        Self {
            loading: in_flight == Some(student_id),
            disabled: !ai_enabled || in_flight.is_some(),
        }
    }
}

/// One mentee in detail, with prep tips, session notes, career report review
/// and issue handling.
#[component]
pub fn MenteeProfile(
    student_id: String,
    tips: Option<String>,
    tips_button: PrepTipsButton,
    ai_enabled: bool,
    on_prep_tips: EventHandler<String>,
    on_back: EventHandler<()>,
) -> Element {
    let store = use_store();
    let mut log_open = use_signal(|| false);
    let mut review_open = use_signal(|| false);

    let Some(student) = repo::student::find_by_id(&store.read(), &student_id).cloned() else {
        return rsx! {
            p { class: "muted", "This student is no longer on record." }
            Button { variant: ButtonVariant::Secondary, onclick: move |_| on_back.call(()), "Back to Mentees" }
        };
    };
    let issues: Vec<IssueReport> = repo::issue::for_student(&store.read(), &student_id)
        .into_iter()
        .rev()
        .cloned()
        .collect();
    let awaiting_review =
        student.career_assessment_status == CareerAssessmentStatus::PendingVerification;
    let tips_target = student_id.clone();
    let tips_loading = tips_button.loading;

    rsx! {
        div { class: "profile-header",
            h2 { "Profile: {student.name()}" }
            Button {
                variant: ButtonVariant::Secondary,
                size: ButtonSize::Sm,
                onclick: move |_| on_back.call(()),
                "Back to Mentees"
            }
        }

        if awaiting_review {
            Alert { kind: AlertKind::Warning,
                div { class: "verify-banner",
                    div {
                        strong { "Action Required: Verify Career Report" }
                        p {
                            "{student.name()} has completed a career assessment. Please review the AI-generated report before it is released."
                        }
                    }
                    Button {
                        size: ButtonSize::Sm,
                        onclick: move |_| review_open.set(true),
                        Icon::<LdFileText> { icon: LdFileText, width: 16, height: 16 }
                        "Review Report"
                    }
                }
            }
        }

        div { class: "grid-2",
            Card {
                CardHeader { CardTitle { "Student Details" } }
                CardContent {
                    dl { class: "detail-list",
                        dt { "Major" }
                        dd { "{student.major}" }
                        dt { "Strengths" }
                        dd { "{join_or_none(&student.strengths)}" }
                        dt { "Weaknesses" }
                        dd { "{join_or_none(&student.weaknesses)}" }
                    }
                    div { class: "row-actions",
                        Button {
                            loading: tips_loading,
                            disabled: tips_button.disabled,
                            onclick: move |_| on_prep_tips.call(tips_target.clone()),
                            if tips_loading { "Generating..." } else { "Get AI Session Prep Tips" }
                        }
                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: move |_| log_open.set(true),
                            "Log Session Report"
                        }
                    }
                }
            }
            Card {
                CardHeader { CardTitle { "AI Preparation Tips" } }
                CardContent {
                    if !ai_enabled {
                        AdvisorOffNotice {}
                    } else if tips_loading {
                        TextSkeleton { lines: 4 }
                    } else if let Some(text) = tips {
                        RichText { text }
                    } else {
                        p { class: "muted", "Ask the advisor for talking points before your next session." }
                    }
                }
            }
        }

        Card {
            CardHeader { CardTitle { "Student Issue Reports" } }
            CardContent {
                if issues.is_empty() {
                    p { class: "muted", "No issues reported by this student." }
                } else {
                    ul { class: "plain-list",
                        for issue in issues {
                            IssueRow { key: "{issue.id}", issue }
                        }
                    }
                }
            }
        }

        LogSessionModal {
            open: log_open(),
            student_id: student_id.clone(),
            student_name: student.name().to_string(),
            on_close: move |_| log_open.set(false),
        }
        CareerReviewModal {
            open: review_open(),
            student: student.clone(),
            on_close: move |_| review_open.set(false),
        }
    }
}

#[component]
fn IssueRow(issue: IssueReport) -> Element {
    let mut store = use_store();
    let session = use_session();
    let toast = use_toast();
    let id = issue.id.clone();

    let resolve = move |_: MouseEvent| {
        let actor = session.user();
        match repo::issue::resolve(&mut store.write(), &actor, &id) {
            Ok(_) => toast.success("Issue marked as resolved.".to_string(), ToastOptions::new()),
            Err(e) => toast.error(e.message, ToastOptions::new()),
        }
    };

    rsx! {
        li { class: "plain-list-item",
            div {
                p { "{issue.description}" }
                p { class: "muted", "Reported {format_date_human(issue.date)}" }
            }
            if issue.is_open() {
                Button { size: ButtonSize::Sm, variant: ButtonVariant::Success, onclick: resolve, "Mark as Resolved" }
            } else {
                Badge { variant: BadgeVariant::Success, "Resolved" }
            }
        }
    }
}

#[component]
fn LogSessionModal(
    open: bool,
    student_id: String,
    student_name: String,
    on_close: EventHandler<()>,
) -> Element {
    let mut store = use_store();
    let session = use_session();
    let toast = use_toast();
    let mut notes = use_signal(String::new);
    let mut action_items = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    let save = move |_: MouseEvent| {
        let actor = session.user();
        let draft = SessionReportDraft::new(&notes.read(), &action_items.read());
        match repo::session_report::create(&mut store.write(), &actor, &student_id, draft) {
            Ok(_) => {
                notes.set(String::new());
                action_items.set(String::new());
                error.set(None);
                toast.success("Session report saved.".to_string(), ToastOptions::new());
                on_close.call(());
            }
            Err(e) => error.set(Some(form_error(&e))),
        }
    };

    rsx! {
        Modal {
            open,
            on_close,
            title: "Log Session with {student_name}",
            div { class: "field-stack",
                Textarea {
                    label: "Session Summary",
                    value: notes(),
                    placeholder: "What did you cover?",
                    rows: 5,
                    error: error(),
                    on_input: move |evt: FormEvent| notes.set(evt.value()),
                }
                Textarea {
                    label: "Action Items",
                    value: action_items(),
                    placeholder: "Next steps for the student",
                    rows: 3,
                    on_input: move |evt: FormEvent| action_items.set(evt.value()),
                }
                Button { onclick: save, "Save Report" }
            }
        }
    }
}

/// Mentor reads the generated report and releases it to the student.
#[component]
fn CareerReviewModal(open: bool, student: Student, on_close: EventHandler<()>) -> Element {
    let mut store = use_store();
    let session = use_session();
    let toast = use_toast();
    let id = student.id().to_string();
    let name = student.name().to_string();

    let approve = move |_: MouseEvent| {
        let actor = session.user();
        match repo::student::verify_career_report(&mut store.write(), &actor, &id) {
            Ok(_) => {
                toast.success(
                    format!("The career report is now visible to {name}."),
                    ToastOptions::new(),
                );
                on_close.call(());
            }
            Err(e) => toast.error(e.message, ToastOptions::new()),
        }
    };

    rsx! {
        Modal {
            open,
            on_close,
            title: "Career Report: {student.name()}",
            description: "Check the report below. Approving releases it to the student.",
            div { class: "field-stack",
                div { class: "report-preview",
                    RichText { text: student.career_report.clone().unwrap_or_default() }
                }
                div { class: "row-actions",
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    Button { onclick: approve, "Approve & Release" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_mentee_waits_while_tips_are_generating() {
        let busy = PrepTipsButton::for_student(Some("student-1"), "student-2", true);
        assert_eq!(busy, PrepTipsButton { loading: false, disabled: true });

        let own = PrepTipsButton::for_student(Some("student-1"), "student-1", true);
        assert!(own.loading);
    }

    #[test]
    fn idle_button_follows_the_advisor_flag() {
        let on = PrepTipsButton::for_student(None, "student-1", true);
        assert_eq!(on, PrepTipsButton { loading: false, disabled: false });
        assert!(PrepTipsButton::for_student(None, "student-1", false).disabled);
    }
}
