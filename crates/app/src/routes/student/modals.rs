use dioxus::prelude::*;
use server::repo;
use shared_types::{FeedbackDraft, IssueReportDraft, SessionRequestDraft};
use shared_ui::{use_toast, Button, Modal, ScaleSlider, StarDisplay, Textarea, ToastOptions};

use crate::routes::form_error;
use crate::session::use_store;

const DEFAULT_RATING: u8 = 4;

#[component]
pub fn FeedbackModal(open: bool, student_id: String, on_close: EventHandler<()>) -> Element {
    let mut store = use_store();
    let toast = use_toast();
    let mut rating = use_signal(|| DEFAULT_RATING);
    let mut comment = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    let mentor_name = {
        let data = store.read();
        repo::student::find_by_id(&data, &student_id)
            .and_then(|s| s.assigned_mentor_id.as_deref())
            .and_then(|id| repo::mentor::find_by_id(&data, id))
            .map(|m| m.name().to_string())
            .unwrap_or_else(|| "your mentor".to_string())
    };

    let submit = move |_: MouseEvent| {
        let draft = FeedbackDraft::new(rating(), &comment.read());
        let result = repo::feedback::create(&mut store.write(), &student_id, draft);
        match result {
            Ok(_) => {
                rating.set(DEFAULT_RATING);
                comment.set(String::new());
                error.set(None);
                toast.success("Thank you for your feedback!".to_string(), ToastOptions::new());
                on_close.call(());
            }
            Err(e) => error.set(Some(form_error(&e))),
        }
    };

    rsx! {
        Modal {
            open,
            on_close,
            title: "Give Anonymous Feedback",
            div { class: "field-stack",
                p {
                    "Your feedback for "
                    strong { "{mentor_name}" }
                    " is anonymous and helps us improve the mentoring programme."
                }
                div {
                    p { class: "field-label", "Rating" }
                    ScaleSlider {
                        min: 1,
                        max: 5,
                        min_label: "Poor",
                        max_label: "Excellent",
                        value: Some(rating()),
                        on_change: move |v: u8| rating.set(v),
                    }
                    StarDisplay { rating: rating() }
                }
                Textarea {
                    value: comment(),
                    placeholder: "Your comments...",
                    rows: 4,
                    error: error(),
                    on_input: move |evt: FormEvent| comment.set(evt.value()),
                }
                Button { onclick: submit, "Submit Feedback" }
            }
        }
    }
}

#[component]
pub fn SessionRequestModal(open: bool, student_id: String, on_close: EventHandler<()>) -> Element {
    let mut store = use_store();
    let toast = use_toast();
    let mut topic = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    let submit = move |_: MouseEvent| {
        let draft = SessionRequestDraft::new(&topic.read());
        let result = repo::session::create(&mut store.write(), &student_id, draft);
        match result {
            Ok(_) => {
                topic.set(String::new());
                error.set(None);
                toast.success(
                    "Your session request has been sent to your mentor.".to_string(),
                    ToastOptions::new(),
                );
                on_close.call(());
            }
            Err(e) => error.set(Some(form_error(&e))),
        }
    };

    rsx! {
        Modal {
            open,
            on_close,
            title: "Request a Session",
            div { class: "field-stack",
                Textarea {
                    value: topic(),
                    placeholder: "What would you like to discuss? (e.g., project help, career advice)",
                    rows: 4,
                    error: error(),
                    on_input: move |evt: FormEvent| topic.set(evt.value()),
                }
                Button { onclick: submit, "Send Request" }
            }
        }
    }
}

#[component]
pub fn IssueModal(open: bool, student_id: String, on_close: EventHandler<()>) -> Element {
    let mut store = use_store();
    let toast = use_toast();
    let mut description = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    let submit = move |_: MouseEvent| {
        let draft = IssueReportDraft::new(&description.read());
        let result = repo::issue::create(&mut store.write(), &student_id, draft);
        match result {
            Ok(_) => {
                description.set(String::new());
                error.set(None);
                toast.success(
                    "Your issue report has been submitted.".to_string(),
                    ToastOptions::new(),
                );
                on_close.call(());
            }
            Err(e) => error.set(Some(form_error(&e))),
        }
    };

    rsx! {
        Modal {
            open,
            on_close,
            title: "Report Issue with Marks",
            description: "Describe the problem with your marks. Your mentor will see the report.",
            div { class: "field-stack",
                Textarea {
                    value: description(),
                    placeholder: "e.g., The score for my 'Algorithms' test on 2023-10-15 is incorrect.",
                    rows: 4,
                    error: error(),
                    on_input: move |evt: FormEvent| description.set(evt.value()),
                }
                Button { onclick: submit, "Submit Report" }
            }
        }
    }
}
