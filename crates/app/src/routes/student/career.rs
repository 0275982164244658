use dioxus::prelude::*;
use server::{fixtures, repo};
use shared_types::{
    all_answered, answered_count, CareerAnswers, CareerAssessmentStatus, CareerQuestion,
    QuestionKind,
};
use shared_ui::{
    Alert, AlertKind, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle,
    ProgressBar, RichText, ScaleSlider, Textarea, TextSkeleton,
};

use crate::routes::AdvisorOffNotice;
use crate::session::use_store;

/// Career assessment: questionnaire, waiting states, and the released report.
#[component]
pub fn CareerPath(
    student_id: String,
    ai_enabled: bool,
    on_submit: EventHandler<CareerAnswers>,
) -> Element {
    let mut store = use_store();
    let (status, report) = {
        let data = store.read();
        repo::student::find_by_id(&data, &student_id)
            .map(|s| (s.career_assessment_status, s.career_report.clone()))
            .unwrap_or((CareerAssessmentStatus::NotStarted, None))
    };

    match (status, report) {
        (CareerAssessmentStatus::InProgress, _) => rsx! {
            Card {
                CardContent { class: "career-waiting", aria_busy: "true",
                    TextSkeleton { lines: 4 }
                    p { "Analyzing your responses..." }
                }
            }
        },
        (CareerAssessmentStatus::PendingVerification, _) => rsx! {
            Card {
                CardContent { class: "career-waiting",
                    h3 { "Analysis Complete" }
                    p {
                        "Your career report is being verified by your mentor. "
                        "It will appear here once it has been approved."
                    }
                }
            }
        },
        (CareerAssessmentStatus::Completed, Some(report)) => rsx! {
            Card {
                CardHeader { CardTitle { "Your Career Report" } }
                CardContent {
                    RichText { text: report }
                    div { class: "row-actions career-retake",
                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: move |_| {
                                if let Err(e) = repo::student::reset_assessment(&mut store.write(), &student_id) {
                                    tracing::warn!(error = %e, "could not reset assessment");
                                }
                            },
                            "Retake Assessment"
                        }
                    }
                }
            }
        },
        _ => rsx! {
            Questionnaire { ai_enabled, on_submit }
        },
    }
}

/// The submit button stays disabled until every question has an answer
/// and the advisor is switched on.
#[component]
fn Questionnaire(
    ai_enabled: bool,
    on_submit: EventHandler<CareerAnswers>,
    #[props(default)] initial: CareerAnswers,
) -> Element {
    let questions = use_hook(fixtures::career_questions);
    let mut answers = use_signal(move || initial);

    let total = questions.len();
    let done = answered_count(&questions, &answers.read());
    let ready = all_answered(&questions, &answers.read());

    rsx! {
        Card {
            CardHeader { CardTitle { "Career Path Assessment" } }
            CardContent {
                div { class: "field-stack",
                    p {
                        "Answer the following questions thoughtfully. Your detailed responses "
                        "help the AI provide a personalized career path analysis."
                    }
                    ProgressBar { label: "Answered", done, total }
                    for question in questions.iter().cloned() {
                        QuestionField {
                            key: "{question.id}",
                            answer: answers.read().get(&question.id).cloned(),
                            on_answer: move |(id, value): (String, String)| {
                                answers.write().insert(id, value);
                            },
                            question: question.clone(),
                        }
                    }
                    if !ai_enabled {
                        AdvisorOffNotice {}
                    } else if !ready {
                        Alert { kind: AlertKind::Info,
                            "Answer every question to generate your report."
                        }
                    }
                    div { class: "row-actions",
                        Button {
                            disabled: !ready || !ai_enabled,
                            onclick: move |_| {
                                let submitted = answers();
                                answers.set(CareerAnswers::new());
                                on_submit.call(submitted);
                            },
                            "Generate My Career Report"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn QuestionField(
    question: CareerQuestion,
    answer: Option<String>,
    on_answer: EventHandler<(String, String)>,
) -> Element {
    let id = question.id.clone();
    let pick = use_callback(move |value: String| on_answer.call((id.clone(), value)));

    let input = match question.kind {
        QuestionKind::Text => rsx! {
            Textarea {
                value: answer.unwrap_or_default(),
                rows: 4,
                placeholder: "Type your answer here...",
                on_input: move |evt: FormEvent| pick.call(evt.value()),
            }
        },
        QuestionKind::Mcq { options } => rsx! {
            div { class: "mcq-options", role: "radiogroup",
                for option in options {
                    McqOption {
                        key: "{option}",
                        name: question.id.clone(),
                        checked: answer.as_deref() == Some(option.as_str()),
                        on_pick: pick,
                        option: option.clone(),
                    }
                }
            }
        },
        QuestionKind::Scale { min, max, min_label, max_label } => rsx! {
            ScaleSlider {
                min,
                max,
                min_label,
                max_label,
                value: answer.as_deref().and_then(|a| a.parse::<u8>().ok()),
                on_change: move |v: u8| pick.call(v.to_string()),
            }
        },
    };

    rsx! {
        div { class: "career-question",
            p { class: "career-question-text", "{question.text}" }
            {input}
        }
    }
}

#[component]
fn McqOption(name: String, option: String, checked: bool, on_pick: Callback<String>) -> Element {
    let value = option.clone();

    rsx! {
        label { class: "mcq-option",
            input {
                r#type: "radio",
                name: "{name}",
                value: "{option}",
                checked,
                onchange: move |_| on_pick.call(value.clone()),
            }
            span { "{option}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[component]
    fn Harness(initial: CareerAnswers, ai_enabled: bool) -> Element {
        rsx! {
            Questionnaire { ai_enabled, initial, on_submit: |_| {} }
        }
    }

    fn submit_tag(initial: CareerAnswers, ai_enabled: bool) -> (String, String) {
        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { initial, ai_enabled });
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        let label = html.find("Generate My Career Report").unwrap_or(html.len());
        let start = html[..label].rfind("<button").unwrap_or(0);
        let tag = html[start..label].to_string();
        (tag, html)
    }

    fn answer_all(skip: usize) -> CareerAnswers {
        fixtures::career_questions()
            .into_iter()
            .skip(skip)
            .map(|q| (q.id, "4".to_string()))
            .collect()
    }

    #[test]
    fn partial_answers_keep_submit_disabled() {
        let (tag, html) = submit_tag(answer_all(1), true);
        assert!(tag.contains("disabled"), "{tag}");
        assert!(html.contains("Answer every question to generate your report."));
    }

    #[test]
    fn complete_answers_drop_the_reminder() {
        let (_, html) = submit_tag(answer_all(0), true);
        assert!(html.contains("Generate My Career Report"));
        assert!(!html.contains("Answer every question to generate your report."));
    }

    #[test]
    fn switched_off_advisor_blocks_submit() {
        let (tag, html) = submit_tag(answer_all(0), false);
        assert!(tag.contains("disabled"), "{tag}");
        assert!(html.contains("AI advisor is turned off"));
    }
}
