use dioxus::prelude::*;
use server::repo;
use shared_types::Feedback;
use shared_ui::{
    Button, Card, CardContent, CardHeader, CardTitle, FormSelect, RichText, StarDisplay,
    TextSkeleton,
};

use crate::format_helpers::{format_date_human, format_rating};
use crate::routes::AdvisorOffNotice;
use crate::session::use_store;

const ALL_MENTORS: &str = "all";

/// Admin view of feedback, filtered to one approved mentor or everyone.
#[component]
pub fn FeedbackReview(
    selected: Option<String>,
    analysis: Option<String>,
    analyzing: bool,
    ai_enabled: bool,
    on_select: EventHandler<Option<String>>,
    on_analyze: EventHandler<()>,
) -> Element {
    let store = use_store();
    let data = store.read();
    let mentors: Vec<(String, String)> = repo::mentor::approved(&data)
        .into_iter()
        .map(|m| (m.id().to_string(), m.name().to_string()))
        .collect();
    let entries: Vec<(Feedback, String)> = repo::feedback::recent(&data, selected.as_deref())
        .into_iter()
        .map(|f| {
            let mentor = repo::mentor::find_by_id(&data, &f.mentor_id)
                .map(|m| m.name().to_string())
                .unwrap_or_else(|| "Unknown mentor".to_string());
            (f.clone(), mentor)
        })
        .collect();
    let average = selected
        .as_deref()
        .map(|id| format_rating(repo::feedback::average_rating(&data, id)));
    let select_value = selected.clone().unwrap_or_else(|| ALL_MENTORS.to_string());

    rsx! {
        Card {
            CardContent {
                div { class: "table-filters",
                    FormSelect {
                        label: "Mentor",
                        value: select_value,
                        onchange: move |evt: FormEvent| {
                            let value = evt.value();
                            on_select.call((value != ALL_MENTORS).then_some(value));
                        },
                        option { value: ALL_MENTORS, "All Mentors" }
                        for (id, name) in mentors {
                            option { key: "{id}", value: "{id}", "{name}" }
                        }
                    }
                    Button {
                        loading: analyzing,
                        disabled: !ai_enabled,
                        onclick: move |_| on_analyze.call(()),
                        if analyzing { "Analyzing..." } else { "Analyze" }
                    }
                }
                if let Some(avg) = average {
                    p { class: "average-rating",
                        "Average Rating: "
                        strong { "{avg}" }
                        " / 5.00"
                    }
                }
            }
        }

        div { class: "grid-2",
            Card {
                CardHeader { CardTitle { "Feedback Analysis Report" } }
                CardContent {
                    if !ai_enabled {
                        AdvisorOffNotice {}
                    } else if analyzing {
                        TextSkeleton { lines: 5 }
                    } else if let Some(text) = analysis {
                        RichText { text }
                    } else {
                        p { class: "muted",
                            "Select a mentor (or all) and click \"Analyze\" to generate an AI summary of their feedback."
                        }
                    }
                }
            }
            Card {
                CardHeader { CardTitle { "Recent Feedback" } }
                CardContent {
                    if entries.is_empty() {
                        p { class: "muted", "No feedback for this mentor." }
                    } else {
                        ul { class: "plain-list",
                            for (entry, mentor) in entries {
                                li { key: "{entry.id}", class: "plain-list-stack",
                                    div { class: "feedback-row-head",
                                        strong { "{mentor}" }
                                        StarDisplay { rating: entry.rating }
                                    }
                                    p { "{entry.comment}" }
                                    p { class: "muted", "{format_date_human(entry.date)}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
