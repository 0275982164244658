use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCalendar, LdUsers};
use dioxus_free_icons::Icon;
use server::repo;
use shared_ui::{Card, CardContent, CardHeader, CardTitle, StarDisplay, StatCard};

use crate::format_helpers::{format_date_human, format_rating, join_or_none, pluralize};
use crate::nav::MentorView;
use crate::session::use_store;

/// Mentor landing page: headline numbers, profile and anonymous ratings.
#[component]
pub fn MentorHome(mentor_id: String, on_navigate: EventHandler<MentorView>) -> Element {
    let store = use_store();
    let data = store.read();
    let Some(mentor) = repo::mentor::find_by_id(&data, &mentor_id) else {
        return rsx! { p { class: "muted", "Mentor record not found." } };
    };

    let mentee_count = repo::student::mentees_of(&data, &mentor_id).len();
    let pending_count = repo::session::pending_for_mentor(&data, &mentor_id).len();
    let feedback = repo::feedback::anonymized_for_mentor(&data, &mentor_id);
    let average = repo::feedback::average_rating(&data, &mentor_id);
    let email = mentor.user.email.clone();
    let mentee_line = pluralize(mentee_count, "assigned mentee", "assigned mentees");

    rsx! {
        Card {
            CardContent {
                h2 { "Welcome, {mentor.name()}!" }
                p { class: "muted", "You have {mentee_line}." }
                p {
                    strong { "Expertise: " }
                    "{join_or_none(&mentor.expertise)}"
                }
            }
        }

        div { class: "grid-3",
            StatCard {
                label: "Total Mentees",
                value: mentee_count.to_string(),
                hint: Some("Click to view all mentees".to_string()),
                onclick: move |_| on_navigate.call(MentorView::Mentees),
                icon: rsx! { Icon::<LdUsers> { icon: LdUsers, width: 20, height: 20 } },
            }
            StatCard {
                label: "Pending Requests",
                value: pending_count.to_string(),
                hint: Some("Sessions waiting for your answer".to_string()),
                onclick: move |_| on_navigate.call(MentorView::SessionRequests),
                icon: rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: 20, height: 20 } },
            }
            StatCard {
                label: "Average Rating",
                value: format_rating(average),
                hint: Some(pluralize(feedback.len(), "review", "reviews")),
            }
        }

        div { class: "grid-2",
            Card {
                CardHeader { CardTitle { "My Profile" } }
                CardContent {
                    p {
                        strong { "Contact: " }
                        a { href: "mailto:{email}", "{email}" }
                    }
                    p { class: "mentor-bio", "{mentor.bio}" }
                }
            }
            Card {
                CardHeader { CardTitle { "Recent Feedback" } }
                CardContent {
                    if feedback.is_empty() {
                        p { class: "muted", "No feedback received yet." }
                    } else {
                        ul { class: "plain-list",
                            for entry in feedback {
                                li { key: "{entry.id}", class: "plain-list-stack",
                                    div { class: "feedback-meta",
                                        StarDisplay { rating: entry.rating }
                                        span { class: "muted", "{format_date_human(entry.date)}" }
                                    }
                                    p { "{entry.comment}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
