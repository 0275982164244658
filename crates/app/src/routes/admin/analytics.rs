use dioxus::prelude::*;
use server::repo;
use shared_ui::{BarChart, Card, CardContent, CardDescription, CardHeader, CardTitle};

use crate::session::use_store;

const MAX_RATING: f64 = 5.0;

#[component]
pub fn Analytics() -> Element {
    let store = use_store();
    let bars = repo::feedback::ratings_by_mentor(&store.read());

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Mentor Performance" }
                CardDescription { "Average feedback rating per approved mentor. Unrated mentors show 0." }
            }
            CardContent {
                if bars.is_empty() {
                    p { class: "muted", "No approved mentors yet." }
                } else {
                    BarChart {
                        bars,
                        y_max: MAX_RATING,
                        series_label: "Average Rating",
                    }
                }
            }
        }
    }
}
