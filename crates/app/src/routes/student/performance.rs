use std::collections::BTreeSet;

use chrono::NaiveDate;
use dioxus::prelude::*;
use server::repo;
use shared_types::{IssueStatus, Mark};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card, CardContent, CardHeader,
    CardTitle, ChartSkeleton, LineChart, Series,
};

use crate::format_helpers::{format_date_human, format_date_short};
use crate::session::use_store;

/// Marks regrouped for a line chart: one x slot per distinct date, one
/// series per subject (first-seen order), `None` where a subject has no mark
/// on that date.
pub fn performance_series(marks: &[Mark]) -> (Vec<NaiveDate>, Vec<Series>) {
    let dates: Vec<NaiveDate> = marks
        .iter()
        .map(|m| m.date)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let mut subjects: Vec<&str> = Vec::new();
    for mark in marks {
        if !subjects.contains(&mark.subject.as_str()) {
            subjects.push(&mark.subject);
        }
    }

    let series = subjects
        .into_iter()
        .map(|subject| Series {
            name: subject.to_string(),
            values: dates
                .iter()
                .map(|date| {
                    marks
                        .iter()
                        .rev()
                        .find(|m| m.subject == subject && m.date == *date)
                        .map(|m| f64::from(m.score))
                })
                .collect(),
        })
        .collect();

    (dates, series)
}

#[component]
pub fn Performance(student_id: String, on_report_issue: EventHandler<()>) -> Element {
    let store = use_store();
    let data = store.read();
    let marks = repo::student::find_by_id(&data, &student_id)
        .map(|s| s.performance.clone())
        .unwrap_or_default();
    let issues: Vec<_> = repo::issue::for_student(&data, &student_id)
        .into_iter()
        .rev()
        .cloned()
        .collect();
    let (dates, series) = performance_series(&marks);
    let labels: Vec<String> = dates.into_iter().map(format_date_short).collect();

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Performance Dashboard" }
                Button {
                    variant: ButtonVariant::Secondary,
                    size: ButtonSize::Sm,
                    onclick: move |_| on_report_issue.call(()),
                    "Report an Issue"
                }
            }
            CardContent {
                if series.is_empty() {
                    ChartSkeleton { height: 320 }
                    p { class: "muted", "No marks have been recorded yet." }
                } else {
                    LineChart { labels, series, y_max: 100.0 }
                }
            }
        }

        Card {
            CardHeader { CardTitle { "My Issue Reports" } }
            CardContent {
                if issues.is_empty() {
                    p { class: "muted", "No issues reported." }
                } else {
                    ul { class: "plain-list",
                        for issue in issues {
                            li { key: "{issue.id}", class: "plain-list-item",
                                div {
                                    p { class: "plain-list-title", "{issue.description}" }
                                    p { class: "muted", "{format_date_human(issue.date)}" }
                                }
                                {match issue.status {
                                    IssueStatus::Open => rsx! { Badge { variant: BadgeVariant::Warning, "Open" } },
                                    IssueStatus::Resolved => rsx! { Badge { variant: BadgeVariant::Success, "Resolved" } },
                                }}
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn day(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, m, d).unwrap()
    }

    #[test]
    fn marks_group_by_date_and_subject() {
        let marks = vec![
            Mark::new("Algorithms", 65, day(9, 15)),
            Mark::new("Databases", 72, day(9, 20)),
            Mark::new("Algorithms", 75, day(10, 15)),
        ];
        let (dates, series) = performance_series(&marks);
        assert_eq!(dates, vec![day(9, 15), day(9, 20), day(10, 15)]);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].name, "Algorithms");
        assert_eq!(series[0].values, vec![Some(65.0), None, Some(75.0)]);
        assert_eq!(series[1].values, vec![None, Some(72.0), None]);
    }

    #[test]
    fn later_mark_wins_on_same_day() {
        let marks = vec![
            Mark::new("Stats", 50, day(11, 1)),
            Mark::new("Stats", 90, day(11, 1)),
        ];
        let (_, series) = performance_series(&marks);
        assert_eq!(series[0].values, vec![Some(90.0)]);
    }

    #[test]
    fn no_marks_no_series() {
        let (dates, series) = performance_series(&[]);
        assert!(dates.is_empty());
        assert!(series.is_empty());
    }
}
