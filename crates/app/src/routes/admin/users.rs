use dioxus::prelude::*;
use server::matching::suggest_mentor;
use server::repo::{self, mentor::MentorSort};
use shared_types::{Mentor, MentorStatus, Student};
use shared_ui::{
    use_toast, Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card, CardContent,
    ConfirmDialog, DataTable, DataTableBody, DataTableCell, DataTableColumn, DataTableEmpty,
    DataTableHeader, DataTableRow, FormSelect, TabBar, TabItem, TabPanel, ToastOptions,
};

use crate::format_helpers::join_or_none;
use crate::session::{use_session, use_store};

const ALL_AREAS: &str = "all";
const STUDENTS_TAB: &str = "students";
const MENTORS_TAB: &str = "mentors";

pub(crate) fn mentor_badge(status: MentorStatus) -> BadgeVariant {
    match status {
        MentorStatus::Approved => BadgeVariant::Success,
        MentorStatus::Pending => BadgeVariant::Warning,
        MentorStatus::Rejected => BadgeVariant::Danger,
    }
}

/// Someone the admin asked to delete, waiting for confirmation.
#[derive(Debug, Clone, PartialEq)]
enum PendingDelete {
    Student { id: String, name: String },
    Mentor { id: String, name: String },
}

impl PendingDelete {
    fn name(&self) -> &str {
        match self {
            PendingDelete::Student { name, .. } | PendingDelete::Mentor { name, .. } => name,
        }
    }
}

#[component]
pub fn UserManagement() -> Element {
    let mut store = use_store();
    let session = use_session();
    let toast = use_toast();
    let mut pending_delete = use_signal(|| Option::<PendingDelete>::None);
    let mut tab = use_signal(|| STUDENTS_TAB.to_string());

    let confirm_delete = move |_: MouseEvent| {
        let Some(target) = pending_delete.take() else {
            return;
        };
        let actor = session.user();
        let result = match &target {
            PendingDelete::Student { id, .. } => {
                repo::student::delete(&mut store.write(), &actor, id).map(|_| ())
            }
            PendingDelete::Mentor { id, .. } => {
                repo::mentor::delete(&mut store.write(), &actor, id).map(|_| ())
            }
        };
        match result {
            Ok(()) => toast.success(format!("Deleted {}.", target.name()), ToastOptions::new()),
            Err(e) => toast.error(e.message, ToastOptions::new()),
        }
    };

    let dialog_description = pending_delete
        .read()
        .as_ref()
        .map(|t| {
            format!(
                "Are you sure you want to delete {}? This action cannot be undone.",
                t.name()
            )
        })
        .unwrap_or_default();

    rsx! {
        Card {
            CardContent {
                TabBar {
                    items: vec![
                        TabItem::new(STUDENTS_TAB, "Students"),
                        TabItem::new(MENTORS_TAB, "Mentors"),
                    ],
                    active: tab(),
                    on_change: move |value: String| tab.set(value),
                }
                TabPanel {
                    if tab() == MENTORS_TAB {
                        MentorTable {
                            on_delete: move |(id, name): (String, String)| {
                                pending_delete.set(Some(PendingDelete::Mentor { id, name }))
                            },
                        }
                    } else {
                        StudentTable {
                            on_delete: move |(id, name): (String, String)| {
                                pending_delete.set(Some(PendingDelete::Student { id, name }))
                            },
                        }
                    }
                }
            }
        }

        ConfirmDialog {
            open: pending_delete.read().is_some(),
            on_open_change: move |open: bool| {
                if !open {
                    pending_delete.set(None);
                }
            },
            title: "Confirm Deletion",
            description: dialog_description,
            on_confirm: confirm_delete,
        }
    }
}

#[component]
fn StudentTable(on_delete: EventHandler<(String, String)>) -> Element {
    let store = use_store();
    let data = store.read();
    let approved = repo::mentor::approved(&data);
    let rows: Vec<(Student, Option<String>, Option<String>)> = repo::student::list(&data)
        .iter()
        .map(|s| {
            let assigned = s
                .assigned_mentor_id
                .as_deref()
                .and_then(|id| repo::mentor::find_by_id(&data, id))
                .map(|m| m.name().to_string());
            let suggested = suggest_mentor(s, &approved).map(|m| m.name().to_string());
            (s.clone(), assigned, suggested)
        })
        .collect();

    rsx! {
        DataTable {
            DataTableHeader {
                DataTableColumn { "Name" }
                DataTableColumn { "Email" }
                DataTableColumn { "Major" }
                DataTableColumn { "Mentor" }
                DataTableColumn { "Suggested Mentor" }
                DataTableColumn { "Actions" }
            }
            DataTableBody {
                if rows.is_empty() {
                    DataTableEmpty { columns: 6, message: "No students on record." }
                }
                for (student, assigned, suggested) in rows {
                    StudentRow { key: "{student.id()}", student, assigned, suggested, on_delete }
                }
            }
        }
    }
}

#[component]
fn StudentRow(
    student: Student,
    assigned: Option<String>,
    suggested: Option<String>,
    on_delete: EventHandler<(String, String)>,
) -> Element {
    let target = (student.id().to_string(), student.name().to_string());
    rsx! {
        DataTableRow {
            DataTableCell { "{student.name()}" }
            DataTableCell { "{student.user.email}" }
            DataTableCell { "{student.major}" }
            DataTableCell { {assigned.unwrap_or_else(|| "Unassigned".to_string())} }
            DataTableCell {
                {match suggested {
                    Some(name) => rsx! { Badge { variant: BadgeVariant::Info, "{name}" } },
                    None => rsx! { span { class: "muted", "No match" } },
                }}
            }
            DataTableCell {
                Button {
                    size: ButtonSize::Sm,
                    variant: ButtonVariant::Destructive,
                    onclick: move |_| on_delete.call(target.clone()),
                    "Delete"
                }
            }
        }
    }
}

#[component]
fn MentorTable(on_delete: EventHandler<(String, String)>) -> Element {
    let store = use_store();
    let mut area = use_signal(|| ALL_AREAS.to_string());
    let mut sort = use_signal(MentorSort::default);

    let data = store.read();
    let areas = repo::mentor::expertise_areas(&data);
    let filter = area();
    let selected_area = (filter != ALL_AREAS).then_some(filter.as_str());
    let mentors: Vec<Mentor> = repo::mentor::filtered_sorted(&data, selected_area, sort())
        .into_iter()
        .cloned()
        .collect();

    rsx! {
        div { class: "table-filters",
            FormSelect {
                label: "Filter by Expertise",
                value: filter.clone(),
                onchange: move |evt: FormEvent| area.set(evt.value()),
                option { value: ALL_AREAS, "All" }
                for name in areas {
                    option { key: "{name}", value: "{name}", "{name}" }
                }
            }
            FormSelect {
                label: "Sort by",
                value: sort().as_str().to_string(),
                onchange: move |evt: FormEvent| sort.set(MentorSort::from_key(&evt.value())),
                option { value: MentorSort::Name.as_str(), "Name" }
                option { value: MentorSort::MenteeCount.as_str(), "Number of Mentees" }
            }
        }

        DataTable {
            DataTableHeader {
                DataTableColumn { "Name" }
                DataTableColumn { "Email" }
                DataTableColumn { "Expertise" }
                DataTableColumn { numeric: true, "Mentees" }
                DataTableColumn { "Status" }
                DataTableColumn { "Actions" }
            }
            DataTableBody {
                if mentors.is_empty() {
                    DataTableEmpty { columns: 6, message: "No mentors match this filter." }
                }
                for mentor in mentors {
                    MentorRow { key: "{mentor.id()}", mentor, on_delete }
                }
            }
        }
    }
}

#[component]
fn MentorRow(mentor: Mentor, on_delete: EventHandler<(String, String)>) -> Element {
    let target = (mentor.id().to_string(), mentor.name().to_string());
    rsx! {
        DataTableRow {
            DataTableCell { "{mentor.name()}" }
            DataTableCell { "{mentor.user.email}" }
            DataTableCell { "{join_or_none(&mentor.expertise)}" }
            DataTableCell { numeric: true, "{mentor.mentee_ids.len()}" }
            DataTableCell {
                Badge { variant: mentor_badge(mentor.status), "{mentor.status.label()}" }
            }
            DataTableCell {
                Button {
                    size: ButtonSize::Sm,
                    variant: ButtonVariant::Destructive,
                    onclick: move |_| on_delete.call(target.clone()),
                    "Delete"
                }
            }
        }
    }
}
