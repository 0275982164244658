use dioxus::prelude::*;
use server::repo;
use shared_types::Mentor;
use shared_ui::{
    use_toast, Button, ButtonSize, ButtonVariant, Card, CardContent, CardHeader, CardTitle,
    DataTable, DataTableBody, DataTableCell, DataTableColumn, DataTableHeader, DataTableRow,
    ToastOptions,
};

use crate::format_helpers::join_or_none;
use crate::session::{use_session, use_store};

#[component]
pub fn MentorApproval() -> Element {
    let store = use_store();
    let pending: Vec<Mentor> = repo::mentor::pending(&store.read())
        .into_iter()
        .cloned()
        .collect();

    rsx! {
        Card {
            CardHeader { CardTitle { "Mentor Approval System" } }
            CardContent {
                if pending.is_empty() {
                    p { class: "muted", "No pending mentor applications." }
                } else {
                    DataTable {
                        DataTableHeader {
                            DataTableColumn { "Name" }
                            DataTableColumn { "Email" }
                            DataTableColumn { "Expertise" }
                            DataTableColumn { "Action" }
                        }
                        DataTableBody {
                            for mentor in pending {
                                ApplicationRow { key: "{mentor.id()}", mentor }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ApplicationRow(mentor: Mentor) -> Element {
    let mut store = use_store();
    let session = use_session();
    let toast = use_toast();
    let name = mentor.name().to_string();

    let approve_id = mentor.id().to_string();
    let approved_name = name.clone();
    let approve = move |_: MouseEvent| {
        let actor = session.user();
        match repo::mentor::approve(&mut store.write(), &actor, &approve_id) {
            Ok(_) => toast.success(format!("{approved_name} is now a mentor."), ToastOptions::new()),
            Err(e) => toast.error(e.message, ToastOptions::new()),
        }
    };
    let reject_id = mentor.id().to_string();
    let reject = move |_: MouseEvent| {
        let actor = session.user();
        match repo::mentor::reject(&mut store.write(), &actor, &reject_id) {
            Ok(_) => toast.info(format!("Application from {name} rejected."), ToastOptions::new()),
            Err(e) => toast.error(e.message, ToastOptions::new()),
        }
    };

    rsx! {
        DataTableRow {
            DataTableCell { "{mentor.name()}" }
            DataTableCell { "{mentor.user.email}" }
            DataTableCell { "{join_or_none(&mentor.expertise)}" }
            DataTableCell {
                div { class: "row-actions",
                    Button { size: ButtonSize::Sm, variant: ButtonVariant::Success, onclick: approve, "Approve" }
                    Button { size: ButtonSize::Sm, variant: ButtonVariant::Destructive, onclick: reject, "Reject" }
                }
            }
        }
    }
}
