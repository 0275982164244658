use dioxus::prelude::*;
use server::repo;
use shared_ui::{
    Card, CardContent, CardHeader, CardTitle, DataTable, DataTableBody, DataTableCell,
    DataTableColumn, DataTableEmpty, DataTableHeader, DataTableRow,
};

use crate::format_helpers::format_datetime_human;
use crate::session::use_store;

#[component]
pub fn ActivityLog() -> Element {
    let store = use_store();
    let entries: Vec<_> = repo::activity::recent(&store.read())
        .into_iter()
        .cloned()
        .collect();

    rsx! {
        Card {
            CardHeader { CardTitle { "User Activity Log" } }
            CardContent {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "Timestamp" }
                        DataTableColumn { "User" }
                        DataTableColumn { "Action" }
                    }
                    DataTableBody {
                        if entries.is_empty() {
                            DataTableEmpty { columns: 3, message: "No activity recorded yet." }
                        }
                        for entry in entries {
                            DataTableRow { key: "{entry.id}",
                                DataTableCell { "{format_datetime_human(entry.timestamp)}" }
                                DataTableCell {
                                    "{entry.actor.name} "
                                    span { class: "muted", "({entry.actor.role.label()})" }
                                }
                                DataTableCell { "{entry.action}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
