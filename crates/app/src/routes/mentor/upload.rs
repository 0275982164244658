use dioxus::prelude::*;
use server::marks_import::{parse_marks_csv, RowError, EXPECTED_HEADER};
use server::repo;
use shared_ui::{
    Alert, AlertKind, Button, Card, CardContent, CardDescription, CardHeader, CardTitle, DataTable,
    DataTableBody, DataTableCell, DataTableColumn, DataTableHeader, DataTableRow, Textarea,
};

use crate::format_helpers::pluralize;
use crate::session::{use_session, use_store};

/// Outcome of the last upload, shown under the form.
#[derive(Debug, Clone, PartialEq)]
enum UploadOutcome {
    Imported { added: usize, rejected: Vec<RowError> },
    Failed(String),
}

#[component]
pub fn UploadMarks() -> Element {
    let mut store = use_store();
    let session = use_session();
    let mut csv_text = use_signal(String::new);
    let mut outcome = use_signal(|| Option::<UploadOutcome>::None);

    let upload = move |_: MouseEvent| {
        let input = csv_text.read().clone();
        let parsed = {
            let data = store.read();
            parse_marks_csv(&input, |id| repo::student::find_by_id(&data, id).is_some())
        };
        let result = parsed.and_then(|import| {
            let actor = session.user();
            repo::student::import_marks(&mut store.write(), &actor, &import.accepted)
                .map(|added| (added, import.rejected))
        });
        match result {
            Ok((added, rejected)) => {
                tracing::info!(added, rejected = rejected.len(), "marks upload finished");
                if rejected.is_empty() {
                    csv_text.set(String::new());
                }
                outcome.set(Some(UploadOutcome::Imported { added, rejected }));
            }
            Err(e) => outcome.set(Some(UploadOutcome::Failed(e.message))),
        }
    };

    let header_line = EXPECTED_HEADER.join(",");
    let placeholder = format!("{header_line}\nstudent-1,Calculus I,88,2023-12-01");

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Marks Upload System" }
                CardDescription {
                    "Paste CSV rows with the header "
                    code { "{header_line}" }
                    ". Scores run from 0 to 100 and dates use YYYY-MM-DD."
                }
            }
            CardContent {
                div { class: "field-stack",
                    Textarea {
                        value: csv_text(),
                        placeholder,
                        rows: 8,
                        on_input: move |evt: FormEvent| csv_text.set(evt.value()),
                    }
                    div { class: "row-actions",
                        Button {
                            disabled: csv_text.read().trim().is_empty(),
                            onclick: upload,
                            "Upload Marks"
                        }
                    }
                }
            }
        }

        {match outcome() {
            None => rsx! {},
            Some(UploadOutcome::Failed(message)) => rsx! {
                Alert { kind: AlertKind::Error, "{message}" }
            },
            Some(UploadOutcome::Imported { added, rejected }) => rsx! {
                UploadSummary { added, rejected }
            },
        }}
    }
}

#[component]
fn UploadSummary(added: usize, rejected: Vec<RowError>) -> Element {
    let added_line = pluralize(added, "mark", "marks");
    let rejected_line = pluralize(rejected.len(), "row was", "rows were");

    rsx! {
        if rejected.is_empty() {
            Alert { kind: AlertKind::Success, "Imported {added_line}." }
        } else {
            Alert { kind: AlertKind::Warning,
                "Imported {added_line}. {rejected_line} skipped; fix them and upload again."
            }
            Card {
                CardHeader { CardTitle { "Rejected Rows" } }
                CardContent {
                    DataTable {
                        DataTableHeader {
                            DataTableColumn { numeric: true, "Line" }
                            DataTableColumn { "Problem" }
                        }
                        DataTableBody {
                            for row in rejected {
                                DataTableRow { key: "{row.line}-{row.message}",
                                    DataTableCell { numeric: true, "{row.line}" }
                                    DataTableCell { "{row.message}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
