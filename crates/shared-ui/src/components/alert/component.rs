use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AlertKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl AlertKind {
    fn class(&self) -> &'static str {
        match self {
            AlertKind::Info => "info",
            AlertKind::Success => "success",
            AlertKind::Warning => "warning",
            AlertKind::Error => "error",
        }
    }
}

/// Inline coloured message box.
#[component]
pub fn Alert(#[props(default)] kind: AlertKind, children: Element) -> Element {
    let role = if kind == AlertKind::Error { "alert" } else { "status" };
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "alert", "data-kind": kind.class(), role: role, {children} }
    }
}
