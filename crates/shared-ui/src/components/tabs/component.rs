use dioxus::prelude::*;

/// One entry in a [`TabBar`].
#[derive(Debug, Clone, PartialEq)]
pub struct TabItem {
    pub value: String,
    pub label: String,
}

impl TabItem {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Row of tab buttons. The caller owns the selected value and renders the
/// matching panel itself.
#[component]
pub fn TabBar(items: Vec<TabItem>, active: String, on_change: EventHandler<String>) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "tab-list", role: "tablist",
            for item in items {
                TabButton {
                    key: "{item.value}",
                    selected: item.value == active,
                    item: item.clone(),
                    on_change,
                }
            }
        }
    }
}

#[component]
fn TabButton(item: TabItem, selected: bool, on_change: EventHandler<String>) -> Element {
    let value = item.value.clone();

    rsx! {
        button {
            class: "tab-trigger",
            r#type: "button",
            role: "tab",
            "aria-selected": if selected { "true" } else { "false" },
            onclick: move |_| {
                if !selected {
                    on_change.call(value.clone());
                }
            },
            "{item.label}"
        }
    }
}

#[component]
pub fn TabPanel(children: Element) -> Element {
    rsx! {
        div { class: "tab-panel", role: "tabpanel", {children} }
    }
}
