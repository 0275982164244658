use dioxus::prelude::*;

/// Dashboard tile with a big number, a caption and an icon slot.
#[component]
pub fn StatCard(
    label: String,
    value: String,
    #[props(default)] hint: Option<String>,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    #[props(default)] icon: Element,
) -> Element {
    let interactive = onclick.is_some();
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "stat-card",
            "data-interactive": if interactive { "true" } else { "false" },
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            div { class: "stat-card-icon", {icon} }
            div { class: "stat-card-body",
                p { class: "stat-card-label", "{label}" }
                p { class: "stat-card-value", "{value}" }
                if let Some(text) = hint {
                    p { class: "stat-card-hint", "{text}" }
                }
            }
        }
    }
}
