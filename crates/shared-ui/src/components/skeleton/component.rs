use dioxus::prelude::*;

/// Pulsing placeholder block.
#[component]
pub fn Skeleton(#[props(extends = GlobalAttributes)] attributes: Vec<Attribute>) -> Element {
    let base = vec![Attribute::new("class", "skeleton", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { ..merged }
    }
}

/// Placeholder for a chart while its data loads.
#[component]
pub fn ChartSkeleton(#[props(default = 240)] height: u32) -> Element {
    rsx! {
        div { class: "chart-skeleton", style: "height: {height}px;",
            for bar in [40, 65, 30, 80, 55, 70] {
                Skeleton { style: "height: {bar}%;" }
            }
        }
    }
}

/// A few grey lines standing in for generated text.
#[component]
pub fn TextSkeleton(#[props(default = 3)] lines: usize) -> Element {
    rsx! {
        div { class: "text-skeleton", role: "status", "aria-label": "Loading",
            for i in 0..lines {
                Skeleton {
                    key: "{i}",
                    style: if i + 1 == lines { "width: 60%;" } else { "width: 100%;" },
                }
            }
        }
    }
}
