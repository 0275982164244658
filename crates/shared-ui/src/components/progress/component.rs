use dioxus::prelude::*;
use dioxus_primitives::progress as prim;

#[component]
pub fn Progress(mut props: prim::ProgressProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "progress", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Progress { ..props }
    }
}

#[component]
pub fn ProgressIndicator(mut props: prim::ProgressIndicatorProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "progress-indicator", None, false));

    rsx! {
        prim::ProgressIndicator { ..props }
    }
}

/// Percentage of `done` out of `total`, 0 when `total` is 0.
pub fn percent(done: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        (done as f64 / total as f64 * 100.0).clamp(0.0, 100.0)
    }
}

/// Labelled bar showing `done` of `total`.
#[component]
pub fn ProgressBar(label: String, done: usize, total: usize) -> Element {
    let pct = percent(done, total);
    rsx! {
        div { class: "progress-row",
            div { class: "progress-label-row",
                span { class: "progress-label", "{label}" }
                span { class: "progress-value", "{done} / {total}" }
            }
            Progress { value: Some(pct), ProgressIndicator {} }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_handles_empty_total() {
        assert_eq!(percent(0, 0), 0.0);
        assert_eq!(percent(3, 6), 50.0);
        assert_eq!(percent(6, 6), 100.0);
    }
}
