use dioxus::prelude::*;
use dioxus_primitives::slider as prim;

pub use dioxus_primitives::slider::SliderValue;

#[component]
pub fn SliderRoot(mut props: prim::SliderProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "slider", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Slider { ..props }
    }
}

#[component]
pub fn SliderTrack(mut props: prim::SliderTrackProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "slider-track", None, false));

    rsx! {
        prim::SliderTrack { ..props }
    }
}

#[component]
pub fn SliderRange(mut props: prim::SliderRangeProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "slider-range", None, false));

    rsx! {
        prim::SliderRange { ..props }
    }
}

#[component]
pub fn SliderThumb(mut props: prim::SliderThumbProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "slider-thumb", None, false));

    rsx! {
        prim::SliderThumb { ..props }
    }
}

/// Whole-number rating slider with end labels. `on_change` fires only when
/// the user moves the thumb, never for the initial position.
#[component]
pub fn ScaleSlider(
    min: u8,
    max: u8,
    min_label: String,
    max_label: String,
    value: Option<u8>,
    on_change: EventHandler<u8>,
) -> Element {
    let midpoint = f64::from(min) + (f64::from(max) - f64::from(min)) / 2.0;
    let shown = value.map(f64::from).unwrap_or(midpoint.round());

    rsx! {
        div { class: "scale-slider",
            SliderRoot {
                default_value: SliderValue::Single(shown),
                min: f64::from(min),
                max: f64::from(max),
                step: 1.0,
                on_value_change: move |val: SliderValue| {
                    let SliderValue::Single(v) = val;
                    on_change.call(v.round().clamp(f64::from(min), f64::from(max)) as u8);
                },
                SliderTrack { SliderRange {} }
                SliderThumb {}
            }
            div { class: "scale-slider-labels",
                span { "{min_label}" }
                span { class: "scale-slider-value",
                    match value {
                        Some(v) => rsx! { "{v}" },
                        None => rsx! { "Not answered" },
                    }
                }
                span { "{max_label}" }
            }
        }
    }
}
