use dioxus::prelude::*;

pub const MAX_STARS: u8 = 5;

/// Read-only row of filled and empty stars.
#[component]
pub fn StarDisplay(rating: u8) -> Element {
    let filled = rating.min(MAX_STARS);
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span { class: "star-rating", "aria-label": "{filled} out of {MAX_STARS} stars",
            for n in 1..=MAX_STARS {
                span {
                    key: "{n}",
                    class: if n <= filled { "star filled" } else { "star" },
                    "★"
                }
            }
        }
    }
}
