use dioxus::prelude::*;

use super::parse::{parse_rich_text, Block, Inline};

#[component]
fn Spans(content: Vec<Inline>) -> Element {
    rsx! {
        for (i, span) in content.into_iter().enumerate() {
            match span {
                Inline::Text(t) => rsx! { span { key: "{i}", "{t}" } },
                Inline::Bold(t) => rsx! { strong { key: "{i}", "{t}" } },
            }
        }
    }
}

/// Render generated text as structured blocks.
#[component]
pub fn RichText(text: String) -> Element {
    let blocks = parse_rich_text(&text);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "rich-text",
            for (i, block) in blocks.into_iter().enumerate() {
                match block {
                    Block::Heading { level, content } => match level {
                        1 | 2 => rsx! { h3 { key: "{i}", Spans { content } } },
                        3 => rsx! { h4 { key: "{i}", Spans { content } } },
                        _ => rsx! { h5 { key: "{i}", Spans { content } } },
                    },
                    Block::Paragraph(lines) => {
                        let last = lines.len().saturating_sub(1);
                        rsx! {
                            p { key: "{i}",
                                for (n, line) in lines.into_iter().enumerate() {
                                    Spans { key: "{n}", content: line }
                                    if n < last {
                                        br {}
                                    }
                                }
                            }
                        }
                    }
                    Block::List { ordered: true, items } => rsx! {
                        ol { key: "{i}",
                            for (n, item) in items.into_iter().enumerate() {
                                li { key: "{n}", Spans { content: item } }
                            }
                        }
                    },
                    Block::List { ordered: false, items } => rsx! {
                        ul { key: "{i}",
                            for (n, item) in items.into_iter().enumerate() {
                                li { key: "{n}", Spans { content: item } }
                            }
                        }
                    },
                    Block::Rule => rsx! { hr { key: "{i}" } },
                }
            }
        }
    }
}
