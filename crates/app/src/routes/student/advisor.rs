use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdSend;
use dioxus_free_icons::Icon;
use shared_types::{ChatMessage, ChatSender};
use shared_ui::{Button, Card, CardContent, CardHeader, CardTitle, RichText};

use crate::routes::AdvisorOffNotice;

/// Chat with the academic advisor. The history is owned by the dashboard.
#[component]
pub fn AdvisorChat(
    messages: Vec<ChatMessage>,
    loading: bool,
    ai_enabled: bool,
    on_send: EventHandler<String>,
) -> Element {
    let mut input = use_signal(String::new);
    let locked = loading || !ai_enabled;

    let mut submit = move || {
        let question = input();
        if question.trim().is_empty() || locked {
            return;
        }
        input.set(String::new());
        on_send.call(question);
    };

    rsx! {
        Card { class: "chat",
            CardHeader { CardTitle { "AI Academic Advisor" } }
            CardContent { class: "chat-log",
                if !ai_enabled {
                    AdvisorOffNotice {}
                }
                if messages.is_empty() {
                    p { class: "muted chat-empty",
                        "Ask about study strategies, tricky topics or how to plan your semester."
                    }
                }
                for (i, message) in messages.iter().enumerate() {
                    div {
                        key: "{i}",
                        class: "chat-row",
                        "data-sender": match message.sender {
                            ChatSender::User => "user",
                            ChatSender::Ai => "ai",
                        },
                        div { class: "chat-bubble",
                            {match message.sender {
                                ChatSender::User => rsx! { p { "{message.text}" } },
                                ChatSender::Ai => rsx! { RichText { text: message.text.clone() } },
                            }}
                        }
                    }
                }
                if loading {
                    div { class: "chat-row", "data-sender": "ai",
                        div { class: "chat-bubble chat-typing", aria_busy: "true", "Thinking..." }
                    }
                }
            }
            div { class: "chat-input",
                input {
                    r#type: "text",
                    value: "{input}",
                    placeholder: "Ask for academic help...",
                    disabled: locked,
                    oninput: move |evt| input.set(evt.value()),
                    onkeydown: move |evt| {
                        if evt.key() == Key::Enter {
                            submit();
                        }
                    },
                }
                Button {
                    disabled: locked,
                    aria_label: "Send",
                    onclick: move |_| submit(),
                    Icon::<LdSend> { icon: LdSend, width: 18, height: 18 }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[component]
    fn Harness(messages: Vec<ChatMessage>, ai_enabled: bool) -> Element {
        rsx! {
            AdvisorChat { messages, loading: false, ai_enabled, on_send: |_| {} }
        }
    }

    fn render(messages: Vec<ChatMessage>, ai_enabled: bool) -> String {
        let mut dom =
            VirtualDom::new_with_props(Harness, HarnessProps { messages, ai_enabled });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn history_passed_in_is_shown_on_remount() {
        let html = render(
            vec![
                ChatMessage::user("How do I revise for calculus?"),
                ChatMessage::ai("Work past papers first."),
            ],
            true,
        );
        assert!(html.contains("How do I revise for calculus?"));
        assert!(html.contains("Work past papers first."));
        assert!(!html.contains("chat-empty"));
        assert!(!html.contains("AI advisor is turned off"));
    }

    #[test]
    fn switched_off_advisor_locks_the_input() {
        let html = render(Vec::new(), false);
        assert!(html.contains("AI advisor is turned off"));
        let input_tag = html
            .split("<input")
            .nth(1)
            .and_then(|rest| rest.split('>').next())
            .unwrap_or_default();
        assert!(input_tag.contains("disabled"), "{input_tag}");
    }
}
