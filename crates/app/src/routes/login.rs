use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBookOpen, LdShield, LdUsers};
use dioxus_free_icons::Icon;
use shared_types::Role;
use shared_ui::{
    use_toast, Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription, CardFooter,
    CardHeader, CardTitle, ToastOptions,
};

use crate::session::{use_session, use_store};

/// Role picker. Signing in needs no credentials.
#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let store = use_store();
    let toast = use_toast();

    let mut sign_in = move |role: Role| {
        if !session.login(&store.read(), role) {
            toast.error(
                format!("No {} account is available", role.as_str()),
                ToastOptions::new(),
            );
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "login-page",
            Card {
                CardHeader {
                    CardTitle { "Mentoring AI" }
                    CardDescription { "Choose a role to explore the platform." }
                }
                CardContent {
                    div { class: "login-roles",
                        Button {
                            variant: ButtonVariant::Primary,
                            size: ButtonSize::Lg,
                            onclick: move |_| sign_in(Role::Student),
                            Icon::<LdBookOpen> { icon: LdBookOpen, width: 18, height: 18 }
                            "Login as Student"
                        }
                        Button {
                            variant: ButtonVariant::Success,
                            size: ButtonSize::Lg,
                            onclick: move |_| sign_in(Role::Mentor),
                            Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 }
                            "Login as Mentor"
                        }
                        Button {
                            variant: ButtonVariant::Secondary,
                            size: ButtonSize::Lg,
                            onclick: move |_| sign_in(Role::Admin),
                            Icon::<LdShield> { icon: LdShield, width: 18, height: 18 }
                            "Login as Admin"
                        }
                    }
                }
                CardFooter {
                    p { class: "login-note",
                        "This is a demo. No real authentication is performed."
                    }
                }
            }
        }
    }
}
