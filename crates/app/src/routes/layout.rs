use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdLogOut, LdMenu, LdMoon, LdSun};
use dioxus_free_icons::Icon;
use shared_ui::theme::{ThemeMode, ThemeState};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Sidebar, SidebarContent,
    SidebarFooter, SidebarHeader, SidebarInset, SidebarProvider, SidebarTrigger, UserAvatar,
};

use crate::session::use_session;

/// Sidebar plus top bar shared by the three dashboards.
///
/// `nav` holds the dashboard's `SidebarMenuButton`s; `children` is the
/// active view.
#[component]
pub fn DashboardShell(title: String, nav: Element, children: Element) -> Element {
    let mut session = use_session();
    let mut theme = use_context::<ThemeState>();
    let user = session.user();
    let is_dark = (theme.mode)() == ThemeMode::Dark;

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        SidebarProvider { default_open: false,
            Sidebar {
                SidebarHeader {
                    div { class: "sidebar-brand",
                        span { class: "sidebar-brand-name", "Mentoring AI" }
                        Badge { variant: BadgeVariant::Info, "{user.role.label()}" }
                    }
                }
                SidebarContent { {nav} }
                SidebarFooter {
                    div { class: "sidebar-user",
                        UserAvatar { src: user.avatar.clone(), initials: user.initials() }
                        div { class: "sidebar-user-text",
                            span { class: "sidebar-user-name", "{user.name}" }
                            span { class: "sidebar-user-email", "{user.email}" }
                        }
                    }
                }
            }

            SidebarInset {
                header { class: "topbar",
                    SidebarTrigger {
                        Icon::<LdMenu> { icon: LdMenu, width: 20, height: 20 }
                    }
                    h1 { class: "topbar-title", "{title}" }
                    div { class: "topbar-actions",
                        Button {
                            variant: ButtonVariant::Ghost,
                            size: ButtonSize::Sm,
                            aria_label: if is_dark { "Switch to light mode" } else { "Switch to dark mode" },
                            onclick: move |_| theme.toggle(),
                            if is_dark {
                                Icon::<LdSun> { icon: LdSun, width: 18, height: 18 }
                            } else {
                                Icon::<LdMoon> { icon: LdMoon, width: 18, height: 18 }
                            }
                        }
                        Button {
                            variant: ButtonVariant::Secondary,
                            size: ButtonSize::Sm,
                            onclick: move |_| session.logout(),
                            Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                            "Logout"
                        }
                    }
                }
                div { class: "page-body", {children} }
            }
        }
    }
}
