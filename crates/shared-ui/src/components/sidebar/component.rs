use dioxus::prelude::*;

/// Whether the sidebar is showing. On narrow screens it slides over the
/// content; on wide screens CSS keeps it pinned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SidebarState {
    pub open: bool,
}

impl SidebarState {
    /// State after a navigation entry is picked: the overlay closes.
    pub fn after_select(self) -> Self {
        Self { open: false }
    }
}

#[component]
pub fn SidebarProvider(#[props(default = false)] default_open: bool, children: Element) -> Element {
    let state = use_signal(|| SidebarState { open: default_open });
    use_context_provider(|| state);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "sidebar-provider",
            "data-sidebar-open": if state().open { "true" } else { "false" },
            {children}
        }
    }
}

fn use_sidebar() -> Signal<SidebarState> {
    use_context::<Signal<SidebarState>>()
}

/// The navigation panel. Tapping the backdrop closes it.
#[component]
pub fn Sidebar(children: Element) -> Element {
    let mut state = use_sidebar();
    let is_open = state().open;

    rsx! {
        if is_open {
            div {
                class: "sidebar-backdrop",
                onclick: move |_| state.set(SidebarState { open: false }),
            }
        }
        aside {
            class: "sidebar",
            "data-state": if is_open { "open" } else { "closed" },
            {children}
        }
    }
}

#[component]
pub fn SidebarHeader(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-header", {children} }
    }
}

#[component]
pub fn SidebarContent(children: Element) -> Element {
    rsx! {
        nav { class: "sidebar-content",
            ul { class: "sidebar-menu", {children} }
        }
    }
}

#[component]
pub fn SidebarFooter(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-footer", {children} }
    }
}

/// One navigation entry. Selecting it also closes the overlay on mobile.
#[component]
pub fn SidebarMenuButton(
    #[props(default = false)] active: bool,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let mut state = use_sidebar();

    rsx! {
        li { class: "sidebar-menu-item",
            button {
                class: "sidebar-menu-button",
                r#type: "button",
                "data-active": if active { "true" } else { "false" },
                "aria-current": if active { "page" } else { "false" },
                onclick: move |evt| {
                    let next = state().after_select();
                    state.set(next);
                    onclick.call(evt);
                },
                {children}
            }
        }
    }
}

/// Hamburger button shown in the mobile top bar.
#[component]
pub fn SidebarTrigger(children: Element) -> Element {
    let mut state = use_sidebar();

    rsx! {
        button {
            class: "sidebar-trigger",
            r#type: "button",
            "aria-label": "Toggle navigation",
            onclick: move |_| {
                let open = state().open;
                state.set(SidebarState { open: !open });
            },
            {children}
        }
    }
}

/// Main content column beside the sidebar.
#[component]
pub fn SidebarInset(children: Element) -> Element {
    rsx! {
        main { class: "sidebar-inset", {children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picking_an_entry_closes_the_overlay() {
        assert!(!SidebarState { open: true }.after_select().open);
        assert!(!SidebarState { open: false }.after_select().open);
    }

    #[test]
    fn open_provider_marks_active_entry() {
        fn app() -> Element {
            rsx! {
                SidebarProvider { default_open: true,
                    Sidebar {
                        SidebarContent {
                            SidebarMenuButton { active: true, onclick: |_| {}, "Dashboard" }
                            SidebarMenuButton { onclick: |_| {}, "Performance" }
                        }
                    }
                }
            }
        }
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("data-sidebar-open=\"true\""));
        assert!(html.contains("sidebar-backdrop"));
        assert!(html.contains("aria-current=\"page\""));
        assert_eq!(html.matches("data-active=\"false\"").count(), 1);
    }
}
