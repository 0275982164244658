use dioxus::prelude::*;
use shared_types::{FeatureFlags, Role};
use shared_ui::theme::{ThemeMode, ThemeState};

mod format_helpers;
mod nav;
mod routes;
mod session;

use session::{use_session, SessionState, StoreState};

const THEME: Asset = asset!("/assets/theme.css");

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        server::config::load_config();
        let flags = server::config::feature_flags();

        if flags.telemetry {
            server::telemetry::init_telemetry();
        }
        server::health::record_start_time();

        let mut router = dioxus::server::router(App).merge(server::health::health_router());

        if flags.telemetry {
            router = router.layer(server::telemetry::OtelTraceLayer);
        }

        let router = router
            .layer(tower_http::request_id::PropagateRequestIdLayer::x_request_id())
            .layer(tower_http::request_id::SetRequestIdLayer::x_request_id(
                tower_http::request_id::MakeRequestUuid,
            ));
        Ok(router)
    });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

/// Detect the client platform from compile-time feature flags.
pub fn client_platform() -> &'static str {
    if cfg!(feature = "web") {
        "web"
    } else if cfg!(feature = "desktop") {
        "desktop"
    } else if cfg!(feature = "mobile") {
        "mobile"
    } else {
        "unknown"
    }
}

#[component]
fn App() -> Element {
    // Set the X-Client-Platform header on all server function calls
    use_hook(|| session::set_client_headers(None));

    // Fetch feature flags once and provide via context (defaults all-off on error)
    let flags_resource =
        use_server_future(move || async move { server::api::get_feature_flags().await })?;

    let flags = flags_resource
        .read()
        .as_ref()
        .cloned()
        .unwrap_or(Ok(FeatureFlags::default()))
        .unwrap_or_default();

    use_context_provider(|| flags);
    use_context_provider(StoreState::seeded);
    use_context_provider(SessionState::new);
    use_context_provider(|| ThemeState {
        mode: Signal::new(ThemeMode::Light),
    });

    rsx! {
        document::Link { rel: "stylesheet", href: THEME }
        shared_ui::theme::ThemeSeed {}
        shared_ui::ToastProvider {
            SuspenseBoundary {
                fallback: |_| rsx! {
                    div { class: "app-loading",
                        p { "Loading..." }
                    }
                },
                RoleSwitch {}
            }
        }
    }
}

/// Mount the dashboard for whoever is signed in, or the role picker.
#[component]
fn RoleSwitch() -> Element {
    let session = use_session();
    let role = session.current_user.read().as_ref().map(|u| u.role);

    match role {
        None => rsx! { routes::login::Login {} },
        Some(Role::Student) => rsx! { routes::student::StudentDashboard {} },
        Some(Role::Mentor) => rsx! { routes::mentor::MentorDashboard {} },
        Some(Role::Admin) => rsx! { routes::admin::AdminDashboard {} },
    }
}
