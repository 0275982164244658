use dioxus::prelude::*;
use server::repo;
use server::store::MockStore;
use shared_types::{Role, User, ROLE_HEADER};

/// The page's only data store. Seeded on load, lost on reload.
#[derive(Clone, Copy)]
pub struct StoreState {
    pub data: Signal<MockStore>,
}

impl StoreState {
    pub fn seeded() -> Self {
        Self {
            data: Signal::new(MockStore::seeded()),
        }
    }
}

/// Hook to access the shared store.
pub fn use_store() -> Signal<MockStore> {
    use_context::<StoreState>().data
}

/// Who is signed in. There is no real authentication: picking a role signs
/// in as the first seeded account for it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionState {
    pub current_user: Signal<Option<User>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            current_user: Signal::new(None),
        }
    }

    /// Sign in as the demo account for `role`. Returns `false` when the
    /// store has nobody with that role.
    pub fn login(&mut self, store: &MockStore, role: Role) -> bool {
        match repo::user::first_with_role(store, role) {
            Some(user) => {
                tracing::info!(user_id = %user.id, role = role.as_str(), "signed in");
                set_client_headers(Some(role));
                self.current_user.set(Some(user));
                true
            }
            None => {
                tracing::warn!(role = role.as_str(), "no account to sign in with");
                false
            }
        }
    }

    pub fn logout(&mut self) {
        set_client_headers(None);
        self.current_user.set(None);
    }

    /// The signed-in user. Dashboards only mount while someone is signed in.
    pub fn user(&self) -> User {
        self.current_user.read().clone().unwrap_or_else(|| {
            User::new("anonymous", "Guest", "", Role::Student)
        })
    }
}

/// Hook to access session state.
pub fn use_session() -> SessionState {
    use_context::<SessionState>()
}

/// Headers attached to every server function call.
pub fn set_client_headers(role: Option<Role>) {
    use dioxus::fullstack::{set_request_headers, HeaderMap, HeaderValue};

    let mut headers = HeaderMap::new();
    headers.insert(
        "x-client-platform",
        HeaderValue::from_static(crate::client_platform()),
    );
    if let Some(role) = role {
        headers.insert(ROLE_HEADER, HeaderValue::from_static(role.as_str()));
    }
    set_request_headers(headers);
}
