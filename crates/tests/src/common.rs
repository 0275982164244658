use server::repo;
use server::store::MockStore;
use shared_types::{Role, User};

/// A fresh store with the demo fixtures.
pub fn seeded() -> MockStore {
    MockStore::seeded()
}

/// The account a demo login for `role` would pick.
pub fn login_as(store: &MockStore, role: Role) -> User {
    repo::user::first_with_role(store, role).unwrap()
}

/// Any account by id, whatever its role.
pub fn user(store: &MockStore, id: &str) -> User {
    repo::user::find_by_id(store, id).unwrap()
}

/// Actions recorded after the seeded log, oldest first.
pub fn new_actions(store: &MockStore, seeded_len: usize) -> Vec<String> {
    store.activity_log[seeded_len..]
        .iter()
        .map(|e| e.action.clone())
        .collect()
}
