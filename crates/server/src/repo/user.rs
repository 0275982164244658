use shared_types::{Role, User};

use crate::store::MockStore;

/// Look up any account by id.
pub fn find_by_id(store: &MockStore, id: &str) -> Option<User> {
    store
        .students
        .iter()
        .map(|s| &s.user)
        .chain(store.mentors.iter().map(|m| &m.user))
        .chain(store.admins.iter())
        .find(|u| u.id == id)
        .cloned()
}

/// The account used by the demo login for a role: the first one seeded.
///
/// Only approved mentors can sign in.
pub fn first_with_role(store: &MockStore, role: Role) -> Option<User> {
    match role {
        Role::Student => store.students.first().map(|s| s.user.clone()),
        Role::Mentor => store
            .mentors
            .iter()
            .find(|m| m.is_approved())
            .map(|m| m.user.clone()),
        Role::Admin => store.admins.first().cloned(),
    }
}

/// Headline user count on the admin dashboard: students plus approved mentors.
pub fn total_users(store: &MockStore) -> usize {
    store.students.len() + store.mentors.iter().filter(|m| m.is_approved()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_picks_first_user_per_role() {
        let store = MockStore::seeded();
        assert_eq!(first_with_role(&store, Role::Student).unwrap().id, "student-1");
        assert_eq!(first_with_role(&store, Role::Mentor).unwrap().id, "mentor-1");
        assert_eq!(first_with_role(&store, Role::Admin).unwrap().id, "admin-1");
    }

    #[test]
    fn no_login_when_role_is_empty() {
        let store = MockStore::default();
        assert!(first_with_role(&store, Role::Student).is_none());
    }

    #[test]
    fn total_users_counts_approved_mentors_only() {
        let store = MockStore::seeded();
        assert_eq!(total_users(&store), 5 + 4);
    }

    #[test]
    fn find_by_id_spans_roles() {
        let store = MockStore::seeded();
        assert_eq!(find_by_id(&store, "mentor-3").unwrap().name, "Dr. Sarah Banks");
        assert_eq!(find_by_id(&store, "admin-1").unwrap().role, Role::Admin);
        assert!(find_by_id(&store, "nobody").is_none());
    }
}
