use serde::{Deserialize, Serialize};
use std::fmt;

/// Request header the app sets after sign-in so server spans carry the
/// acting role.
pub const ROLE_HEADER: &str = "x-mentoring-role";

/// The three kinds of account in the mentoring platform.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Student,
    Mentor,
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Student, Role::Mentor, Role::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Mentor => "mentor",
            Role::Admin => "admin",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Mentor => "Mentor",
            Role::Admin => "Admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Identity fields shared by every account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub avatar: String,
}

impl User {
    pub fn new(id: &str, name: &str, email: &str, role: Role) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            role,
            avatar: format!("https://i.pravatar.cc/150?u={id}"),
        }
    }

    /// The part of the name used in greetings ("Welcome back, Alex!").
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }

    /// Up to two uppercase initials for avatar fallbacks.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter(|w| w.chars().next().is_some_and(char::is_alphabetic))
            .filter_map(|w| w.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }

    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            role: self.role,
        }
    }
}

/// Minimal actor description recorded in the activity log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserSummary {
    pub id: String,
    pub name: String,
    pub role: Role,
}

/// The administrator account.
pub type Admin = User;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_name_takes_leading_word() {
        let user = User::new("student-1", "Alex Johnson", "alex.j@university.edu", Role::Student);
        assert_eq!(user.first_name(), "Alex");
    }

    #[test]
    fn initials_skip_titles_with_punctuation() {
        let user = User::new("mentor-1", "Dr. Evelyn Reed", "e.reed@faculty.edu", Role::Mentor);
        assert_eq!(user.initials(), "DE");
        let single = User::new("x", "Cher", "c@x.edu", Role::Student);
        assert_eq!(single.initials(), "C");
    }

    #[test]
    fn role_serializes_screaming_case() {
        assert_eq!(serde_json::to_string(&Role::Mentor).unwrap(), "\"MENTOR\"");
        let parsed: Role = serde_json::from_str("\"ADMIN\"").unwrap();
        assert_eq!(parsed, Role::Admin);
    }

    #[test]
    fn avatar_is_derived_from_id() {
        let user = User::new("admin-1", "Dean Thompson", "dean.t@university.edu", Role::Admin);
        assert_eq!(user.avatar, "https://i.pravatar.cc/150?u=admin-1");
    }
}
