//! Keyword overlap between what a student struggles with and what mentors
//! teach. Advisory only: nothing is reassigned.

use std::collections::BTreeSet;

use shared_types::{Mentor, Student};

fn keywords<'a>(phrases: impl IntoIterator<Item = &'a String>) -> BTreeSet<String> {
    phrases
        .into_iter()
        .flat_map(|p| p.split(|c: char| !c.is_alphanumeric()))
        .filter(|w| w.len() > 1)
        .map(str::to_lowercase)
        .collect()
}

/// Number of weakness keywords this mentor's expertise covers.
pub fn overlap_score(student: &Student, mentor: &Mentor) -> usize {
    let wanted = keywords(&student.weaknesses);
    let offered = keywords(&mentor.expertise);
    wanted.intersection(&offered).count()
}

/// Best approved mentor for `student`, first one on a tie, `None` when no
/// approved mentor shares a keyword.
pub fn suggest_mentor<'a>(student: &Student, mentors: &[&'a Mentor]) -> Option<&'a Mentor> {
    let mut best: Option<(&Mentor, usize)> = None;
    for mentor in mentors.iter().copied().filter(|m| m.is_approved()) {
        let score = overlap_score(student, mentor);
        if score > 0 && best.map_or(true, |(_, top)| score > top) {
            best = Some((mentor, score));
        }
    }
    best.map(|(mentor, _)| mentor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::{mentor, student};
    use crate::store::MockStore;

    fn suggestion(store: &MockStore, student_id: &str) -> Option<String> {
        let s = student::get(store, student_id).unwrap();
        suggest_mentor(s, &mentor::list(store).iter().collect::<Vec<_>>())
            .map(|m| m.id().to_string())
    }

    #[test]
    fn seeded_students_get_expected_suggestions() {
        let store = MockStore::seeded();
        assert_eq!(suggestion(&store, "student-1").as_deref(), Some("mentor-1"));
        assert_eq!(suggestion(&store, "student-2").as_deref(), Some("mentor-2"));
        assert_eq!(suggestion(&store, "student-3").as_deref(), Some("mentor-1"));
        assert_eq!(suggestion(&store, "student-4"), None);
        assert_eq!(suggestion(&store, "student-5"), None);
    }

    #[test]
    fn pending_mentors_are_never_suggested() {
        let mut store = MockStore::seeded();
        let weakness = vec!["Quantum Computing".to_string()];
        let s = store.students.iter_mut().find(|s| s.id() == "student-5").unwrap();
        s.weaknesses = weakness;
        assert_eq!(suggestion(&store, "student-5"), None);
    }

    #[test]
    fn keywords_are_case_insensitive_words() {
        let set = keywords(&["Machine Learning".to_string(), "UI/UX".to_string()]);
        let words: Vec<_> = set.iter().map(String::as_str).collect();
        assert_eq!(words, vec!["learning", "machine", "ui", "ux"]);
    }
}
