use shared_types::{AppError, Mentor, MentorStatus, User};

use crate::repo::{activity, not_found};
use crate::store::MockStore;

/// Sort order for the admin's mentor table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MentorSort {
    #[default]
    Name,
    MenteeCount,
}

impl MentorSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            MentorSort::Name => "name",
            MentorSort::MenteeCount => "mentees",
        }
    }

    pub fn from_key(key: &str) -> Self {
        match key {
            "mentees" => MentorSort::MenteeCount,
            _ => MentorSort::Name,
        }
    }
}

pub fn list(store: &MockStore) -> &[Mentor] {
    &store.mentors
}

pub fn find_by_id<'a>(store: &'a MockStore, id: &str) -> Option<&'a Mentor> {
    store.mentors.iter().find(|m| m.id() == id)
}

pub fn get<'a>(store: &'a MockStore, id: &str) -> Result<&'a Mentor, AppError> {
    find_by_id(store, id).ok_or_else(|| not_found("Mentor", id))
}

pub fn approved(store: &MockStore) -> Vec<&Mentor> {
    store.mentors.iter().filter(|m| m.is_approved()).collect()
}

/// Applications still waiting for an admin decision.
pub fn pending(store: &MockStore) -> Vec<&Mentor> {
    store
        .mentors
        .iter()
        .filter(|m| m.status == MentorStatus::Pending)
        .collect()
}

/// Distinct expertise areas across all mentors, alphabetical.
pub fn expertise_areas(store: &MockStore) -> Vec<String> {
    let mut areas: Vec<String> = store
        .mentors
        .iter()
        .flat_map(|m| m.expertise.iter().cloned())
        .collect();
    areas.sort();
    areas.dedup();
    areas
}

/// Mentors narrowed to one expertise area (or all) and sorted for display.
pub fn filtered_sorted<'a>(
    store: &'a MockStore,
    expertise: Option<&str>,
    sort: MentorSort,
) -> Vec<&'a Mentor> {
    let mut mentors: Vec<&Mentor> = store
        .mentors
        .iter()
        .filter(|m| expertise.map_or(true, |area| m.has_expertise(area)))
        .collect();
    match sort {
        MentorSort::Name => mentors.sort_by(|a, b| a.name().cmp(b.name())),
        MentorSort::MenteeCount => {
            mentors.sort_by(|a, b| b.mentee_ids.len().cmp(&a.mentee_ids.len()))
        }
    }
    mentors
}

/// Record an admin's decision on an application.
pub fn set_status(
    store: &mut MockStore,
    actor: &User,
    id: &str,
    status: MentorStatus,
) -> Result<Mentor, AppError> {
    let mentor = store
        .mentors
        .iter_mut()
        .find(|m| m.id() == id)
        .ok_or_else(|| not_found("Mentor", id))?;
    mentor.status = status;
    let updated = mentor.clone();

    tracing::info!(mentor_id = id, status = ?status, "mentor status changed");
    let verb = match status {
        MentorStatus::Approved => "Approved",
        MentorStatus::Rejected => "Rejected",
        MentorStatus::Pending => "Reopened",
    };
    activity::record(
        store,
        actor,
        format!("{verb} mentor application for {}", updated.name()),
    );
    Ok(updated)
}

pub fn approve(store: &mut MockStore, actor: &User, id: &str) -> Result<Mentor, AppError> {
    set_status(store, actor, id, MentorStatus::Approved)
}

pub fn reject(store: &mut MockStore, actor: &User, id: &str) -> Result<Mentor, AppError> {
    set_status(store, actor, id, MentorStatus::Rejected)
}

/// Remove a mentor. Their students become unassigned and records about
/// them are dropped.
pub fn delete(store: &mut MockStore, actor: &User, id: &str) -> Result<Mentor, AppError> {
    let index = store
        .mentors
        .iter()
        .position(|m| m.id() == id)
        .ok_or_else(|| not_found("Mentor", id))?;
    let removed = store.mentors.remove(index);

    for student in &mut store.students {
        if student.assigned_mentor_id.as_deref() == Some(id) {
            student.assigned_mentor_id = None;
        }
    }
    store.feedback.retain(|f| f.mentor_id != id);
    store.session_requests.retain(|r| r.mentor_id != id);
    store.session_reports.retain(|r| r.mentor_id != id);

    tracing::info!(mentor_id = id, "mentor deleted");
    activity::record(store, actor, format!("Deleted mentor {}", removed.name()));
    Ok(removed)
}
