use shared_types::{new_id, today, AnonymousFeedback, AppError, Feedback, FeedbackDraft};

use crate::error_convert::ValidateRequest;
use crate::repo::{activity, mentor, student};
use crate::store::MockStore;

/// Feedback for one mentor (or everyone), newest first.
pub fn recent<'a>(store: &'a MockStore, mentor_id: Option<&str>) -> Vec<&'a Feedback> {
    let mut entries: Vec<&Feedback> = store
        .feedback
        .iter()
        .filter(|f| mentor_id.map_or(true, |id| f.mentor_id == id))
        .collect();
    entries.reverse();
    entries.sort_by(|a, b| b.date.cmp(&a.date));
    entries
}

/// What a mentor may see about their own ratings.
pub fn anonymized_for_mentor(store: &MockStore, mentor_id: &str) -> Vec<AnonymousFeedback> {
    recent(store, Some(mentor_id))
        .into_iter()
        .map(Feedback::anonymized)
        .collect()
}

/// Mean rating for a mentor, `None` when nobody has rated them.
pub fn average_rating(store: &MockStore, mentor_id: &str) -> Option<f64> {
    let ratings: Vec<u8> = store
        .feedback
        .iter()
        .filter(|f| f.mentor_id == mentor_id)
        .map(|f| f.rating)
        .collect();
    if ratings.is_empty() {
        return None;
    }
    let total: u32 = ratings.iter().map(|r| u32::from(*r)).sum();
    Some(f64::from(total) / ratings.len() as f64)
}

/// `(mentor name, average rating)` for each approved mentor, 0 when unrated.
pub fn ratings_by_mentor(store: &MockStore) -> Vec<(String, f64)> {
    mentor::approved(store)
        .into_iter()
        .map(|m| {
            let avg = average_rating(store, m.id()).unwrap_or(0.0);
            (m.name().to_string(), avg)
        })
        .collect()
}

/// A student rates their assigned mentor.
pub fn create(
    store: &mut MockStore,
    student_id: &str,
    draft: FeedbackDraft,
) -> Result<Feedback, AppError> {
    draft.validate_request()?;
    let student = student::get(store, student_id)?;
    let mentor_id = student
        .assigned_mentor_id
        .clone()
        .ok_or_else(|| AppError::bad_request("You do not have an assigned mentor yet"))?;
    let student_user = student.user.clone();
    let mentor_name = mentor::get(store, &mentor_id)?.name().to_string();

    let feedback = Feedback {
        id: new_id("f"),
        mentor_id,
        student_id: student_id.to_string(),
        rating: draft.rating,
        comment: draft.comment,
        date: today(),
    };
    store.feedback.push(feedback.clone());
    tracing::info!(feedback_id = %feedback.id, rating = feedback.rating, "feedback submitted");
    activity::record(
        store,
        &student_user,
        format!("Submitted feedback for {mentor_name}"),
    );
    Ok(feedback)
}
