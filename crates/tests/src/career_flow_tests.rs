use pretty_assertions::assert_eq;
use server::advisor::prompts;
use server::{fixtures, repo};
use shared_types::{all_answered, CareerAnswers, CareerAssessmentStatus, QuestionKind, Role};

use crate::common::{login_as, seeded, user};

fn full_answers() -> CareerAnswers {
    fixtures::career_questions()
        .into_iter()
        .map(|q| {
            let answer = match q.kind {
                QuestionKind::Text => format!("Answer to {}", q.id),
                QuestionKind::Mcq { options } => options[0].clone(),
                QuestionKind::Scale { max, .. } => max.to_string(),
            };
            (q.id, answer)
        })
        .collect()
}

#[test]
fn report_stays_hidden_until_the_mentor_releases_it() {
    let mut store = seeded();
    let student = login_as(&store, Role::Student);
    let answers = full_answers();
    assert!(all_answered(&fixtures::career_questions(), &answers));

    repo::student::begin_assessment(&mut store, &student.id).unwrap();
    assert_eq!(
        repo::student::get(&store, &student.id).unwrap().career_assessment_status,
        CareerAssessmentStatus::InProgress
    );

    let prompt = prompts::career_insights(&fixtures::career_questions(), &answers);
    assert!(prompt.contains("Answer to q1"));
    repo::student::submit_career_report(&mut store, &student.id, "## Path: Engineer".into())
        .unwrap();
    let pending = repo::student::get(&store, &student.id).unwrap();
    assert_eq!(
        pending.career_assessment_status,
        CareerAssessmentStatus::PendingVerification
    );

    let mentor = user(&store, pending.assigned_mentor_id.as_deref().unwrap());
    let released = repo::student::verify_career_report(&mut store, &mentor, &student.id).unwrap();
    assert_eq!(released.career_assessment_status, CareerAssessmentStatus::Completed);
    assert_eq!(released.career_report.as_deref(), Some("## Path: Engineer"));
}

#[test]
fn verifying_twice_is_refused() {
    let mut store = seeded();
    let mentor = user(&store, "mentor-3");

    repo::student::verify_career_report(&mut store, &mentor, "student-4").unwrap();
    let err = repo::student::verify_career_report(&mut store, &mentor, "student-4").unwrap_err();

    assert_eq!(err.kind, shared_types::AppErrorKind::BadRequest);
}

#[test]
fn retake_clears_the_old_report() {
    let mut store = seeded();

    let reset = repo::student::reset_assessment(&mut store, "student-2").unwrap();

    assert_eq!(reset.career_assessment_status, CareerAssessmentStatus::NotStarted);
    assert_eq!(reset.career_report, None);
}

#[test]
fn unanswered_questions_are_left_out_of_the_prompt() {
    let mut answers = full_answers();
    answers.insert("q3".into(), "  ".into());

    let prompt = prompts::career_insights(&fixtures::career_questions(), &answers);

    assert!(!prompt.contains("What kind of problems"));
    assert!(!all_answered(&fixtures::career_questions(), &answers));
}
