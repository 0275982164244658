use server::advisor::prompts;
use server::repo;
use shared_types::{AdvisorTask, Feedback, FEEDBACK_ANALYSIS_FALLBACK};

use crate::common::seeded;

#[test]
fn feedback_prompt_is_anonymous() {
    let store = seeded();
    let entries: Vec<_> = repo::feedback::recent(&store, Some("mentor-1"))
        .into_iter()
        .map(Feedback::anonymized)
        .collect();

    let prompt = prompts::feedback_analysis(&entries, Some("Dr. Evelyn Reed"));

    assert!(prompt.contains("Dr. Evelyn Reed"));
    assert!(prompt.contains("Feedback (3 entries)"));
    assert!(!prompt.contains("student-1"));
    assert!(!prompt.contains("Alex Johnson"));
}

#[test]
fn prep_tips_prompt_reflects_uploaded_marks() {
    let mut store = seeded();
    repo::student::append_marks(
        &mut store,
        "student-3",
        vec![shared_types::Mark::new(
            "Circuits",
            83,
            chrono::NaiveDate::from_ymd_opt(2023, 11, 20).unwrap(),
        )],
    )
    .unwrap();

    let student = repo::student::get(&store, "student-3").unwrap();
    let prompt = prompts::session_prep_tips(student);

    assert!(prompt.contains("Chen Wei"));
    assert!(prompt.contains("- Circuits: 83% (2023-11-20)"));
}

#[test]
fn failed_analysis_shows_the_fixed_fallback() {
    let failed: Result<String, String> = Err("offline".into());
    assert_eq!(
        AdvisorTask::FeedbackAnalysis.text_or_fallback(failed),
        FEEDBACK_ANALYSIS_FALLBACK
    );
}
