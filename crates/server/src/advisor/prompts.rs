//! Prompt text for each advisor task. Pure string building, shared by the
//! server functions and their tests.

use shared_types::{star_string, AnonymousFeedback, CareerAnswers, CareerQuestion, Student};

fn list_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "none recorded".to_string()
    } else {
        items.join(", ")
    }
}

/// Ask for a short plan a mentor can use before meeting `student`.
pub fn session_prep_tips(student: &Student) -> String {
    let marks = if student.performance.is_empty() {
        "- no marks recorded".to_string()
    } else {
        student
            .performance
            .iter()
            .map(|m| format!("- {}: {}% ({})", m.subject, m.score, m.date))
            .collect::<Vec<_>>()
            .join("\n")
    };
    format!(
        "You are an AI counseling coach. Generate a 3-point actionable plan for a mentor \
         preparing a session with this student. Focus on session flow, empathy points and \
         specific resources. Use a short heading and a bulleted list.\n\n\
         Student: {name}\n\
         Major: {major}\n\
         Strengths: {strengths}\n\
         Weaknesses: {weaknesses}\n\
         Recent marks:\n{marks}",
        name = student.name(),
        major = student.major,
        strengths = list_or_none(&student.strengths),
        weaknesses = list_or_none(&student.weaknesses),
    )
}

/// Wrap a free-text chat question from a student.
pub fn academic_advice(question: &str) -> String {
    format!(
        "As an educational consultant, answer the following student question with a \
         structured, helpful response. Keep it concise and practical.\n\n\
         Question: {}",
        question.trim()
    )
}

/// Summarise anonymous ratings for one mentor, or for the whole programme.
pub fn feedback_analysis(feedback: &[AnonymousFeedback], mentor_name: Option<&str>) -> String {
    let subject = match mentor_name {
        Some(name) => format!("the mentor {name}"),
        None => "all mentors in the programme".to_string(),
    };
    let entries = feedback
        .iter()
        .map(|f| format!("- {} ({}/5) on {}: {}", star_string(f.rating), f.rating, f.date, f.comment))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "Analyze the following anonymous student feedback for {subject}. Summarize the \
         overall sentiment, list recurring strengths, and list concrete areas for \
         improvement. Use headings and bullet points.\n\n\
         Feedback ({count} entries):\n{entries}",
        count = feedback.len(),
    )
}

/// Turn the assessment answers into a request for a career report.
///
/// Questions without an answer are skipped.
pub fn career_insights(questions: &[CareerQuestion], answers: &CareerAnswers) -> String {
    let answered = questions
        .iter()
        .filter_map(|q| {
            answers
                .get(&q.id)
                .filter(|a| !a.trim().is_empty())
                .map(|a| format!("Q: {}\nA: {}", q.text, a.trim()))
        })
        .collect::<Vec<_>>()
        .join("\n\n");
    format!(
        "Analyze the following career assessment answers (scale answers run from 1 to 5) \
         and recommend 3 primary career paths. For each path explain the reasoning based \
         on the answers and suggest first steps. Use headings and bullet points.\n\n\
         {answered}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn prep_tips_include_profile() {
        let alex = fixtures::students().remove(0);
        let prompt = session_prep_tips(&alex);
        assert!(prompt.contains("Student: Alex Johnson"));
        assert!(prompt.contains("Weaknesses: Advanced Algorithms, Database Management"));
        assert!(prompt.contains("3-point actionable plan"));
    }

    #[test]
    fn feedback_prompt_names_mentor_or_programme() {
        let store = crate::store::MockStore::seeded();
        let entries = crate::repo::feedback::anonymized_for_mentor(&store, "mentor-1");
        let prompt = feedback_analysis(&entries, Some("Dr. Evelyn Reed"));
        assert!(prompt.contains("the mentor Dr. Evelyn Reed"));
        assert!(prompt.contains("Feedback (3 entries)"));
        assert!(feedback_analysis(&[], None).contains("all mentors"));
    }

    #[test]
    fn career_prompt_skips_blank_answers() {
        let questions = fixtures::career_questions();
        let mut answers = CareerAnswers::new();
        answers.insert("q1".into(), "Building things".into());
        answers.insert("q2".into(), "  ".into());
        let prompt = career_insights(&questions, &answers);
        assert!(prompt.contains("A: Building things"));
        assert_eq!(prompt.matches("Q: ").count(), 1);
    }

    #[test]
    fn advice_prompt_trims_question() {
        assert!(academic_advice("  how do I study graphs?\n").ends_with("Question: how do I study graphs?"));
    }
}
