use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How a career question is answered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuestionKind {
    Text,
    Mcq {
        options: Vec<String>,
    },
    Scale {
        min: u8,
        max: u8,
        min_label: String,
        max_label: String,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CareerQuestion {
    pub id: String,
    pub text: String,
    #[serde(flatten)]
    pub kind: QuestionKind,
}

/// Answers keyed by question id. Scale answers hold the chosen number.
pub type CareerAnswers = BTreeMap<String, String>;

/// True once every question has a non-blank answer.
pub fn all_answered(questions: &[CareerQuestion], answers: &CareerAnswers) -> bool {
    questions.iter().all(|q| {
        answers
            .get(&q.id)
            .is_some_and(|answer| !answer.trim().is_empty())
    })
}

/// Number of questions with a non-blank answer, for the progress bar.
pub fn answered_count(questions: &[CareerQuestion], answers: &CareerAnswers) -> usize {
    questions
        .iter()
        .filter(|q| answers.get(&q.id).is_some_and(|a| !a.trim().is_empty()))
        .count()
}
