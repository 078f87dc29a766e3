use quiz_core::model::QuizResult;
use services::result_store::SavedResultListItem;

use crate::vm::time_fmt::format_datetime;

/// One reviewed question, flattened for rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultQuestionVm {
    pub prompt: String,
    pub choices: Vec<String>,
    pub correct_answer: String,
    pub user_answer: String,
    pub is_correct: bool,
}

#[must_use]
pub fn map_result_questions(result: &QuizResult) -> Vec<ResultQuestionVm> {
    result
        .questions()
        .iter()
        .map(|answered| ResultQuestionVm {
            prompt: answered.question.prompt().to_string(),
            choices: answered.question.choices().to_vec(),
            correct_answer: answered.question.answer().to_string(),
            user_answer: answered.user_answer.clone(),
            is_correct: answered.is_correct(),
        })
        .collect()
}

/// Encouragement tier shown under the "Quiz Complete!" heading.
#[must_use]
pub fn score_message(percentage: u32) -> &'static str {
    if percentage >= 90 {
        "Outstanding!"
    } else if percentage >= 80 {
        "Excellent work!"
    } else if percentage >= 70 {
        "Great job!"
    } else if percentage >= 60 {
        "Good effort!"
    } else {
        "Keep practicing!"
    }
}

/// One saved quiz in the history listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SavedResultVm {
    pub id: i64,
    pub title: String,
    pub score_label: String,
    pub completed_at_str: String,
}

#[must_use]
pub fn map_saved_results(items: &[SavedResultListItem]) -> Vec<SavedResultVm> {
    items
        .iter()
        .map(|item| SavedResultVm {
            id: item.id,
            title: format!("{} ({})", item.topic, item.difficulty),
            score_label: format!("{}/{}", item.score, item.total),
            completed_at_str: format_datetime(item.completed_at),
        })
        .collect()
}
