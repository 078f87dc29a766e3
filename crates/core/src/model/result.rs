use thiserror::Error;

use crate::model::{AnsweredQuestion, Question};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizResultError {
    #[error("a result needs at least one question")]
    Empty,

    #[error("score ({score}) exceeds total ({total})")]
    ScoreExceedsTotal { score: u32, total: u32 },

    #[error("total ({total}) does not match question count ({len})")]
    CountMismatch { total: u32, len: usize },
}

/// Scored outcome of a finished quiz session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizResult {
    score: u32,
    total: u32,
    questions: Vec<AnsweredQuestion>,
    time_taken_secs: u32,
}

impl QuizResult {
    /// Score a finished question sequence against its recorded answers.
    ///
    /// Unanswered slots hold the empty string and score as incorrect;
    /// correctness is exact string equality.
    ///
    /// # Errors
    ///
    /// Returns `QuizResultError::Empty` for an empty question sequence.
    pub fn from_answers(
        questions: Vec<Question>,
        answers: impl IntoIterator<Item = String>,
        time_taken_secs: u32,
    ) -> Result<Self, QuizResultError> {
        let questions: Vec<AnsweredQuestion> = questions
            .into_iter()
            .zip(answers)
            .map(|(question, answer)| question.with_answer(answer))
            .collect();
        if questions.is_empty() {
            return Err(QuizResultError::Empty);
        }

        let score = count_u32(questions.iter().filter(|answered| answered.is_correct()));
        let total = count_u32(questions.iter());

        Ok(Self {
            score,
            total,
            questions,
            time_taken_secs,
        })
    }

    /// Rehydrate a result from persisted storage.
    ///
    /// # Errors
    ///
    /// Returns `QuizResultError` if the stored fields do not align.
    pub fn from_persisted(
        score: u32,
        total: u32,
        questions: Vec<AnsweredQuestion>,
        time_taken_secs: u32,
    ) -> Result<Self, QuizResultError> {
        if questions.is_empty() {
            return Err(QuizResultError::Empty);
        }
        if score > total {
            return Err(QuizResultError::ScoreExceedsTotal { score, total });
        }
        if total as usize != questions.len() {
            return Err(QuizResultError::CountMismatch {
                total,
                len: questions.len(),
            });
        }

        Ok(Self {
            score,
            total,
            questions,
            time_taken_secs,
        })
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn questions(&self) -> &[AnsweredQuestion] {
        &self.questions
    }

    #[must_use]
    pub fn time_taken_secs(&self) -> u32 {
        self.time_taken_secs
    }

    /// Score as a rounded percentage in `0..=100`.
    #[must_use]
    pub fn percentage(&self) -> u32 {
        (self.score * 100 + self.total / 2) / self.total
    }
}

fn count_u32<I: Iterator>(iter: I) -> u32 {
    u32::try_from(iter.count()).unwrap_or(u32::MAX)
}
