use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt must not be empty")]
    EmptyPrompt,

    #[error("question must offer at least two choices")]
    TooFewChoices,

    #[error("correct answer {answer:?} is not one of the choices")]
    AnswerNotInChoices { answer: String },
}

/// Unvalidated question shape, as produced by the question source.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuestionDraft {
    pub prompt: String,
    pub choices: Vec<String>,
    pub answer: String,
}

impl QuestionDraft {
    /// Validate the draft into a `Question`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` when the prompt is blank, fewer than two
    /// choices are offered, or the answer is not one of the choices.
    pub fn validate(self) -> Result<Question, QuestionError> {
        if self.prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        if self.choices.len() < 2 {
            return Err(QuestionError::TooFewChoices);
        }
        if !self.choices.iter().any(|choice| *choice == self.answer) {
            return Err(QuestionError::AnswerNotInChoices {
                answer: self.answer,
            });
        }

        Ok(Question {
            prompt: self.prompt,
            choices: self.choices,
            answer: self.answer,
        })
    }
}

/// A validated multiple-choice question.
///
/// `answer` always equals one of `choices`; construction goes through
/// `QuestionDraft::validate`, including deserialization, so untrusted input
/// can never produce a value that breaks the invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    prompt: String,
    choices: Vec<String>,
    answer: String,
}

impl Question {
    /// Build a validated question.
    ///
    /// # Errors
    ///
    /// See [`QuestionDraft::validate`].
    pub fn new(
        prompt: impl Into<String>,
        choices: Vec<String>,
        answer: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        QuestionDraft {
            prompt: prompt.into(),
            choices,
            answer: answer.into(),
        }
        .validate()
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Pair this question with the answer a player gave (possibly empty).
    #[must_use]
    pub fn with_answer(self, user_answer: impl Into<String>) -> AnsweredQuestion {
        AnsweredQuestion {
            question: self,
            user_answer: user_answer.into(),
        }
    }
}

impl<'de> Deserialize<'de> for Question {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let draft = QuestionDraft::deserialize(deserializer)?;
        draft.validate().map_err(serde::de::Error::custom)
    }
}

/// One question together with the answer recorded for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnsweredQuestion {
    pub question: Question,
    pub user_answer: String,
}

impl AnsweredQuestion {
    /// Exact string equality: case-sensitive, no trimming, no normalization.
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.user_answer == self.question.answer
    }
}
