use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizSetupError {
    #[error("topic must not be empty")]
    EmptyTopic,

    #[error("question count must be greater than zero")]
    ZeroQuestions,
}

/// How demanding the generated questions should be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown difficulty: {0}")]
pub struct ParseDifficultyError(String);

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(ParseDifficultyError(other.to_string())),
        }
    }
}

/// What the player asked for: topic, difficulty, and how many questions.
///
/// Produced by the setup stage, read once by the quiz stage, immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSetup {
    topic: String,
    difficulty: Difficulty,
    question_count: u32,
}

impl QuizSetup {
    /// Validate a setup. The topic is trimmed; a blank topic or a zero
    /// question count is rejected.
    ///
    /// # Errors
    ///
    /// Returns `QuizSetupError` when a field fails validation.
    pub fn new(
        topic: impl Into<String>,
        difficulty: Difficulty,
        question_count: u32,
    ) -> Result<Self, QuizSetupError> {
        let topic = topic.into().trim().to_string();
        if topic.is_empty() {
            return Err(QuizSetupError::EmptyTopic);
        }
        if question_count == 0 {
            return Err(QuizSetupError::ZeroQuestions);
        }

        Ok(Self {
            topic,
            difficulty,
            question_count,
        })
    }

    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn question_count(&self) -> u32 {
        self.question_count
    }
}
