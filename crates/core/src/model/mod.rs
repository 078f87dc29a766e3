mod ids;
mod question;
mod result;
mod session;
mod setup;

pub use ids::UserId;
pub use question::{AnsweredQuestion, Question, QuestionDraft, QuestionError};
pub use result::{QuizResult, QuizResultError};
pub use session::{Advance, QUESTION_TIME_LIMIT_SECS, QuizSession, SessionError, TimeUp};
pub use setup::{Difficulty, ParseDifficultyError, QuizSetup, QuizSetupError};
