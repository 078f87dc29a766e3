use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::{Question, QuizResult, QuizResultError};

/// Seconds a player gets per displayed question before forced progression.
pub const QUESTION_TIME_LIMIT_SECS: u32 = 60;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("a session needs at least one question")]
    NoQuestions,

    #[error("no answer selected for the current question")]
    NoSelection,

    #[error("session already finished")]
    Finished,

    #[error("session is still in progress")]
    InProgress,
}

/// Outcome of moving past the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the next question.
    Continue,
    /// The last question was answered; the session is now finished.
    Finished,
}

/// Outcome of a timer expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUp {
    /// A selection was pending, so the expiry advanced like a normal next.
    Continue,
    /// The session ended. Either the last question was answered, or no
    /// selection was pending and the whole run ended early.
    Finished,
}

/// In-memory state machine for one quiz run.
///
/// Owns the question sequence, the recorded answers (empty string means
/// unanswered), the cursor, and the in-progress selection. Once finished,
/// every mutating operation fails; the only way out is `into_result`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    questions: Vec<Question>,
    answers: Vec<String>,
    current_index: usize,
    selected: Option<String>,
    started_at: DateTime<Utc>,
    finished: bool,
}

impl QuizSession {
    /// Open a session over a generated question sequence.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoQuestions` for an empty sequence.
    pub fn new(questions: Vec<Question>, started_at: DateTime<Utc>) -> Result<Self, SessionError> {
        if questions.is_empty() {
            return Err(SessionError::NoQuestions);
        }
        let answers = vec![String::new(); questions.len()];

        Ok(Self {
            questions,
            answers,
            current_index: 0,
            selected: None,
            started_at,
            finished: false,
        })
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn current_question(&self) -> &Question {
        &self.questions[self.current_index]
    }

    #[must_use]
    pub fn is_first(&self) -> bool {
        self.current_index == 0
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.current_index + 1 == self.questions.len()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    #[must_use]
    pub fn selected_answer(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Recorded answers so far; unanswered slots hold the empty string.
    #[must_use]
    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Mark a choice as the in-progress pick for the current question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Finished` after the session ended.
    pub fn select_answer(&mut self, choice: impl Into<String>) -> Result<(), SessionError> {
        if self.finished {
            return Err(SessionError::Finished);
        }
        self.selected = Some(choice.into());
        Ok(())
    }

    /// Record the pending selection and move to the next question, or finish
    /// the session when the last question was answered.
    ///
    /// Moving onto a question that already has a recorded answer restores it
    /// as the pending selection.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoSelection` when nothing is selected (the
    /// caller shows a blocking prompt; state is unchanged) and
    /// `SessionError::Finished` after the session ended.
    pub fn advance(&mut self) -> Result<Advance, SessionError> {
        if self.finished {
            return Err(SessionError::Finished);
        }
        let choice = self.selected.clone().ok_or(SessionError::NoSelection)?;
        self.answers[self.current_index] = choice;

        if self.is_last() {
            self.finished = true;
            return Ok(Advance::Finished);
        }

        self.current_index += 1;
        self.selected = stored_selection(&self.answers[self.current_index]);
        Ok(Advance::Continue)
    }

    /// Step back to the previous question, restoring its recorded answer as
    /// the pending selection. The in-progress pick for the question being
    /// left is discarded.
    ///
    /// Returns false (and leaves state untouched) on the first question or
    /// after the session ended.
    pub fn go_back(&mut self) -> bool {
        if self.finished || self.current_index == 0 {
            return false;
        }
        self.current_index -= 1;
        self.selected = stored_selection(&self.answers[self.current_index]);
        true
    }

    /// Forced progression on timer expiry.
    ///
    /// With a pending selection this behaves exactly like `advance`. With no
    /// selection the current slot is recorded empty and the whole session
    /// ends immediately, regardless of position; every later slot stays
    /// empty and scores as incorrect.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Finished` after the session ended.
    pub fn time_out(&mut self) -> Result<TimeUp, SessionError> {
        if self.finished {
            return Err(SessionError::Finished);
        }
        if self.selected.is_some() {
            return Ok(match self.advance()? {
                Advance::Continue => TimeUp::Continue,
                Advance::Finished => TimeUp::Finished,
            });
        }

        self.answers[self.current_index] = String::new();
        self.finished = true;
        Ok(TimeUp::Finished)
    }

    /// Score the finished session.
    ///
    /// `now` is the completion time; the elapsed whole seconds since the
    /// session started are clamped at zero.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InProgress` unless the session finished.
    pub fn into_result(self, now: DateTime<Utc>) -> Result<QuizResult, SessionError> {
        if !self.finished {
            return Err(SessionError::InProgress);
        }
        let elapsed = (now - self.started_at).num_seconds().max(0);
        let time_taken_secs = u32::try_from(elapsed).unwrap_or(u32::MAX);

        // The empty case is unreachable: `new` rejects empty sequences.
        QuizResult::from_answers(self.questions, self.answers, time_taken_secs)
            .map_err(|_: QuizResultError| SessionError::NoQuestions)
    }
}

fn stored_selection(stored: &str) -> Option<String> {
    if stored.is_empty() {
        None
    } else {
        Some(stored.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;
    use chrono::Duration;

    fn question(prompt: &str, answer: &str) -> Question {
        Question::new(prompt, vec![answer.to_string(), "other".to_string()], answer).unwrap()
    }

    fn session(count: usize) -> QuizSession {
        let questions = (0..count)
            .map(|i| question(&format!("Q{i}"), &format!("A{i}")))
            .collect();
        QuizSession::new(questions, fixed_now()).unwrap()
    }

    #[test]
    fn new_session_initializes_empty_answers() {
        let session = session(3);
        assert_eq!(session.total(), 3);
        assert_eq!(session.answers(), &["", "", ""]);
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.selected_answer(), None);
        assert!(!session.is_finished());
    }

    #[test]
    fn new_session_rejects_empty_questions() {
        assert_eq!(
            QuizSession::new(Vec::new(), fixed_now()),
            Err(SessionError::NoQuestions)
        );
    }

    #[test]
    fn advance_without_selection_is_refused_and_state_unchanged() {
        let mut session = session(2);
        assert_eq!(session.advance(), Err(SessionError::NoSelection));
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.answers(), &["", ""]);
    }

    #[test]
    fn advance_records_answer_and_moves_forward() {
        let mut session = session(3);
        session.select_answer("A0").unwrap();
        assert_eq!(session.advance(), Ok(Advance::Continue));
        assert_eq!(session.current_index(), 1);
        assert_eq!(session.answers()[0], "A0");
        assert_eq!(session.selected_answer(), None);
    }

    #[test]
    fn advance_on_last_question_finishes() {
        let mut session = session(1);
        session.select_answer("A0").unwrap();
        assert_eq!(session.advance(), Ok(Advance::Finished));
        assert!(session.is_finished());
        assert_eq!(session.advance(), Err(SessionError::Finished));
        assert_eq!(session.select_answer("x"), Err(SessionError::Finished));
        assert_eq!(session.time_out(), Err(SessionError::Finished));
        assert!(!session.go_back());
    }

    #[test]
    fn go_back_restores_recorded_answer() {
        let mut session = session(3);
        session.select_answer("A0").unwrap();
        session.advance().unwrap();
        session.select_answer("wrong-pick").unwrap();

        assert!(session.go_back());
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.selected_answer(), Some("A0"));
        // The abandoned in-progress pick was never recorded.
        assert_eq!(session.answers()[1], "");
    }

    #[test]
    fn go_back_then_advance_restores_prior_state() {
        let mut session = session(3);
        session.select_answer("A0").unwrap();
        session.advance().unwrap();
        session.select_answer("A1").unwrap();
        session.advance().unwrap();

        let before = session.clone();
        assert!(session.go_back());
        session.select_answer("A1").unwrap();
        assert_eq!(session.advance(), Ok(Advance::Continue));
        assert_eq!(session, before);
    }

    #[test]
    fn go_back_on_first_question_is_a_no_op() {
        let mut session = session(2);
        assert!(!session.go_back());
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn time_out_with_selection_advances() {
        let mut session = session(2);
        session.select_answer("A0").unwrap();
        assert_eq!(session.time_out(), Ok(TimeUp::Continue));
        assert_eq!(session.current_index(), 1);
        assert_eq!(session.answers()[0], "A0");
    }

    #[test]
    fn time_out_without_selection_ends_the_whole_run() {
        let mut session = session(3);
        session.select_answer("A0").unwrap();
        session.advance().unwrap();

        // Question 2 of 3 times out with nothing picked: the run ends here.
        assert_eq!(session.time_out(), Ok(TimeUp::Finished));
        assert!(session.is_finished());

        let result = session.into_result(fixed_now()).unwrap();
        assert_eq!(result.score(), 1);
        assert_eq!(result.total(), 3);
        assert_eq!(result.questions()[1].user_answer, "");
        assert_eq!(result.questions()[2].user_answer, "");
    }

    #[test]
    fn into_result_requires_finished_session() {
        let session = session(2);
        assert_eq!(
            session.into_result(fixed_now()),
            Err(SessionError::InProgress)
        );
    }

    #[test]
    fn into_result_floors_and_clamps_elapsed_seconds() {
        let mut session = session(1);
        session.select_answer("A0").unwrap();
        session.advance().unwrap();

        let now = fixed_now() + Duration::milliseconds(90_500);
        let result = session.clone().into_result(now).unwrap();
        assert_eq!(result.time_taken_secs(), 90);

        // A clock that moved backwards clamps at zero instead of underflowing.
        let earlier = fixed_now() - Duration::seconds(5);
        let result = session.into_result(earlier).unwrap();
        assert_eq!(result.time_taken_secs(), 0);
    }
}
