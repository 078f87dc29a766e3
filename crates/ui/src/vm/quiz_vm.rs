use quiz_core::model::{
    Advance, Question, QuizResult, QuizSession, QuizSetup, SessionError, TimeUp,
};
use services::quiz_flow::QuizFlowService;

use crate::views::ViewError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Next,
    Previous,
    TimeUp,
}

#[derive(Clone, Debug, PartialEq)]
pub enum QuizOutcome {
    /// The session moved on; keep rendering.
    Continue,
    /// Advance was refused because nothing is selected.
    Blocked,
    Finished(QuizResult),
}

/// UI-facing wrapper around one running quiz.
///
/// The session is held in an `Option` so that finishing can consume it; a vm
/// whose session is gone must not receive further intents.
pub struct QuizVm {
    setup: QuizSetup,
    session: Option<QuizSession>,
}

impl QuizVm {
    #[must_use]
    pub fn new(setup: QuizSetup, session: QuizSession) -> Self {
        Self {
            setup,
            session: Some(session),
        }
    }

    #[must_use]
    pub fn setup(&self) -> &QuizSetup {
        &self.setup
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.session.as_ref().map(QuizSession::current_question)
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.session.as_ref().map_or(0, QuizSession::current_index)
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.session.as_ref().map_or(0, QuizSession::total)
    }

    #[must_use]
    pub fn is_first(&self) -> bool {
        self.session.as_ref().is_none_or(QuizSession::is_first)
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.session.as_ref().is_some_and(QuizSession::is_last)
    }

    #[must_use]
    pub fn selected_answer(&self) -> Option<&str> {
        self.session.as_ref().and_then(QuizSession::selected_answer)
    }

    pub fn select(&mut self, choice: &str) {
        if let Some(session) = self.session.as_mut() {
            // Selecting on a finished session is impossible from the UI.
            let _ = session.select_answer(choice);
        }
    }

    /// Apply a navigation or timer intent.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::Unknown` when the session is gone or a service
    /// call fails.
    pub async fn apply(
        &mut self,
        flow: &QuizFlowService,
        intent: QuizIntent,
    ) -> Result<QuizOutcome, ViewError> {
        let session = self.session.as_mut().ok_or(ViewError::Unknown)?;

        match intent {
            QuizIntent::Previous => {
                session.go_back();
                Ok(QuizOutcome::Continue)
            }
            QuizIntent::Next => match session.advance() {
                Ok(Advance::Continue) => Ok(QuizOutcome::Continue),
                Ok(Advance::Finished) => self.finish(flow).await,
                Err(SessionError::NoSelection) => Ok(QuizOutcome::Blocked),
                Err(_) => Err(ViewError::Unknown),
            },
            QuizIntent::TimeUp => match session.time_out() {
                Ok(TimeUp::Continue) => Ok(QuizOutcome::Continue),
                Ok(TimeUp::Finished) => self.finish(flow).await,
                Err(_) => Err(ViewError::Unknown),
            },
        }
    }

    async fn finish(&mut self, flow: &QuizFlowService) -> Result<QuizOutcome, ViewError> {
        let session = self.session.take().ok_or(ViewError::Unknown)?;
        let result = flow
            .finish(session, &self.setup)
            .await
            .map_err(|_| ViewError::Unknown)?;
        Ok(QuizOutcome::Finished(result))
    }
}

/// # Errors
///
/// Returns `ViewError::Generation` with the source's message when questions
/// cannot be generated.
pub async fn start_quiz(flow: &QuizFlowService, setup: QuizSetup) -> Result<QuizVm, ViewError> {
    let session = flow
        .start(&setup)
        .await
        .map_err(|err| ViewError::Generation(err.to_string()))?;
    Ok(QuizVm::new(setup, session))
}
