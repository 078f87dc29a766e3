use std::sync::Arc;

use quiz_core::model::{QuizResult, QuizSession, QuizSetup, SessionError};

use crate::Clock;
use crate::error::QuestionSourceError;
use crate::identity::IdentityProvider;
use crate::question_source::QuestionSource;
use crate::result_store::ResultStoreService;

/// Orchestrates one quiz run from generation to persistence.
///
/// The session itself lives in the UI layer while the quiz is being taken;
/// this service only owns the boundaries: producing a fresh session from a
/// setup, and turning a finished session into a scored, optionally persisted
/// result.
#[derive(Clone)]
pub struct QuizFlowService {
    clock: Clock,
    source: Arc<dyn QuestionSource>,
    identity: Arc<dyn IdentityProvider>,
    results: ResultStoreService,
}

impl QuizFlowService {
    #[must_use]
    pub fn new(
        clock: Clock,
        source: Arc<dyn QuestionSource>,
        identity: Arc<dyn IdentityProvider>,
        results: ResultStoreService,
    ) -> Self {
        Self {
            clock,
            source,
            identity,
            results,
        }
    }

    /// Generate questions for a setup and open a session over them.
    ///
    /// # Errors
    ///
    /// Returns `QuestionSourceError` when generation fails; no session is
    /// created in that case.
    pub async fn start(&self, setup: &QuizSetup) -> Result<QuizSession, QuestionSourceError> {
        let questions = self.source.generate(setup).await?;
        QuizSession::new(questions, self.clock.now())
            .map_err(|e| QuestionSourceError::Malformed(e.to_string()))
    }

    /// Score a finished session and, for a signed-in user, persist the
    /// outcome.
    ///
    /// Persistence failures are logged and swallowed; the player still gets
    /// their result.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InProgress` if the session has not finished.
    pub async fn finish(
        &self,
        session: QuizSession,
        setup: &QuizSetup,
    ) -> Result<QuizResult, SessionError> {
        let result = session.into_result(self.clock.now())?;

        if let Some(user) = self.identity.current_user().await {
            if let Err(err) = self.results.save(user.id, setup, &result).await {
                tracing::warn!(error = %err, topic = setup.topic(), "failed to persist quiz result");
            }
        }

        Ok(result)
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }
}
