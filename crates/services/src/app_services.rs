use std::sync::Arc;

use quiz_core::model::UserId;
use storage::repository::Storage;

use crate::Clock;
use crate::error::AppServicesError;
use crate::identity::{Anonymous, FixedIdentity, IdentityProvider};
use crate::question_source::{AiQuestionSource, QuestionSource};
use crate::quiz_flow::QuizFlowService;
use crate::result_store::ResultStoreService;

/// Assembles the app-facing services over one storage backend.
#[derive(Clone)]
pub struct AppServices {
    quiz_flow: Arc<QuizFlowService>,
    result_store: Arc<ResultStoreService>,
    identity: Arc<dyn IdentityProvider>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage, with the question source
    /// configured from the environment.
    ///
    /// With no `user_id` the app runs anonymously and results are not
    /// persisted.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(
        db_url: &str,
        clock: Clock,
        user_id: Option<UserId>,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        let source: Arc<dyn QuestionSource> = Arc::new(AiQuestionSource::from_env());
        Ok(Self::assemble(storage, clock, source, user_id))
    }

    /// Wire services over any storage and question source. Used directly by
    /// tests with in-memory backends.
    #[must_use]
    pub fn assemble(
        storage: Storage,
        clock: Clock,
        source: Arc<dyn QuestionSource>,
        user_id: Option<UserId>,
    ) -> Self {
        let identity: Arc<dyn IdentityProvider> = match user_id {
            Some(id) => Arc::new(FixedIdentity::new(id)),
            None => Arc::new(Anonymous),
        };
        let result_store = Arc::new(ResultStoreService::new(clock, Arc::clone(&storage.results)));
        let quiz_flow = Arc::new(QuizFlowService::new(
            clock,
            source,
            Arc::clone(&identity),
            ResultStoreService::new(clock, Arc::clone(&storage.results)),
        ));

        Self {
            quiz_flow,
            result_store,
            identity,
        }
    }

    #[must_use]
    pub fn quiz_flow(&self) -> Arc<QuizFlowService> {
        Arc::clone(&self.quiz_flow)
    }

    #[must_use]
    pub fn result_store(&self) -> Arc<ResultStoreService> {
        Arc::clone(&self.result_store)
    }

    #[must_use]
    pub fn identity(&self) -> Arc<dyn IdentityProvider> {
        Arc::clone(&self.identity)
    }
}
