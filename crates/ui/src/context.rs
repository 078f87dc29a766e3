use std::sync::Arc;

use services::identity::IdentityProvider;
use services::quiz_flow::QuizFlowService;
use services::result_store::ResultStoreService;

use crate::handoff::StageHandoff;

pub trait UiApp: Send + Sync {
    fn quiz_flow(&self) -> Arc<QuizFlowService>;
    fn result_store(&self) -> Arc<ResultStoreService>;
    fn identity(&self) -> Arc<dyn IdentityProvider>;
}

#[derive(Clone)]
pub struct AppContext {
    quiz_flow: Arc<QuizFlowService>,
    result_store: Arc<ResultStoreService>,
    identity: Arc<dyn IdentityProvider>,
    handoff: StageHandoff,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            quiz_flow: app.quiz_flow(),
            result_store: app.result_store(),
            identity: app.identity(),
            handoff: StageHandoff::new(),
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

    #[must_use]
    pub fn handoff(&self) -> StageHandoff {
        self.handoff.clone()
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
