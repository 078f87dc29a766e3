use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quiz_core::model::{Question, QuizSetup, UserId};
use quiz_core::time::fixed_clock;
use services::app_services::AppServices;
use services::error::QuestionSourceError;
use services::identity::IdentityProvider;
use services::question_source::QuestionSource;
use services::quiz_flow::QuizFlowService;
use services::result_store::ResultStoreService;
use storage::repository::Storage;

use crate::context::{AppContext, UiApp, build_app_context};
use crate::handoff::StageHandoff;
use crate::views::{HistoryView, HomeView, QuizView, ResultView, SetupView};

struct TestApp {
    services: AppServices,
}

impl UiApp for TestApp {
    fn quiz_flow(&self) -> Arc<QuizFlowService> {
        self.services.quiz_flow()
    }

    fn result_store(&self) -> Arc<ResultStoreService> {
        self.services.result_store()
    }

    fn identity(&self) -> Arc<dyn IdentityProvider> {
        self.services.identity()
    }
}

struct ScriptedSource(Vec<Question>);

#[async_trait::async_trait]
impl QuestionSource for ScriptedSource {
    async fn generate(&self, _setup: &QuizSetup) -> Result<Vec<Question>, QuestionSourceError> {
        Ok(self.0.clone())
    }
}

struct FailingSource;

#[async_trait::async_trait]
impl QuestionSource for FailingSource {
    async fn generate(&self, _setup: &QuizSetup) -> Result<Vec<Question>, QuestionSourceError> {
        Err(QuestionSourceError::EmptyResponse)
    }
}

pub fn capital_questions() -> Vec<Question> {
    vec![
        Question::new(
            "Capital of France?",
            vec!["Paris".to_string(), "Lyon".to_string()],
            "Paris",
        )
        .unwrap(),
        Question::new(
            "Capital of Italy?",
            vec!["Rome".to_string(), "Milan".to_string()],
            "Rome",
        )
        .unwrap(),
    ]
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Setup,
    Quiz,
    Result,
    History,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    context: AppContext,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    use_context_provider(|| props.context.clone());
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Setup => rsx! { SetupView {} },
        ViewKind::Quiz => rsx! { QuizView {} },
        ViewKind::Result => rsx! { ResultView {} },
        ViewKind::History => rsx! { HistoryView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
    pub handoff: StageHandoff,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub struct HarnessConfig {
    pub questions: Option<Vec<Question>>,
    pub user_id: Option<UserId>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            questions: Some(capital_questions()),
            user_id: None,
        }
    }
}

pub fn setup_view_harness(view: ViewKind, config: HarnessConfig) -> ViewHarness {
    let storage = Storage::in_memory();
    let source: Arc<dyn QuestionSource> = match config.questions {
        Some(questions) => Arc::new(ScriptedSource(questions)),
        None => Arc::new(FailingSource),
    };
    let services = AppServices::assemble(storage.clone(), fixed_clock(), source, config.user_id);

    let app: Arc<dyn UiApp> = Arc::new(TestApp { services });
    let context = build_app_context(&app);
    let handoff = context.handoff();

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { context, view });

    ViewHarness {
        dom,
        storage,
        handoff,
    }
}
