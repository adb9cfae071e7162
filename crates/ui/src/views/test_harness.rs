use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quiz_core::model::{Difficulty, Question, QuestionId, QuizConfig};
use services::{FixedQuestionSource, QuizLoopService, QuizParamsService};
use storage::repository::Storage;

use crate::context::{UiApp, build_app_context};
use crate::views::quiz::QuizTestHandles;
use crate::views::{HomeView, QuizView};

#[derive(Clone)]
struct TestApp {
    quiz_loop: Arc<QuizLoopService>,
    quiz_params: Arc<QuizParamsService>,
}

impl UiApp for TestApp {
    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }

    fn quiz_params(&self) -> Arc<QuizParamsService> {
        Arc::clone(&self.quiz_params)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Quiz,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    handles: QuizTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    use_context_provider(|| props.handles.clone());
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
        ViewKind::Quiz => rsx! { QuizView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub source: Arc<FixedQuestionSource>,
    handles: QuizTestHandles,
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

    /// Drive pending work until the rendered HTML contains `needle`.
    pub async fn drive_until(&mut self, needle: &str) -> String {
        for _ in 0..20 {
            let html = self.render();
            if html.contains(needle) {
                return html;
            }
            self.drive_async().await;
        }
        self.render()
    }

    pub fn dispatch(&mut self, intent: crate::vm::QuizIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn play_again(&mut self) {
        let play_again = self.handles.play_again();
        self.dom.in_runtime(|| play_again.call(()));
        drive_dom(&mut self.dom);
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

/// Three questions about history; the correct options are 0, 1 and 1.
pub fn history_questions() -> Vec<Question> {
    vec![
        Question::new(
            QuestionId::new(0),
            "Who was the first Roman emperor?",
            vec!["Augustus".into(), "Nero".into()],
            "Augustus",
            Some("Augustus ruled from 27 BC.".into()),
        )
        .expect("valid question"),
        Question::new(
            QuestionId::new(1),
            "In which year did WW2 end?",
            vec!["1944".into(), "1945".into()],
            "1945",
            None,
        )
        .expect("valid question"),
        Question::new(
            QuestionId::new(2),
            "Who built the pyramids of Giza?",
            vec!["Romans".into(), "Egyptians".into()],
            "Egyptians",
            None,
        )
        .expect("valid question"),
    ]
}

pub fn history_config() -> QuizConfig {
    QuizConfig::new("History", 3, Difficulty::Easy).expect("valid config")
}

/// Build a harness for `view`; when `params` is set it is stored before the first render.
pub async fn setup_view_harness(
    view: ViewKind,
    source: FixedQuestionSource,
    params: Option<QuizConfig>,
) -> ViewHarness {
    let storage = Storage::in_memory();
    let source = Arc::new(source);
    let quiz_params = QuizParamsService::new(Arc::clone(&storage.session));
    if let Some(config) = params.as_ref() {
        quiz_params.save(config).await.expect("save params");
    }
    let quiz_loop = Arc::new(QuizLoopService::new(source.clone(), quiz_params.clone()));
    let app = Arc::new(TestApp {
        quiz_loop,
        quiz_params: Arc::new(quiz_params),
    });
    let handles = QuizTestHandles::default();

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            handles: handles.clone(),
        },
    );

    ViewHarness {
        dom,
        source,
        handles,
    }
}
