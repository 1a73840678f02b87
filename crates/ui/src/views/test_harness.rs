use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::{QuestionData, QuizConfig};

use crate::context::{UiApp, build_app_context};
use crate::views::QuizView;
use crate::views::set::SetTestHandles;
use crate::vm::SetIntent;

#[derive(Clone)]
struct TestApp {
    data: Arc<QuestionData>,
    config: Arc<QuizConfig>,
}

impl UiApp for TestApp {
    fn question_data(&self) -> Arc<QuestionData> {
        Arc::clone(&self.data)
    }

    fn config(&self) -> Arc<QuizConfig> {
        Arc::clone(&self.config)
    }
}

#[derive(Clone, Default)]
struct NavigationHandle {
    token: Rc<RefCell<Option<Signal<Option<String>>>>>,
}

#[derive(Props, Clone)]
struct QuizRootProps {
    app: Arc<TestApp>,
    token: Option<String>,
    set_handles: SetTestHandles,
    navigation: NavigationHandle,
}

impl PartialEq for QuizRootProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for QuizRootProps {}

#[component]
fn QuizRoot(props: QuizRootProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.set_handles.clone());

    let initial = props.token.clone();
    let token = use_signal(move || initial);
    let mut registered = use_signal(|| false);
    if !registered() {
        registered.set(true);
        *props.navigation.token.borrow_mut() = Some(token);
    }

    rsx! {
        QuizView { token: token() }
    }
}

pub struct QuizHarness {
    pub dom: VirtualDom,
    pub set_handles: SetTestHandles,
    navigation: NavigationHandle,
}

impl QuizHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    /// Simulates an address fragment change.
    pub fn navigate(&mut self, token: Option<&str>) {
        let mut signal = (*self.navigation.token.borrow()).expect("navigation registered");
        let token = token.map(str::to_string);
        self.dom.in_runtime(|| signal.set(token));
        drive_dom(&mut self.dom);
    }

    /// Submits `answer` to question `index` of the set currently shown.
    pub fn submit(&mut self, index: usize, answer: &str) {
        self.dispatch(SetIntent::answer(index, answer));
    }

    pub fn submit_fields(&mut self, index: usize, fields: Vec<String>) {
        self.dispatch(SetIntent::Submit { index, fields });
    }

    fn dispatch(&mut self, intent: SetIntent) {
        let dispatch = self.set_handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_quiz_harness(token: Option<&str>) -> QuizHarness {
    let data = QuestionData::sample().expect("sample data");
    setup_quiz_harness_with_data(data, token)
}

pub fn setup_quiz_harness_with_data(data: QuestionData, token: Option<&str>) -> QuizHarness {
    let app = Arc::new(TestApp {
        data: Arc::new(data),
        config: Arc::new(QuizConfig::default()),
    });
    let set_handles = SetTestHandles::default();
    let navigation = NavigationHandle::default();

    let dom = VirtualDom::new_with_props(
        QuizRoot,
        QuizRootProps {
            app,
            token: token.map(str::to_string),
            set_handles: set_handles.clone(),
            navigation: navigation.clone(),
        },
    );

    QuizHarness {
        dom,
        set_handles,
        navigation,
    }
}
