use std::sync::Arc;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::{ContentSource, FetchError, ViewerSession};
use storage::repository::{InMemoryStore, Storage};

use crate::app::App;
use crate::context::{UiApp, build_app_context};
use crate::views::course::CourseTestHandles;
use crate::views::{CourseView, ModuleModal};

/// Serves module 1 and reports every other module as missing.
pub struct StubSource;

#[async_trait]
impl ContentSource for StubSource {
    async fn fetch(&self, path: &str) -> Result<String, FetchError> {
        if path == "content/module1_api_fundamentals.md" {
            Ok("# What is an API?\n\nA contract between programs.".to_string())
        } else {
            Err(FetchError::NotFound(path.to_string()))
        }
    }
}

#[derive(Clone)]
struct TestApp {
    session: Arc<ViewerSession>,
}

impl UiApp for TestApp {
    fn course_title(&self) -> String {
        "Test Course".to_string()
    }

    fn session(&self) -> Arc<ViewerSession> {
        Arc::clone(&self.session)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    App,
    Course,
    Modal(u32),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    course_handles: Option<CourseTestHandles>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    if let Some(handles) = props.course_handles.clone() {
        use_context_provider(|| handles);
    }
    let on_close = use_callback(|()| {});
    let on_complete = use_callback(|_: u32| {});

    match props.view {
        ViewKind::App => rsx! { App {} },
        ViewKind::Course => rsx! { CourseView {} },
        ViewKind::Modal(number) => rsx! {
            ModuleModal { number, on_close, on_complete }
        },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
    pub session: Arc<ViewerSession>,
    pub course_handles: Option<CourseTestHandles>,
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

    pub fn course_handles(&self) -> CourseTestHandles {
        self.course_handles
            .clone()
            .expect("course handles exist for the course view")
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

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with(view, Arc::new(StubSource), Storage::in_memory())
}

pub fn setup_view_harness_with_store(view: ViewKind, store: InMemoryStore) -> ViewHarness {
    setup_view_harness_with(view, Arc::new(StubSource), Storage { kv: Arc::new(store) })
}

pub fn setup_view_harness_with(
    view: ViewKind,
    source: Arc<dyn ContentSource>,
    storage: Storage,
) -> ViewHarness {
    let session = Arc::new(ViewerSession::new(source, Arc::clone(&storage.kv)));
    let app = Arc::new(TestApp {
        session: Arc::clone(&session),
    });
    let course_handles = match view {
        ViewKind::Course => Some(CourseTestHandles::default()),
        ViewKind::App | ViewKind::Modal(_) => None,
    };

    let dom = VirtualDom::new_with_props(
        ViewHarnessRoot,
        ViewHarnessProps {
            app,
            view,
            course_handles: course_handles.clone(),
        },
    );

    ViewHarness {
        dom,
        storage,
        session,
        course_handles,
    }
}
