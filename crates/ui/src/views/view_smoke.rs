use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use course_core::model::{ModuleId, ModuleStatus, ProgressSnapshot};
use dioxus::prelude::*;
use services::{ContentSource, FetchError};
use storage::repository::{InMemoryStore, KeyValueStore, Storage};
use tokio::sync::Notify;

use super::test_harness::{
    ViewHarness, ViewKind, setup_view_harness, setup_view_harness_with,
    setup_view_harness_with_store,
};
use crate::views::course::is_dismiss_key;
use crate::views::{ModuleBody, ModuleRow};
use crate::vm::{ModuleContentVm, ModuleRowVm};

#[derive(Props, Clone, PartialEq)]
struct RowHarnessProps {
    row: ModuleRowVm,
}

#[component]
fn RowHarness(props: RowHarnessProps) -> Element {
    let on_open = use_callback(|_: u32| {});
    rsx! {
        ul { ModuleRow { row: props.row.clone(), on_open } }
    }
}

#[derive(Props, Clone, PartialEq)]
struct BodyHarnessProps {
    module: ModuleContentVm,
}

#[component]
fn BodyHarness(props: BodyHarnessProps) -> Element {
    let on_complete = use_callback(|_: u32| {});
    rsx! {
        ModuleBody { module: props.module.clone(), on_complete }
    }
}

/// Holds every fetch until `release` is notified.
#[derive(Default)]
struct GatedSource {
    release: Notify,
    calls: AtomicUsize,
}

#[async_trait]
impl ContentSource for GatedSource {
    async fn fetch(&self, _path: &str) -> Result<String, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.release.notified().await;
        Ok("# Vector search basics".to_string())
    }
}

async fn settle(harness: &mut ViewHarness) {
    for _ in 0..4 {
        harness.drive_async().await;
    }
}

#[test]
fn escape_is_the_dismiss_key() {
    assert!(is_dismiss_key(&Key::Escape));
    assert!(!is_dismiss_key(&Key::Enter));
}

#[tokio::test(flavor = "current_thread")]
async fn app_shell_shows_course_title_from_context() {
    let mut harness = setup_view_harness(ViewKind::App);
    harness.rebuild();
    settle(&mut harness).await;
    let html = harness.render();

    assert!(html.contains("Test Course"), "missing course title in {html}");
    assert!(!html.contains("Course Viewer"), "hard-coded title in {html}");
    assert!(html.contains("Course Progress"), "missing course view in {html}");
}

#[test]
fn module_row_renders_status_class() {
    let row = ModuleRowVm {
        number: 3,
        title: "AI APIs".to_string(),
        status: ModuleStatus::Completed,
    };
    let mut dom = VirtualDom::new_with_props(RowHarness, RowHarnessProps { row });
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);

    assert!(html.contains("progress-module-3"), "missing id in {html}");
    assert!(html.contains("completed"), "missing status class in {html}");
    assert!(html.contains("AI APIs"), "missing title in {html}");
}

#[test]
fn module_body_renders_html_and_complete_button() {
    let module = ModuleContentVm {
        number: 2,
        title: "API Types".to_string(),
        html: "<h1>REST</h1>".to_string(),
    };
    let mut dom = VirtualDom::new_with_props(BodyHarness, BodyHarnessProps { module });
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);

    assert!(html.contains("Module 2: API Types"), "missing title in {html}");
    assert!(html.contains("<h1>REST</h1>"), "missing content in {html}");
    assert!(html.contains("Mark as Complete"), "missing button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn course_view_smoke_renders_progress() {
    let store = InMemoryStore::new();
    store.set("module-1-complete", "true").await.unwrap();
    store.set("last-viewed-module", "2").await.unwrap();

    let mut harness = setup_view_harness_with_store(ViewKind::Course, store);
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("Course Progress"), "missing heading in {html}");
    assert!(html.contains("1 of 7 modules complete"), "missing summary in {html}");
    assert!(html.contains("in-progress"), "missing in-progress row in {html}");
    assert!(html.contains("Practical Applications"), "missing module row in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn module_modal_smoke_renders_content_and_records_view() {
    let mut harness = setup_view_harness(ViewKind::Modal(1));
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("What is an API?"), "missing content in {html}");
    assert!(html.contains("Mark as Complete"), "missing button in {html}");

    let snapshot: ProgressSnapshot = harness.session.load_progress().await.unwrap();
    assert_eq!(snapshot.last_viewed.map(|id| id.value()), Some(1));
    assert_eq!(
        harness
            .storage
            .kv
            .get("last-viewed-module")
            .await
            .unwrap()
            .as_deref(),
        Some("1")
    );
}

#[tokio::test(flavor = "current_thread")]
async fn module_modal_smoke_renders_placeholder_on_failure() {
    let mut harness = setup_view_harness(ViewKind::Modal(5));
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("Error Loading Module 5"), "missing placeholder in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn course_view_completing_a_module_updates_progress() {
    let mut harness = setup_view_harness(ViewKind::Course);
    harness.rebuild();
    settle(&mut harness).await;
    let handles = harness.course_handles();

    handles.on_open().call(1);
    settle(&mut harness).await;
    let html = harness.render();
    assert!(html.contains("What is an API?"), "modal not open in {html}");

    handles.on_complete().call(1);
    settle(&mut harness).await;
    let html = harness.render();

    assert!(!html.contains("Mark as Complete"), "modal still open in {html}");
    assert!(html.contains("1 of 7 modules complete"), "missing summary in {html}");
    assert!(
        html.contains("progress-module completed"),
        "module 1 not marked complete in {html}"
    );
    assert_eq!(
        harness
            .storage
            .kv
            .get("module-1-complete")
            .await
            .unwrap()
            .as_deref(),
        Some("true")
    );
}

#[tokio::test(flavor = "current_thread")]
async fn course_view_closing_a_module_marks_it_in_progress() {
    let mut harness = setup_view_harness(ViewKind::Course);
    harness.rebuild();
    settle(&mut harness).await;
    let html = harness.render();
    assert!(!html.contains("in-progress"), "unexpected in-progress row in {html}");

    let handles = harness.course_handles();
    handles.on_open().call(3);
    settle(&mut harness).await;
    assert!(harness.render().contains("modal-overlay"));

    handles.on_close().call(());
    settle(&mut harness).await;
    let html = harness.render();

    assert!(!html.contains("modal-overlay"), "modal still open in {html}");
    assert!(html.contains("in-progress"), "missing in-progress row in {html}");
    assert!(html.contains("0 of 7 modules complete"), "missing summary in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn closing_the_modal_mid_fetch_still_caches_content() {
    let source = Arc::new(GatedSource::default());
    let mut harness = setup_view_harness_with(
        ViewKind::Modal(5),
        Arc::clone(&source) as Arc<dyn ContentSource>,
        Storage::in_memory(),
    );
    harness.rebuild();
    for _ in 0..10 {
        if source.calls.load(Ordering::SeqCst) > 0 {
            break;
        }
        harness.drive_async().await;
    }
    assert_eq!(source.calls.load(Ordering::SeqCst), 1);

    let ViewHarness {
        dom,
        storage,
        session,
        ..
    } = harness;
    drop(dom);

    let id = ModuleId::new(5).unwrap();
    assert!(!session.loader().is_cached(id));
    source.release.notify_one();
    for _ in 0..100 {
        if session.loader().is_cached(id) {
            break;
        }
        tokio::task::yield_now().await;
    }
    tokio::task::yield_now().await;

    assert!(session.loader().is_cached(id));
    assert_eq!(
        storage.kv.get("last-viewed-module").await.unwrap().as_deref(),
        Some("5")
    );

    let reopened = session.open_module(5).await;
    assert_eq!(reopened.markdown, "# Vector search basics");
    assert_eq!(source.calls.load(Ordering::SeqCst), 1);
}
