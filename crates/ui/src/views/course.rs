#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

use course_core::model::ModuleId;
use dioxus::prelude::*;
use tracing::warn;

use crate::context::AppContext;
use crate::views::module_modal::ModuleModal;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{CourseVm, ModuleRowVm, map_course};

#[component]
pub fn CourseView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut open_module = use_signal(|| None::<u32>);

    let progress_session = ctx.session();
    let mut resource = use_resource(move || {
        let session = progress_session.clone();
        async move {
            let snapshot = session.load_progress().await.map_err(|err| {
                warn!(error = %err, "failed to load progress");
                ViewError::ProgressUnavailable
            })?;
            Ok::<_, ViewError>(map_course(&session.catalog(), &snapshot))
        }
    });

    let state = view_state_from_resource(resource);

    let on_open = use_callback(move |number: u32| open_module.set(Some(number)));

    // Refresh on close so the last viewed module shows as in progress.
    let on_close = use_callback(move |()| {
        if open_module.peek().is_some() {
            open_module.set(None);
            resource.restart();
        }
    });

    let complete_session = ctx.session();
    let on_complete = use_callback(move |number: u32| {
        let session = complete_session.clone();
        spawn(async move {
            match ModuleId::new(number) {
                Ok(id) => {
                    if let Err(err) = session.mark_complete(id).await {
                        warn!(module = number, error = %err, "failed to mark module complete");
                    }
                }
                Err(err) => warn!(error = %err, "ignoring completion for unknown module"),
            }
            open_module.set(None);
            resource.restart();
        });
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<CourseTestHandles>() {
                handles.register(on_open, on_close, on_complete);
            }
        }
    }

    rsx! {
        div {
            class: "page",
            tabindex: "0",
            onkeydown: move |evt: KeyboardEvent| {
                if is_dismiss_key(&evt.key()) {
                    on_close.call(());
                }
            },
            h2 { "Course Progress" }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(course) => rsx! {
                    CourseProgress { course, on_open }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                    button {
                        class: "btn",
                        r#type: "button",
                        onclick: move |_| resource.restart(),
                        "Retry"
                    }
                },
            }

            if let Some(number) = open_module() {
                ModuleModal { key: "{number}", number, on_close, on_complete }
            }
        }
    }
}

/// Keys that close an open module.
pub(crate) fn is_dismiss_key(key: &Key) -> bool {
    *key == Key::Escape
}

#[component]
pub fn CourseProgress(course: CourseVm, on_open: Callback<u32>) -> Element {
    let bar_width = course.bar_width();
    let percent_label = course.percent_label();

    rsx! {
        div { class: "progress-summary",
            div { class: "progress-bar",
                div {
                    id: "overall-progress",
                    class: "progress-fill",
                    style: "width: {bar_width}",
                }
            }
            p { class: "progress-label",
                "{course.completed} of {course.total} modules complete ({percent_label})"
            }
        }
        ul { class: "module-list",
            for row in course.rows.iter() {
                ModuleRow { key: "{row.number}", row: row.clone(), on_open }
            }
        }
    }
}

#[component]
pub fn ModuleRow(row: ModuleRowVm, on_open: Callback<u32>) -> Element {
    let number = row.number;

    rsx! {
        li { id: "progress-module-{number}", class: "{row.status_class()}",
            span { class: "module-number", "Module {number}" }
            span { class: "module-title", "{row.title}" }
            span { class: "module-status", "{row.status_label()}" }
            button {
                class: "btn",
                r#type: "button",
                onclick: move |_| on_open.call(number),
                "Open"
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct CourseTestHandles {
    on_open: Rc<RefCell<Option<Callback<u32>>>>,
    on_close: Rc<RefCell<Option<Callback<()>>>>,
    on_complete: Rc<RefCell<Option<Callback<u32>>>>,
}

#[cfg(test)]
impl CourseTestHandles {
    pub(crate) fn register(
        &self,
        on_open: Callback<u32>,
        on_close: Callback<()>,
        on_complete: Callback<u32>,
    ) {
        *self.on_open.borrow_mut() = Some(on_open);
        *self.on_close.borrow_mut() = Some(on_close);
        *self.on_complete.borrow_mut() = Some(on_complete);
    }

    pub(crate) fn on_open(&self) -> Callback<u32> {
        (*self.on_open.borrow()).expect("course on_open registered")
    }

    pub(crate) fn on_close(&self) -> Callback<()> {
        (*self.on_close.borrow()).expect("course on_close registered")
    }

    pub(crate) fn on_complete(&self) -> Callback<u32> {
        (*self.on_complete.borrow()).expect("course on_complete registered")
    }
}
