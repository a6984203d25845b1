use dioxus::prelude::*;
use tracing::debug;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{ModuleContentVm, map_opened_module};

/// Modal showing one module's rendered content.
///
/// Mount it with a `key` per module; the content resource runs once per mount.
#[component]
pub fn ModuleModal(number: u32, on_close: Callback<()>, on_complete: Callback<u32>) -> Element {
    let ctx = use_context::<AppContext>();
    let session = ctx.session();

    let resource = use_resource(move || {
        let session = session.clone();
        async move {
            let opened = session.open_module(number).await;
            Ok::<_, ViewError>(map_opened_module(&opened))
        }
    });

    let state = view_state_from_resource(resource);

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal",
                tabindex: "0",
                onclick: move |evt| evt.stop_propagation(),
                // Focus the dialog so Escape reaches the page handler.
                onmounted: move |evt: MountedEvent| async move {
                    if let Err(err) = evt.set_focus(true).await {
                        debug!(module = number, error = ?err, "could not focus module dialog");
                    }
                },
                button {
                    class: "modal-close",
                    r#type: "button",
                    onclick: move |_| on_close.call(()),
                    "×"
                }
                match state {
                    ViewState::Ready(module) => rsx! {
                        ModuleBody { module, on_complete }
                    },
                    ViewState::Error(err) => rsx! {
                        h2 { "Error" }
                        p { "{err.message()}" }
                    },
                    ViewState::Idle | ViewState::Loading => rsx! {
                        div { class: "module-loading",
                            div { class: "loading-spinner" }
                            p { "Loading module content..." }
                        }
                    },
                }
            }
        }
    }
}

#[component]
pub fn ModuleBody(module: ModuleContentVm, on_complete: Callback<u32>) -> Element {
    let number = module.number;

    rsx! {
        h2 { id: "module-title", "Module {number}: {module.title}" }
        div {
            class: "module-content-container",
            dangerous_inner_html: "{module.html}",
        }
        div { class: "modal-actions",
            button {
                class: "btn",
                r#type: "button",
                onclick: move |_| on_complete.call(number),
                "Mark as Complete"
            }
        }
    }
}
