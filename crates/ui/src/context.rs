use std::sync::Arc;

use services::ViewerSession;

pub trait UiApp: Send + Sync {
    fn course_title(&self) -> String;
    fn session(&self) -> Arc<ViewerSession>;
}

#[derive(Clone)]
pub struct AppContext {
    course_title: String,
    session: Arc<ViewerSession>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            course_title: app.course_title(),
            session: app.session(),
        }
    }

    #[must_use]
    pub fn course_title(&self) -> &str {
        &self.course_title
    }

    #[must_use]
    pub fn session(&self) -> Arc<ViewerSession> {
        Arc::clone(&self.session)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
