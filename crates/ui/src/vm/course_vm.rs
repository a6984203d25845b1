use course_core::model::{ModuleCatalog, ModuleStatus, ProgressSnapshot};
use services::OpenedModule;

use super::markdown_vm::markdown_to_html;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleRowVm {
    pub number: u32,
    pub title: String,
    pub status: ModuleStatus,
}

impl ModuleRowVm {
    #[must_use]
    pub fn status_class(&self) -> &'static str {
        match self.status {
            ModuleStatus::NotStarted => "progress-module",
            ModuleStatus::InProgress => "progress-module in-progress",
            ModuleStatus::Completed => "progress-module completed",
        }
    }

    #[must_use]
    pub fn status_label(&self) -> &'static str {
        match self.status {
            ModuleStatus::NotStarted => "Not started",
            ModuleStatus::InProgress => "In progress",
            ModuleStatus::Completed => "Completed",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CourseVm {
    pub percent: f64,
    pub completed: usize,
    pub total: usize,
    pub rows: Vec<ModuleRowVm>,
}

impl CourseVm {
    /// Rounded percentage for display, e.g. `14%`.
    #[must_use]
    pub fn percent_label(&self) -> String {
        format!("{:.0}%", self.percent)
    }

    /// Width for the progress bar, with enough precision to stay smooth.
    #[must_use]
    pub fn bar_width(&self) -> String {
        format!("{:.1}%", self.percent)
    }
}

#[must_use]
pub fn map_course(catalog: &ModuleCatalog, snapshot: &ProgressSnapshot) -> CourseVm {
    let rows = catalog
        .entries()
        .map(|entry| ModuleRowVm {
            number: entry.id().value(),
            title: entry.title().to_string(),
            status: snapshot.status(entry.id()),
        })
        .collect();

    CourseVm {
        percent: snapshot.progress.percent(),
        completed: snapshot.progress.completed_count(),
        total: snapshot.progress.total(),
        rows,
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleContentVm {
    pub number: u32,
    pub title: String,
    pub html: String,
}

#[must_use]
pub fn map_opened_module(opened: &OpenedModule) -> ModuleContentVm {
    ModuleContentVm {
        number: opened.number,
        title: opened.title.clone(),
        html: markdown_to_html(&opened.markdown),
    }
}
