mod course;
mod module_modal;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use course::{CourseProgress, CourseView, ModuleRow};
pub use module_modal::{ModuleBody, ModuleModal};
pub use state::{ViewError, ViewState, view_state_from_resource};
